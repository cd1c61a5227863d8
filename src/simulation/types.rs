//! Core types for the resource flow simulation

use std::fmt;
use std::ops::Range;

/// Identifier of a node in the resource graph
/// Node ids are dense and match the order nodes were created in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

/// Identifier of a vehicle travelling along an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VehicleId(pub usize);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Range edge distances are drawn from by default (end exclusive)
pub const DEFAULT_DISTANCE_RANGE: Range<u32> = 1..10;

/// Number of nodes in the default graph
pub const DEFAULT_NODE_COUNT: usize = 5;

/// Total people spread over the default graph
pub const DEFAULT_TOTAL_PEOPLE: u32 = 100;

/// Total cars spread over the default graph
pub const DEFAULT_TOTAL_CARS: u32 = 20;

/// Max capacity of each node in the default graph
pub const DEFAULT_NODE_MAX_CAPACITY: u32 = 50;

/// Max capacity of each edge in the default graph
pub const DEFAULT_EDGE_MAX_CAPACITY: u32 = 30;

/// Multiplier turning an edge distance into its travel time
pub const DEFAULT_DISTANCE_CONSTANT: f64 = 1.5;

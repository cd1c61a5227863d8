//! Node resource bookkeeping for the resource graph

use super::types::NodeId;

/// A location in the resource network
#[derive(Debug, Clone, PartialEq)]
pub struct SimNode {
    pub id: NodeId,
    /// People currently at the node
    pub people: i64,
    /// Parked cars at the node (not the vehicles in transit on edges)
    pub cars: i64,
    /// Informational ceiling, only checked under an enforced capacity policy
    pub max_capacity: i64,
}

impl SimNode {
    pub fn new(id: NodeId, people: i64, cars: i64, max_capacity: i64) -> Self {
        Self {
            id,
            people,
            cars,
            max_capacity,
        }
    }

    /// Counts the node would hold after applying the deltas
    pub fn levels_after(&self, people_delta: i64, cars_delta: i64) -> (i64, i64) {
        (self.people + people_delta, self.cars + cars_delta)
    }

    /// Whether the given counts fit within this node's capacity
    pub fn accepts(&self, people: i64, cars: i64) -> bool {
        people >= 0 && cars >= 0 && people <= self.max_capacity
    }

    pub fn apply(&mut self, people_delta: i64, cars_delta: i64) {
        self.people += people_delta;
        self.cars += cars_delta;
    }
}

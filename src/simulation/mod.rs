//! Resource flow simulation
//!
//! A fixed set of nodes holding people and cars, joined by a directed edge
//! for every ordered pair of distinct nodes. Edges carry flow against a
//! capacity and track the vehicles travelling along them.

mod config;
mod distance;
mod edge;
mod error;
mod node;
pub mod report;
mod resource_graph;
mod types;
mod vehicle;

pub use config::{GraphConfig, MoveSemantics, NodeCapacityPolicy, VehicleIdScope};
pub use distance::{DistanceSampler, FixedDistance, UniformDistance};
pub use edge::FlowEdge;
pub use error::{GraphError, GraphResult};
pub use node::SimNode;
pub use resource_graph::{ResourceGraph, VehiclePositions};
#[allow(unused_imports)]
pub use types::{
    NodeId, VehicleId, DEFAULT_DISTANCE_CONSTANT, DEFAULT_DISTANCE_RANGE,
    DEFAULT_EDGE_MAX_CAPACITY, DEFAULT_NODE_COUNT, DEFAULT_NODE_MAX_CAPACITY, DEFAULT_TOTAL_CARS,
    DEFAULT_TOTAL_PEOPLE,
};
pub use vehicle::SimVehicle;

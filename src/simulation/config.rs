//! Construction parameters and behaviour policies for the resource graph

use super::error::{GraphError, GraphResult};
use super::types::{
    DEFAULT_DISTANCE_CONSTANT, DEFAULT_EDGE_MAX_CAPACITY, DEFAULT_NODE_COUNT,
    DEFAULT_NODE_MAX_CAPACITY, DEFAULT_TOTAL_CARS, DEFAULT_TOTAL_PEOPLE,
};

/// Whether node resource levels are checked against their max capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeCapacityPolicy {
    /// Max capacity is informational only; counts may go negative
    #[default]
    Advisory,
    /// Updates leaving a negative count, or more people than max capacity, are rejected
    Enforced,
}

/// How vehicle ids are assigned when vehicles enter an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleIdScope {
    /// Ids count up from 1 within each edge's vehicle list
    #[default]
    PerEdge,
    /// Ids come from one counter owned by the graph and are never reused
    Global,
}

/// What a failing move leaves behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveSemantics {
    /// The whole path is validated before anything is mutated
    #[default]
    Atomic,
    /// Steps are applied one by one; earlier steps stay applied on failure
    Sequential,
}

/// Parameters used to build a [`ResourceGraph`](super::ResourceGraph)
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    pub node_count: usize,
    pub total_people: u32,
    pub total_cars: u32,
    pub node_max_capacity: u32,
    pub edge_max_capacity: u32,
    /// Travel time of an edge is its distance times this constant
    pub distance_constant: f64,
    pub node_capacity_policy: NodeCapacityPolicy,
    pub vehicle_id_scope: VehicleIdScope,
    pub move_semantics: MoveSemantics,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            total_people: DEFAULT_TOTAL_PEOPLE,
            total_cars: DEFAULT_TOTAL_CARS,
            node_max_capacity: DEFAULT_NODE_MAX_CAPACITY,
            edge_max_capacity: DEFAULT_EDGE_MAX_CAPACITY,
            distance_constant: DEFAULT_DISTANCE_CONSTANT,
            node_capacity_policy: NodeCapacityPolicy::default(),
            vehicle_id_scope: VehicleIdScope::default(),
            move_semantics: MoveSemantics::default(),
        }
    }
}

impl GraphConfig {
    pub fn new(
        node_count: usize,
        total_people: u32,
        total_cars: u32,
        node_max_capacity: u32,
        edge_max_capacity: u32,
        distance_constant: f64,
    ) -> Self {
        Self {
            node_count,
            total_people,
            total_cars,
            node_max_capacity,
            edge_max_capacity,
            distance_constant,
            ..Self::default()
        }
    }

    pub fn with_node_capacity_policy(mut self, policy: NodeCapacityPolicy) -> Self {
        self.node_capacity_policy = policy;
        self
    }

    pub fn with_vehicle_id_scope(mut self, scope: VehicleIdScope) -> Self {
        self.vehicle_id_scope = scope;
        self
    }

    pub fn with_move_semantics(mut self, semantics: MoveSemantics) -> Self {
        self.move_semantics = semantics;
        self
    }

    /// People each node starts with; the remainder of the division is dropped
    pub fn people_per_node(&self) -> i64 {
        i64::from(self.total_people) / self.divisor()
    }

    /// Cars each node starts with; the remainder of the division is dropped
    pub fn cars_per_node(&self) -> i64 {
        i64::from(self.total_cars) / self.divisor()
    }

    fn divisor(&self) -> i64 {
        i64::try_from(self.node_count).unwrap_or(i64::MAX).max(1)
    }

    /// Check the parameters describe a buildable graph
    pub fn validate(&self) -> GraphResult<()> {
        if self.node_count == 0 {
            return Err(GraphError::InvalidConstruction(
                "node count must be at least 1".to_string(),
            ));
        }
        if self.node_max_capacity == 0 {
            return Err(GraphError::InvalidConstruction(
                "node max capacity must be positive".to_string(),
            ));
        }
        if self.edge_max_capacity == 0 {
            return Err(GraphError::InvalidConstruction(
                "edge max capacity must be positive".to_string(),
            ));
        }
        if !self.distance_constant.is_finite() || self.distance_constant <= 0.0 {
            return Err(GraphError::InvalidConstruction(format!(
                "distance constant must be finite and positive, got {}",
                self.distance_constant
            )));
        }
        Ok(())
    }
}

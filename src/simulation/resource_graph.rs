//! The resource graph: a fully connected directed graph whose nodes hold
//! people and cars and whose edges carry flow and vehicles in transit.

use log::{debug, info, trace, warn};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, HashMap};

use super::config::{GraphConfig, MoveSemantics, NodeCapacityPolicy, VehicleIdScope};
use super::distance::{DistanceSampler, UniformDistance};
use super::edge::FlowEdge;
use super::error::{GraphError, GraphResult};
use super::node::SimNode;
use super::report;
use super::types::{NodeId, VehicleId};

/// Vehicles currently on each edge, keyed by `(from, to)`
pub type VehiclePositions = BTreeMap<(NodeId, NodeId), Vec<(VehicleId, f64)>>;

/// A resolved step of a path: its endpoints and the edge joining them
type PathStep = (NodeId, NodeId, EdgeIndex);

#[derive(Debug, Clone)]
pub struct ResourceGraph {
    /// Node `i` lives at petgraph index `i`
    graph: DiGraph<SimNode, FlowEdge>,

    config: GraphConfig,

    /// Last id handed out under `VehicleIdScope::Global`
    last_vehicle_id: usize,

    /// Total time vehicles have been advanced by
    time: f64,
}

impl ResourceGraph {
    /// Build a graph, drawing every edge distance from `sampler`
    pub fn new<S>(config: GraphConfig, sampler: &mut S) -> GraphResult<Self>
    where
        S: DistanceSampler + ?Sized,
    {
        config.validate()?;

        let node_count = config.node_count;
        let people = config.people_per_node();
        let cars = config.cars_per_node();
        let node_max = i64::from(config.node_max_capacity);
        let edge_max = i64::from(config.edge_max_capacity);

        let edge_count = node_count.saturating_mul(node_count - 1);
        let mut graph = DiGraph::with_capacity(node_count, edge_count);
        for i in 0..node_count {
            graph.add_node(SimNode::new(NodeId(i), people, cars, node_max));
        }

        for i in 0..node_count {
            for j in 0..node_count {
                if i == j {
                    continue;
                }
                let distance = sampler.sample(NodeId(i), NodeId(j));
                if distance == 0 {
                    return Err(GraphError::InvalidConstruction(format!(
                        "sampled distance for edge ({}, {}) must be positive",
                        i, j
                    )));
                }
                let edge = FlowEdge::new(edge_max, distance, config.distance_constant);
                trace!(
                    "Edge ({}, {}): distance={}, travel_time={:.2}",
                    i,
                    j,
                    edge.distance,
                    edge.travel_time
                );
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), edge);
            }
        }

        info!(
            "Built resource graph with {} nodes and {} edges ({} people, {} cars per node)",
            graph.node_count(),
            graph.edge_count(),
            people,
            cars
        );

        Ok(Self {
            graph,
            config,
            last_vehicle_id: 0,
            time: 0.0,
        })
    }

    /// Build a graph with reproducible distances drawn from `[1, 10)`
    pub fn with_seed(config: GraphConfig, seed: u64) -> GraphResult<Self> {
        Self::new(config, &mut UniformDistance::with_seed(seed))
    }

    /// Build a graph with distances drawn from `[1, 10)` by the thread RNG
    pub fn from_config(config: GraphConfig) -> GraphResult<Self> {
        Self::new(config, &mut UniformDistance::new())
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Simulation time accumulated by vehicle advancement
    pub fn time(&self) -> f64 {
        self.time
    }

    fn node_index(&self, node: NodeId) -> GraphResult<NodeIndex> {
        if node.index() < self.graph.node_count() {
            Ok(NodeIndex::new(node.index()))
        } else {
            Err(GraphError::NodeNotFound(node))
        }
    }

    fn edge_index(&self, from: NodeId, to: NodeId) -> GraphResult<EdgeIndex> {
        let from_index = self.node_index(from)?;
        let to_index = self.node_index(to)?;
        if from_index == to_index {
            return Err(GraphError::EdgeNotFound(from, to));
        }
        self.graph
            .find_edge(from_index, to_index)
            .ok_or(GraphError::EdgeNotFound(from, to))
    }

    pub fn node(&self, node: NodeId) -> GraphResult<&SimNode> {
        let index = self.node_index(node)?;
        Ok(&self.graph[index])
    }

    pub fn edge(&self, from: NodeId, to: NodeId) -> GraphResult<&FlowEdge> {
        let index = self.edge_index(from, to)?;
        Ok(&self.graph[index])
    }

    /// All nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SimNode)> + '_ {
        self.graph
            .node_indices()
            .map(move |index| (NodeId(index.index()), &self.graph[index]))
    }

    /// All edges in construction order
    pub fn edges(&self) -> impl Iterator<Item = ((NodeId, NodeId), &FlowEdge)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                (NodeId(edge.source().index()), NodeId(edge.target().index())),
                edge.weight(),
            )
        })
    }

    pub fn total_people(&self) -> i64 {
        self.nodes().map(|(_, node)| node.people).sum()
    }

    pub fn total_cars(&self) -> i64 {
        self.nodes().map(|(_, node)| node.cars).sum()
    }

    /// Vehicles on edges that have not reached the end of their edge yet
    pub fn vehicles_in_transit(&self) -> usize {
        self.edges()
            .map(|(_, edge)| edge.vehicles.len() - edge.arrived_count())
            .sum()
    }

    /// Vehicles sitting at the end of their edge
    pub fn vehicles_arrived(&self) -> usize {
        self.edges().map(|(_, edge)| edge.arrived_count()).sum()
    }

    /// Add signed deltas to a node's people and car counts
    pub fn update_resource_level(
        &mut self,
        node: NodeId,
        people_delta: i64,
        cars_delta: i64,
    ) -> GraphResult<()> {
        let policy = self.config.node_capacity_policy;
        let index = self.node_index(node)?;
        let sim_node = &mut self.graph[index];

        if policy == NodeCapacityPolicy::Enforced {
            let (people, cars) = sim_node.levels_after(people_delta, cars_delta);
            if !sim_node.accepts(people, cars) {
                return Err(GraphError::NodeCapacityViolated { node, people, cars });
            }
        }

        sim_node.apply(people_delta, cars_delta);
        Ok(())
    }

    /// Recompute every edge's remaining capacity from its flow
    pub fn adjust_edge_capacities(&mut self) {
        for edge in self.graph.edge_weights_mut() {
            edge.recompute_capacity();
        }
    }

    /// Move people and cars along `path`, one edge at a time
    ///
    /// Each step takes the resources off its source node, puts them on its
    /// target node, adds `people` to the edge flow and puts `cars` new
    /// vehicles at the start of the edge. A step that drives the edge's
    /// remaining capacity below zero fails with
    /// [`GraphError::CapacityExceeded`]. Under [`MoveSemantics::Atomic`] a
    /// failed move changes nothing; under [`MoveSemantics::Sequential`] the
    /// steps before the failure stay applied, and so does the flow of the
    /// edge that overflowed.
    pub fn move_resources(&mut self, path: &[NodeId], people: u32, cars: u32) -> GraphResult<()> {
        let result = match self.config.move_semantics {
            MoveSemantics::Atomic => self.move_atomic(path, people, cars),
            MoveSemantics::Sequential => self.move_sequential(path, people, cars),
        };

        match &result {
            Ok(()) => debug!(
                "Moved {} people and {} cars along {:?}",
                people, cars, path
            ),
            Err(e) => warn!("Move along {:?} failed: {}", path, e),
        }
        result
    }

    fn resolve_path(&self, path: &[NodeId]) -> GraphResult<Vec<PathStep>> {
        if path.len() < 2 {
            return Err(GraphError::PathTooShort(path.len()));
        }
        path.windows(2)
            .map(|step| {
                let (from, to) = (step[0], step[1]);
                self.edge_index(from, to).map(|edge| (from, to, edge))
            })
            .collect()
    }

    fn move_atomic(&mut self, path: &[NodeId], people: u32, cars: u32) -> GraphResult<()> {
        let steps = self.resolve_path(path)?;
        let people_delta = i64::from(people);
        let cars_delta = i64::from(cars);

        // A path may use the same edge more than once
        let mut demand: HashMap<EdgeIndex, i64> = HashMap::new();
        for &(from, to, edge) in &steps {
            let carried = demand.entry(edge).or_insert(0);
            *carried += people_delta;
            if self.graph[edge].current_capacity - *carried < 0 {
                return Err(GraphError::CapacityExceeded(from, to));
            }
        }

        if self.config.node_capacity_policy == NodeCapacityPolicy::Enforced {
            self.check_node_levels(&steps, people_delta, cars_delta)?;
        }

        for (from, to, edge) in steps {
            self.graph[edge].carry(people_delta);
            self.graph[NodeIndex::new(from.index())].apply(-people_delta, -cars_delta);
            self.graph[NodeIndex::new(to.index())].apply(people_delta, cars_delta);
            self.enter_vehicles(edge, cars);
        }
        Ok(())
    }

    /// Replay the node updates of a move without applying them
    fn check_node_levels(
        &self,
        steps: &[PathStep],
        people_delta: i64,
        cars_delta: i64,
    ) -> GraphResult<()> {
        let mut levels: HashMap<NodeId, (i64, i64)> = HashMap::new();
        for &(from, to, _) in steps {
            for (node, sign) in [(from, -1), (to, 1)] {
                let sim_node = &self.graph[NodeIndex::new(node.index())];
                let level = levels
                    .entry(node)
                    .or_insert((sim_node.people, sim_node.cars));
                level.0 += sign * people_delta;
                level.1 += sign * cars_delta;
                if !sim_node.accepts(level.0, level.1) {
                    return Err(GraphError::NodeCapacityViolated {
                        node,
                        people: level.0,
                        cars: level.1,
                    });
                }
            }
        }
        Ok(())
    }

    fn move_sequential(&mut self, path: &[NodeId], people: u32, cars: u32) -> GraphResult<()> {
        if path.len() < 2 {
            return Err(GraphError::PathTooShort(path.len()));
        }
        let people_delta = i64::from(people);
        let cars_delta = i64::from(cars);

        for step in path.windows(2) {
            let (from, to) = (step[0], step[1]);
            let edge = self.edge_index(from, to)?;

            // A step rejected by a node leaves both nodes and the edge untouched
            if self.config.node_capacity_policy == NodeCapacityPolicy::Enforced {
                self.check_node_levels(&[(from, to, edge)], people_delta, cars_delta)?;
            }

            let flow_edge = &mut self.graph[edge];
            flow_edge.carry(people_delta);
            if flow_edge.is_over_capacity() {
                return Err(GraphError::CapacityExceeded(from, to));
            }

            self.graph[NodeIndex::new(from.index())].apply(-people_delta, -cars_delta);
            self.graph[NodeIndex::new(to.index())].apply(people_delta, cars_delta);
            self.enter_vehicles(edge, cars);
        }
        Ok(())
    }

    fn enter_vehicles(&mut self, edge: EdgeIndex, count: u32) {
        for _ in 0..count {
            let id = match self.config.vehicle_id_scope {
                VehicleIdScope::PerEdge => self.graph[edge].next_local_vehicle_id(),
                VehicleIdScope::Global => {
                    self.last_vehicle_id += 1;
                    VehicleId(self.last_vehicle_id)
                }
            };
            self.graph[edge].push_vehicle(id);
        }
    }

    /// Move every vehicle forward by `elapsed` time units
    ///
    /// Vehicles that reach the end of their edge stay there until the next
    /// [`reset_flows`](Self::reset_flows).
    pub fn advance_vehicle_positions(&mut self, elapsed: f64) -> GraphResult<()> {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(GraphError::InvalidElapsedTime(elapsed));
        }

        self.time += elapsed;
        for edge in self.graph.edge_weights_mut() {
            edge.advance_vehicles(elapsed);
        }
        Ok(())
    }

    /// Clear flow and vehicles on every edge; node counts are left as they are
    pub fn reset_flows(&mut self) {
        for edge in self.graph.edge_weights_mut() {
            edge.reset();
        }
        debug!("Reset flows on {} edges", self.graph.edge_count());
    }

    /// Snapshot of the vehicles on every edge, including empty edges
    pub fn vehicle_positions(&self) -> VehiclePositions {
        self.edges()
            .map(|(key, edge)| {
                let vehicles = edge
                    .vehicles
                    .iter()
                    .map(|vehicle| (vehicle.id, vehicle.position))
                    .collect();
                (key, vehicles)
            })
            .collect()
    }

    /// Print node and edge attributes
    pub fn print_summary(&self) {
        println!("=== Resource Graph Summary ===");
        println!("Time: {:.2}", self.time);
        println!(
            "Nodes: {}, Edges: {}",
            self.node_count(),
            self.edge_count()
        );
        println!("Node attributes:");
        for line in report::node_summary(self) {
            println!("  {}", line);
        }
        println!("Edge attributes:");
        for line in report::edge_summary(self) {
            println!("  {}", line);
        }
    }
}

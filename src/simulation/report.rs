//! Text dumps of node and edge attributes

use super::resource_graph::ResourceGraph;

/// One line per node, in id order
pub fn node_summary(graph: &ResourceGraph) -> Vec<String> {
    graph
        .nodes()
        .map(|(id, node)| {
            format!(
                "Node {}: people={}, cars={}, max_capacity={}",
                id, node.people, node.cars, node.max_capacity
            )
        })
        .collect()
}

/// One line per edge, in construction order
pub fn edge_summary(graph: &ResourceGraph) -> Vec<String> {
    graph
        .edges()
        .map(|((from, to), edge)| {
            format!(
                "Edge ({}, {}): max_capacity={}, current_capacity={}, distance={}, travel_time={:.2}, flow={}, vehicles={}",
                from,
                to,
                edge.max_capacity,
                edge.current_capacity,
                edge.distance,
                edge.travel_time,
                edge.flow,
                edge.vehicles.len()
            )
        })
        .collect()
}

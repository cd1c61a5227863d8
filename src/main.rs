use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use resource_flow::simulation::{
    GraphConfig, GraphError, MoveSemantics, NodeCapacityPolicy, NodeId, ResourceGraph,
    VehicleIdScope,
};

#[derive(Parser)]
#[command(name = "resource_flow")]
#[command(about = "Headless resource flow simulation over a fully connected graph")]
struct Cli {
    /// Number of nodes
    #[arg(long, default_value = "5")]
    nodes: usize,

    /// Total people spread evenly over the nodes
    #[arg(long, default_value = "100")]
    people: u32,

    /// Total cars spread evenly over the nodes
    #[arg(long, default_value = "20")]
    cars: u32,

    /// Max capacity of each node
    #[arg(long, default_value = "50")]
    node_max: u32,

    /// Max capacity of each edge
    #[arg(long, default_value = "30")]
    edge_max: u32,

    /// Travel time per unit of distance
    #[arg(long, default_value = "1.5")]
    distance_constant: f64,

    /// Seed for edge distances; unseeded when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Comma separated node ids to move resources along
    #[arg(long, value_delimiter = ',', default_value = "0,1,2")]
    path: Vec<usize>,

    /// People to move along the path
    #[arg(long, default_value = "10")]
    move_people: u32,

    /// Cars to move along the path
    #[arg(long, default_value = "2")]
    move_cars: u32,

    /// Number of ticks to advance vehicles for
    #[arg(long, default_value = "10")]
    ticks: u32,

    /// Time delta per tick
    #[arg(long, default_value = "1.0")]
    delta: f64,

    /// Keep partial state when a move fails part way along its path
    #[arg(long)]
    sequential_moves: bool,

    /// Reject node updates outside the node's capacity
    #[arg(long)]
    enforce_node_capacity: bool,

    /// Number vehicles from one counter instead of per edge
    #[arg(long)]
    global_vehicle_ids: bool,
}

impl Cli {
    fn graph_config(&self) -> GraphConfig {
        let mut config = GraphConfig::new(
            self.nodes,
            self.people,
            self.cars,
            self.node_max,
            self.edge_max,
            self.distance_constant,
        );
        if self.sequential_moves {
            config = config.with_move_semantics(MoveSemantics::Sequential);
        }
        if self.enforce_node_capacity {
            config = config.with_node_capacity_policy(NodeCapacityPolicy::Enforced);
        }
        if self.global_vehicle_ids {
            config = config.with_vehicle_id_scope(VehicleIdScope::Global);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run_headless(&cli)
}

fn run_headless(cli: &Cli) -> Result<()> {
    let config = cli.graph_config();
    let mut graph = match cli.seed {
        Some(seed) => ResourceGraph::with_seed(config, seed),
        None => ResourceGraph::from_config(config),
    }
    .context("Failed to build resource graph")?;

    let path: Vec<NodeId> = cli.path.iter().copied().map(NodeId).collect();
    // The graph logs the outcome; over capacity does not end the run
    match graph.move_resources(&path, cli.move_people, cli.move_cars) {
        Ok(()) | Err(GraphError::CapacityExceeded(_, _)) => {}
        Err(e) => return Err(e).context("Failed to move resources"),
    }

    graph.adjust_edge_capacities();

    println!("Initial state:");
    graph.print_summary();
    println!();

    for tick in 1..=cli.ticks {
        graph
            .advance_vehicle_positions(cli.delta)
            .context("Failed to advance vehicles")?;
        println!(
            "--- After tick {} ({:.1} simulated time) ---",
            tick,
            graph.time()
        );
        for ((from, to), vehicles) in graph.vehicle_positions() {
            if vehicles.is_empty() {
                continue;
            }
            let positions: Vec<String> = vehicles
                .iter()
                .map(|(id, position)| format!("#{}@{:.2}", id, position))
                .collect();
            println!("  Edge ({}, {}): {}", from, to, positions.join(" "));
        }
    }

    info!("=== SIMULATION COMPLETE ===");
    info!("Simulated time: {:.2}", graph.time());
    info!("Total people: {}", graph.total_people());
    info!("Total cars: {}", graph.total_cars());
    info!("Vehicles in transit: {}", graph.vehicles_in_transit());
    info!("Vehicles arrived: {}", graph.vehicles_arrived());

    Ok(())
}

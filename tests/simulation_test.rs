use std::process::{Command, Output};

fn run_simulation(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resource_flow"))
        .args(args)
        .env("RUST_LOG", "warn,resource_flow=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that the default headless run completes and reports totals
#[test]
fn test_headless_simulation_runs() {
    let output = run_simulation(&["--seed", "42", "--ticks", "20"]);

    assert!(
        output.status.success(),
        "Simulation failed to run. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
    assert!(stderr.contains("Total people: 100"), "stderr: {}", stderr);
    assert!(stderr.contains("Total cars: 20"), "stderr: {}", stderr);

    // Travel time is at most 9 * 1.5, so 20 ticks of 1.0 lands both moved
    // cars on both edges of the path
    assert!(stderr.contains("Vehicles arrived: 4"), "stderr: {}", stderr);
}

/// Test that node and edge attributes are printed
#[test]
fn test_attributes_printed() {
    let output = run_simulation(&["--seed", "1", "--ticks", "1"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Node attributes:"));
    assert!(stdout.contains("Edge attributes:"));
    assert!(stdout.contains("Node 1: people=20, cars=4, max_capacity=50"));
    assert!(stdout.contains("Edge (0, 1): max_capacity=30, current_capacity=20"));
}

/// Test that an over-capacity move is reported but does not abort the run
#[test]
fn test_capacity_exceeded_is_reported() {
    let output = run_simulation(&["--seed", "3", "--move-people", "31"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("capacity exceeded on edge (0, 1)"),
        "stderr: {}",
        stderr
    );
    assert_eq!(
        stderr.matches("capacity exceeded on edge").count(),
        1,
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("Vehicles arrived: 0"), "stderr: {}", stderr);
}

/// Test that invalid construction parameters fail the run
#[test]
fn test_zero_nodes_fails() {
    let output = run_simulation(&["--nodes", "0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to build resource graph"),
        "stderr: {}",
        stderr
    );
}

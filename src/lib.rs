//! Resource Flow Library
//!
//! Simulates people and vehicles moving through a fully connected directed
//! graph with edge capacities, distances and travel times.

pub mod simulation;

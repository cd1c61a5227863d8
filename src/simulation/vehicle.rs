//! Vehicle movement along a single edge
//!
//! Edges are abstract 1-D segments, so a vehicle is just an id and how far
//! along the edge it has travelled.

use super::types::VehicleId;

/// A vehicle in transit on an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimVehicle {
    pub id: VehicleId,
    /// Progress along the edge, always within `[0, distance]`
    pub position: f64,
}

impl SimVehicle {
    /// A vehicle that just entered its edge
    pub fn new(id: VehicleId) -> Self {
        Self { id, position: 0.0 }
    }

    /// Move forward by `speed * elapsed`, stopping at the end of the edge
    pub fn advance(&mut self, speed: f64, elapsed: f64, distance: f64) {
        self.position = (self.position + speed * elapsed).clamp(0.0, distance);
    }

    pub fn has_arrived(&self, distance: f64) -> bool {
        self.position >= distance
    }
}

//! Edge state for the resource graph: capacity, flow and vehicles in transit

use super::types::VehicleId;
use super::vehicle::SimVehicle;

/// A directed connection between two distinct nodes
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub max_capacity: i64,
    /// Remaining headroom; `max_capacity - flow` after a capacity adjustment
    pub current_capacity: i64,
    pub distance: u32,
    pub travel_time: f64,
    /// People moved along this edge since the last reset
    pub flow: i64,
    /// Vehicles in transit, in the order they entered
    pub vehicles: Vec<SimVehicle>,
}

impl FlowEdge {
    pub fn new(max_capacity: i64, distance: u32, distance_constant: f64) -> Self {
        Self {
            max_capacity,
            current_capacity: max_capacity,
            distance,
            travel_time: f64::from(distance) * distance_constant,
            flow: 0,
            vehicles: Vec::new(),
        }
    }

    /// Distance covered per unit of time
    pub fn speed(&self) -> f64 {
        f64::from(self.distance) / self.travel_time
    }

    /// Record `people` more flow and take it off the remaining capacity
    pub fn carry(&mut self, people: i64) {
        self.flow += people;
        self.current_capacity -= people;
    }

    pub fn is_over_capacity(&self) -> bool {
        self.current_capacity < 0
    }

    pub fn recompute_capacity(&mut self) {
        self.current_capacity = self.max_capacity - self.flow;
    }

    /// Id the next vehicle gets when ids are scoped to this edge
    pub fn next_local_vehicle_id(&self) -> VehicleId {
        VehicleId(self.vehicles.len() + 1)
    }

    pub fn push_vehicle(&mut self, id: VehicleId) {
        self.vehicles.push(SimVehicle::new(id));
    }

    pub fn advance_vehicles(&mut self, elapsed: f64) {
        let speed = self.speed();
        let distance = f64::from(self.distance);
        for vehicle in &mut self.vehicles {
            vehicle.advance(speed, elapsed, distance);
        }
    }

    pub fn arrived_count(&self) -> usize {
        let distance = f64::from(self.distance);
        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.has_arrived(distance))
            .count()
    }

    /// Clear flow and vehicles, restoring full capacity
    pub fn reset(&mut self) {
        self.flow = 0;
        self.current_capacity = self.max_capacity;
        self.vehicles.clear();
    }
}

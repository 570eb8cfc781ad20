use crate::geom::{Vector, vector};

/// Tuning knobs for the simulation. All fields are host-overridable; the
/// defaults match the stylized mood-board look rather than physical units.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Seed for deterministic randomness (initial placement and velocities).
    pub random_seed: u64,
    /// Radius mapped to by magnitude 0.
    pub min_radius: f64,
    /// Radius mapped to by magnitude 100.
    pub max_radius: f64,
    /// Constant acceleration applied to every free particle each tick.
    /// Positive y pulls bubbles down; a negative y gives a buoyant drift.
    pub gravity: Vector,
    /// Multiplicative energy loss on wall reflection, in `(0, 1)`.
    pub wall_damping: f64,
    /// Restitution for the particle-particle normal velocity exchange, in
    /// `[0, 1]`. 1 is a fully elastic bounce, 0 kills the closing speed.
    pub restitution: f64,
    /// Upper bound on random placement retries per bubble before a slight
    /// initial overlap is accepted.
    pub max_placement_attempts: u32,
    /// Initial velocity components are drawn uniformly from
    /// `[-initial_speed, initial_speed]`.
    pub initial_speed: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            random_seed: 0,
            min_radius: 10.0,
            max_radius: 40.0,
            gravity: vector(0.0, 60.0),
            wall_damping: 0.9,
            restitution: 0.6,
            max_placement_attempts: 100,
            initial_speed: 20.0,
        }
    }
}

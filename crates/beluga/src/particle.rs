use crate::config::SimConfig;
use crate::geom::{Point, Vector};

/// Physics record for one rendered bubble.
///
/// `display_color` and `display_name` are opaque payloads for the renderer;
/// the simulation never inspects them.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: String,
    /// Circle center, updated every tick.
    pub position: Point,
    pub velocity: Vector,
    /// Derived once from the input magnitude; immutable after creation.
    /// Magnitude changes re-seed the arena instead of resizing mid-flight.
    pub radius: f64,
    /// Collision-impulse weight, proportional to the radius. Never zero, so
    /// impulse division is always defined.
    pub mass: f64,
    /// True only for the particle currently captured by the drag controller.
    pub is_dragged: bool,
    pub display_color: String,
    pub display_name: String,
}

impl Particle {
    pub fn new(
        id: String,
        position: Point,
        velocity: Vector,
        radius: f64,
        display_color: String,
        display_name: String,
    ) -> Self {
        Self {
            id,
            position,
            velocity,
            radius,
            mass: radius,
            is_dragged: false,
            display_color,
            display_name,
        }
    }
}

/// Maps a magnitude in `[0, 100]` monotonically into
/// `[min_radius, max_radius]`.
pub fn radius_for_magnitude(magnitude: f64, config: &SimConfig) -> f64 {
    config.min_radius + (magnitude / 100.0) * (config.max_radius - config.min_radius)
}

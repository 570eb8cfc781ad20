use crate::geom::{Point, Vector, vector};
use crate::particle::Particle;

#[derive(Debug, Clone, Copy, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        index: usize,
        /// Pointer minus circle center at capture time, so the bubble does
        /// not snap to the pointer tip.
        offset: Vector,
    },
}

/// Pointer capture for a single particle.
///
/// While a particle is captured its position is driven by the pointer and the
/// integrator and resolvers leave it alone; other particles still collide
/// against it as an immovable obstacle. At most one capture is active; a
/// second `begin` before `end` is ignored.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Hit-tests the pointer against all particles and captures the first
    /// hit in reverse draw order (the topmost circle wins, matching pointer
    /// capture semantics). Returns whether a particle was captured.
    pub fn begin(&mut self, particles: &mut [Particle], pointer: Point) -> bool {
        if matches!(self.state, DragState::Dragging { .. }) {
            return false;
        }
        for (index, p) in particles.iter_mut().enumerate().rev() {
            let offset = pointer - p.position;
            if offset.length() <= p.radius {
                p.is_dragged = true;
                p.velocity = vector(0.0, 0.0);
                self.state = DragState::Dragging { index, offset };
                return true;
            }
        }
        false
    }

    /// Moves the captured particle to `pointer - offset`. The drag position
    /// is authoritative; simulation passes never move a captured particle.
    /// No-op while idle.
    pub fn update(&mut self, particles: &mut [Particle], pointer: Point) {
        if let DragState::Dragging { index, offset } = self.state {
            particles[index].position = pointer - offset;
        }
    }

    /// Releases the captured particle with zero velocity so it resumes
    /// falling from rest on the next tick. Idempotent; no-op while idle.
    pub fn end(&mut self, particles: &mut [Particle]) {
        if let DragState::Dragging { index, .. } = self.state {
            particles[index].is_dragged = false;
        }
        self.state = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}

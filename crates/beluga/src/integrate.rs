use crate::geom::Vector;
use crate::particle::Particle;

/// Advances every free particle by one explicit Euler step: velocity picks up
/// `gravity * dt`, then position picks up `velocity * dt`.
///
/// Dragged particles are skipped entirely. Their position is authoritative
/// from the drag controller, and their velocity is held at zero so a released
/// bubble resumes from rest instead of inheriting stale momentum.
pub fn integrate(particles: &mut [Particle], dt: f64, gravity: Vector) {
    for p in particles.iter_mut() {
        if p.is_dragged {
            continue;
        }
        p.velocity += gravity * dt;
        p.position += p.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::integrate;
    use crate::geom::{point, vector};
    use crate::particle::Particle;

    fn particle_at(x: f64, y: f64) -> Particle {
        Particle::new(
            "p".to_string(),
            point(x, y),
            vector(0.0, 0.0),
            10.0,
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn accelerates_then_moves() {
        let mut particles = vec![particle_at(0.0, 0.0)];
        integrate(&mut particles, 0.5, vector(0.0, 10.0));
        assert_eq!(particles[0].velocity.y, 5.0);
        assert_eq!(particles[0].position.y, 2.5);
    }

    #[test]
    fn dragged_particles_are_untouched() {
        let mut particles = vec![particle_at(3.0, 4.0)];
        particles[0].is_dragged = true;
        integrate(&mut particles, 1.0, vector(0.0, 10.0));
        assert_eq!(particles[0].position, point(3.0, 4.0));
        assert_eq!(particles[0].velocity, vector(0.0, 0.0));
    }
}

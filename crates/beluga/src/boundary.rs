use crate::particle::Particle;

/// Reflects and clamps every free particle against the container walls.
///
/// Each axis is handled independently: a crossing reflects that velocity
/// component with `-v * damping`, and the position is clamped so the full
/// circle stays inside `[radius, dim - radius]` even on the tick the crossing
/// is detected. Floating-point overshoot therefore cannot leave a circle
/// embedded in a wall. Simultaneous corner contact produces two independent
/// reflections, an accepted simplification over true corner physics.
pub fn resolve_boundaries(particles: &mut [Particle], width: f64, height: f64, damping: f64) {
    for p in particles.iter_mut() {
        if p.is_dragged {
            continue;
        }
        let r = p.radius;
        if p.position.x - r < 0.0 || p.position.x + r > width {
            p.velocity.x = -p.velocity.x * damping;
        }
        p.position.x = clamp_axis(p.position.x, r, width - r);
        if p.position.y - r < 0.0 || p.position.y + r > height {
            p.velocity.y = -p.velocity.y * damping;
        }
        p.position.y = clamp_axis(p.position.y, r, height - r);
    }
}

fn clamp_axis(v: f64, lo: f64, hi: f64) -> f64 {
    // A circle wider than the container has lo > hi; pin it to the midline
    // rather than panicking in f64::clamp.
    if lo > hi {
        return (lo + hi) / 2.0;
    }
    v.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::resolve_boundaries;
    use crate::geom::{point, vector};
    use crate::particle::Particle;

    fn particle(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Particle {
        Particle::new(
            "p".to_string(),
            point(x, y),
            vector(vx, vy),
            radius,
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn floor_contact_reflects_with_damping_and_clamps() {
        let mut particles = vec![particle(50.0, 98.0, 0.0, 10.0, 5.0)];
        resolve_boundaries(&mut particles, 100.0, 100.0, 0.9);
        assert_eq!(particles[0].velocity.y, -9.0);
        assert_eq!(particles[0].position.y, 95.0);
    }

    #[test]
    fn interior_particle_is_untouched() {
        let mut particles = vec![particle(50.0, 50.0, 3.0, -2.0, 5.0)];
        resolve_boundaries(&mut particles, 100.0, 100.0, 0.9);
        assert_eq!(particles[0].position, point(50.0, 50.0));
        assert_eq!(particles[0].velocity, vector(3.0, -2.0));
    }

    #[test]
    fn corner_contact_reflects_both_axes() {
        let mut particles = vec![particle(1.0, 1.0, -4.0, -4.0, 5.0)];
        resolve_boundaries(&mut particles, 100.0, 100.0, 0.5);
        assert_eq!(particles[0].velocity.x, 2.0);
        assert_eq!(particles[0].velocity.y, 2.0);
        assert_eq!(particles[0].position, point(5.0, 5.0));
    }

    #[test]
    fn dragged_particles_may_leave_the_container() {
        let mut particles = vec![particle(-20.0, 50.0, 0.0, 0.0, 5.0)];
        particles[0].is_dragged = true;
        resolve_boundaries(&mut particles, 100.0, 100.0, 0.9);
        assert_eq!(particles[0].position, point(-20.0, 50.0));
    }

    #[test]
    fn oversized_particle_is_pinned_to_the_midline() {
        let mut particles = vec![particle(10.0, 50.0, 0.0, 0.0, 80.0)];
        resolve_boundaries(&mut particles, 100.0, 100.0, 0.9);
        assert_eq!(particles[0].position.x, 50.0);
    }
}

use crate::geom::vector;
use crate::particle::Particle;

/// Separation direction used when two centers coincide exactly and no contact
/// normal exists. Any fixed angle works; what matters is that the choice is
/// deterministic and avoids a division by zero.
const COINCIDENT_SEPARATION_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Resolves particle-particle overlap for all unordered pairs.
///
/// One pass in ascending index order per tick. With three or more mutually
/// touching particles a single pass can leave residual overlap; it
/// self-corrects over subsequent ticks, and the stylized look does not
/// warrant an iterative relaxation solver.
pub fn resolve_collisions(particles: &mut [Particle], restitution: f64) {
    let n = particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            resolve_pair(particles, i, j, restitution);
        }
    }
}

fn resolve_pair(particles: &mut [Particle], i: usize, j: usize, restitution: f64) {
    let (head, tail) = particles.split_at_mut(j);
    let a = &mut head[i];
    let b = &mut tail[0];
    if a.is_dragged && b.is_dragged {
        // Unreachable while at most one particle is captured.
        return;
    }

    let delta = b.position - a.position;
    let distance = delta.length();
    let min_distance = a.radius + b.radius;
    if distance >= min_distance {
        return;
    }

    let normal = if distance == 0.0 {
        vector(
            COINCIDENT_SEPARATION_ANGLE.cos(),
            COINCIDENT_SEPARATION_ANGLE.sin(),
        )
    } else {
        delta / distance
    };
    let overlap = min_distance - distance;

    // Positional correction: split the push-apart by the partner's mass share
    // so heavier bubbles move less. A dragged particle is pinned by the
    // pointer; its partner absorbs the whole correction.
    if a.is_dragged {
        b.position += normal * overlap;
    } else if b.is_dragged {
        a.position -= normal * overlap;
    } else {
        let total_mass = a.mass + b.mass;
        a.position -= normal * (overlap * (b.mass / total_mass));
        b.position += normal * (overlap * (a.mass / total_mass));
    }

    // Velocity exchange along the contact normal. Tangential components pass
    // through untouched. `normal` points from `a` to `b`, so the pair is
    // approaching exactly when `a`'s normal speed exceeds `b`'s; separating
    // pairs keep their velocities, otherwise the freshly corrected contact
    // would jitter.
    let un_a = a.velocity.dot(normal);
    let un_b = b.velocity.dot(normal);
    if un_a - un_b <= 0.0 {
        return;
    }

    if a.is_dragged {
        b.velocity += normal * (-(1.0 + restitution) * un_b);
    } else if b.is_dragged {
        a.velocity += normal * (-(1.0 + restitution) * un_a);
    } else {
        let total_mass = a.mass + b.mass;
        let momentum = a.mass * un_a + b.mass * un_b;
        let va = (momentum + restitution * b.mass * (un_b - un_a)) / total_mass;
        let vb = (momentum + restitution * a.mass * (un_a - un_b)) / total_mass;
        a.velocity += normal * (va - un_a);
        b.velocity += normal * (vb - un_b);
    }
}

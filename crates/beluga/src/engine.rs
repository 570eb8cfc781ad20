use crate::boundary::resolve_boundaries;
use crate::collision::resolve_collisions;
use crate::config::SimConfig;
use crate::drag::DragController;
use crate::error::{Error, Result};
use crate::geom::{Point, point, vector};
use crate::integrate::integrate;
use crate::particle::{Particle, radius_for_magnitude};
use crate::rng::XorShift64Star;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One seed entry supplied by the host. `color` and `display_name` are
/// opaque payloads carried through to the snapshot untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BubbleSpec {
    pub id: String,
    /// Relative magnitude in `[0, 100]`, monotonically mapped to the radius.
    pub magnitude: f64,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

/// Point-in-time render data for one bubble. Snapshots are owned copies;
/// holding one across ticks observes nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bubble {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Facade over the particle arena: seed, fixed-tick stepping, pointer drag,
/// and render snapshots.
///
/// The engine is a plain synchronous object with no host lifecycle baked in;
/// an animation callback, a game loop, or a test driver can all drive it.
/// The host serializes `step()` and the drag methods onto one execution
/// context, matching a UI event loop.
#[derive(Debug)]
pub struct LayoutEngine {
    config: SimConfig,
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    drag: DragController,
}

impl LayoutEngine {
    /// Creates an engine with an empty arena; call [`seed`](Self::seed)
    /// before stepping.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            drag: DragController::default(),
        }
    }

    /// Replaces the whole arena from the host's entry list.
    ///
    /// Validation happens before anything is mutated: on error the previous
    /// arena (or the empty initial one) is kept untouched, never a partially
    /// seeded state. Placement retries random positions until the candidate
    /// clears every already-placed bubble, up to
    /// `max_placement_attempts`, then accepts the slight overlap rather than
    /// looping forever; the single-pass collision resolver works it out over
    /// the first few ticks.
    pub fn seed(&mut self, entries: &[BubbleSpec], width: f64, height: f64) -> Result<()> {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(Error::InvalidContainer { width, height });
        }
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for entry in entries {
            if !entry.magnitude.is_finite() || !(0.0..=100.0).contains(&entry.magnitude) {
                return Err(Error::MagnitudeOutOfRange {
                    id: entry.id.clone(),
                    magnitude: entry.magnitude,
                });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }

        // Restart the RNG from the configured seed so a given entry list
        // always produces the same arena, run over run.
        let mut rng = XorShift64Star::new(self.config.random_seed);
        let mut particles: Vec<Particle> = Vec::with_capacity(entries.len());
        for entry in entries {
            let radius = radius_for_magnitude(entry.magnitude, &self.config);
            let mut candidate = place(&mut rng, radius, width, height);
            for _ in 0..self.config.max_placement_attempts {
                let clear = particles
                    .iter()
                    .all(|p| (candidate - p.position).length() >= radius + p.radius);
                if clear {
                    break;
                }
                candidate = place(&mut rng, radius, width, height);
            }
            let velocity = vector(
                rng.next_f64_signed() * self.config.initial_speed,
                rng.next_f64_signed() * self.config.initial_speed,
            );
            particles.push(Particle::new(
                entry.id.clone(),
                candidate,
                velocity,
                radius,
                entry.color.clone(),
                entry.display_name.clone(),
            ));
        }

        tracing::debug!(count = particles.len(), width, height, "seeded arena");
        self.particles = particles;
        self.width = width;
        self.height = height;
        self.drag = DragController::default();
        Ok(())
    }

    /// Advances the simulation by one fixed tick.
    ///
    /// The order is load-bearing: collisions are resolved before the
    /// boundary clamp so a wall-adjacent collision correction cannot leave a
    /// circle outside the container. A captured particle's position was
    /// already set by [`update_drag`](Self::update_drag) and is skipped by
    /// every pass.
    pub fn step(&mut self, dt: f64) {
        integrate(&mut self.particles, dt, self.config.gravity);
        resolve_collisions(&mut self.particles, self.config.restitution);
        resolve_boundaries(
            &mut self.particles,
            self.width,
            self.height,
            self.config.wall_damping,
        );
        self.check_finite();
    }

    /// Hit-tests the pointer and captures the topmost bubble under it.
    /// Returns whether a capture started; a miss is a no-op, not an error.
    pub fn begin_drag(&mut self, x: f64, y: f64) -> bool {
        self.drag.begin(&mut self.particles, point(x, y))
    }

    /// Moves the captured bubble; its position is authoritative until
    /// release. No-op while idle.
    pub fn update_drag(&mut self, x: f64, y: f64) {
        self.drag.update(&mut self.particles, point(x, y));
    }

    /// Releases the captured bubble at rest. Idempotent.
    pub fn end_drag(&mut self) {
        self.drag.end(&mut self.particles);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Point-in-time copy of all render data, in seed order.
    pub fn snapshot(&self) -> Vec<Bubble> {
        self.particles
            .iter()
            .map(|p| Bubble {
                id: p.id.clone(),
                x: p.position.x,
                y: p.position.y,
                radius: p.radius,
                color: p.display_color.clone(),
                display_name: p.display_name.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    // Non-finite positions are an internal defect, never valid output: fatal
    // under debug assertions, a logged invariant violation in release.
    fn check_finite(&self) {
        for p in &self.particles {
            let ok = p.position.x.is_finite()
                && p.position.y.is_finite()
                && p.velocity.x.is_finite()
                && p.velocity.y.is_finite();
            debug_assert!(ok, "non-finite state for bubble `{}`", p.id);
            if !ok {
                tracing::error!(id = %p.id, "simulation produced a non-finite position or velocity");
            }
        }
    }
}

fn place(rng: &mut XorShift64Star, radius: f64, width: f64, height: f64) -> Point {
    // Candidates are drawn from the legal interior. A bubble wider than the
    // container has no legal span; it lands on the wall and the boundary
    // pass pins it to the midline.
    let span_x = (width - 2.0 * radius).max(0.0);
    let span_y = (height - 2.0 * radius).max(0.0);
    point(
        radius + rng.next_f64_unit() * span_x,
        radius + rng.next_f64_unit() * span_y,
    )
}

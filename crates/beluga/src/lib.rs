#![forbid(unsafe_code)]

//! Physics-based bubble layout engine.
//!
//! `beluga` positions mood-board bubbles inside a bounded 2D canvas: a
//! fixed-tick integrator with constant gravity or buoyancy, single-pass
//! impulse collisions with mass-weighted correction, damped wall reflection,
//! and a pointer drag mode, all behind the host-agnostic [`LayoutEngine`]
//! facade. The host drives [`LayoutEngine::step`] from its animation
//! callback and renders the returned snapshot; the engine performs no I/O of
//! its own. This is a stylized layout aid, not a physics engine: units are
//! arbitrary and the solver trades accuracy for a stable look.

pub mod boundary;
pub mod collision;
pub mod config;
pub mod drag;
pub mod engine;
pub mod error;
pub mod geom;
pub mod integrate;
pub mod particle;
mod rng;

pub use config::SimConfig;
pub use engine::{Bubble, BubbleSpec, LayoutEngine};
pub use error::{Error, Result};

//! Core state types for the N-body simulation.
//!
//! Defines the planar body/universe structs:
//! - `Body` using `NVec2` (position/velocity)
//! - `Universe` holding the bodies, the display radius, and the time `t`
//!
//! Only positions, velocities, and `t` change over a run; the body count,
//! masses, labels, and radius are fixed at construction.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub label: String, // display label, never read by the physics
}

#[derive(Debug, Clone)]
pub struct Universe {
    pub bodies: Vec<Body>, // collection of bodies, index identity is stable
    pub radius: f64, // display/coordinate extent
    pub t: f64, // time
}

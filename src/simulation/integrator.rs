//! Fixed-step time integrator for the N-body system
//!
//! Provides the semi-implicit (symplectic) Euler step driven by a
//! `ForceSet` and `Parameters`. The step is two strictly separated phases:
//! a read-only force accumulation over the current positions, then an
//! in-place velocity/position update.

use super::states::{Universe, NVec2};
use super::forces::ForceSet;
use super::params::Parameters;

/// Advance the universe by one step using semi-implicit Euler
/// Uses one force evaluation per step and updates velocities, positions,
/// and `universe.t` in-place based on `params.h0`
pub fn euler_integrator(universe: &mut Universe, forces: &ForceSet, params: &Parameters) {
    let dt = params.h0; // time step dt
    let n = universe.bodies.len();

    // f[i] holds the net force on body i at the current time t = universe.t,
    // fully populated before any body moves
    let mut f = vec![NVec2::zeros(); n];
    forces.accumulate_forces(universe.t, &*universe, &mut f);

    apply_forces(universe, &f, dt);

    // Increment the universe time by one full step
    universe.t += dt;
}

/// Apply already-computed net forces to every body over a step `dt`
///
/// Per body k, in order:
/// 1. a = f_k / m_k
/// 2. v_k += a dt
/// 3. x_k += v_k dt  (the freshly updated velocity, not the old one)
///
/// Updating positions with the post-kick velocity is what makes the scheme
/// semi-implicit rather than pure forward Euler; the two updates must not
/// be swapped
pub fn apply_forces(universe: &mut Universe, f: &[NVec2], dt: f64) {
    for (b, fk) in universe.bodies.iter_mut().zip(f.iter()) {
        let a = *fk / b.m;
        b.v += a * dt;
        b.x += b.v * dt;
    }
}

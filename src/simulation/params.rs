//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and stopping time,
//! - softening (`eps2`)
//!
//! The gravitational constant is not a parameter; it lives as a compile-time
//! constant in the forces module.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // stopping time (exclusive, strict less-than check)
    pub h0: f64, // step size
    pub eps2: f64, // softening, 0.0 leaves close encounters unguarded
}

//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 157788000.0      # stopping time
//!   h0: 25000.0             # fixed step size
//!   eps2: 0.0               # softening epsilon^2 (optional, default 0.0)
//!
//! radius: 2.50e+11          # display extent
//!
//! bodies:
//!   - x: [ 1.4960e+11, 0.0 ]
//!     v: [ 0.0, 2.9800e+04 ]
//!     m: 5.9740e+24
//!     label: earth.gif
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.9890e+30
//!     label: sun.gif
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation via `Scenario::build_scenario`.

use serde::Deserialize;

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,   // stopping time
    pub h0: f64,      // time step size
    #[serde(default)]
    pub eps2: f64,    // softening - prevents singular forces at zero separation
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>,   // Initial position vector `x` in simulation units
    pub v: Vec<f64>,   // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,        // Mass of the body
    pub label: String, // Display label carried through to the final output
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical parameters
    pub radius: f64, // Display/coordinate extent of the universe
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state
}

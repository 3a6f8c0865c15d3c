//! Build fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) or an already-read universe plus
//! parameters, and produces the runtime bundle consumed by the engine:
//! - numerical parameters (`Parameters`)
//! - universe state (`Universe` with bodies at t = 0)
//! - active force set (`ForceSet` with Newtonian gravity registered)

use crate::configuration::config::{ScenarioConfig, BodyConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Universe, Body, NVec2};
use crate::simulation::forces::{ForceSet, NewtonianGravity};

/// Fully-initialized simulation scenario
///
/// The main runtime bundle: numerical parameters, current universe state,
/// and the set of active force laws. The engine's loop owns it exclusively
/// for the duration of a run.
pub struct Scenario {
    pub parameters: Parameters,
    pub universe: Universe,
    pub forces: ForceSet,
}

impl Scenario {
    /// Build from a YAML-level [`ScenarioConfig`]
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.m,
            label: bc.label.clone(),
        }).collect();

        // Initial universe state: bodies at t = 0
        let universe = Universe {
            bodies,
            radius: cfg.radius,
            t: 0.0,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            eps2: p_cfg.eps2,
        };

        Self::assemble(universe, parameters)
    }

    /// Build from an already-constructed universe plus CLI-level scalars
    pub fn from_parts(universe: Universe, parameters: Parameters) -> Self {
        Self::assemble(universe, parameters)
    }

    fn assemble(universe: Universe, parameters: Parameters) -> Self {
        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity {
            eps2: parameters.eps2,
        });

        Self {
            parameters,
            universe,
            forces,
        }
    }
}

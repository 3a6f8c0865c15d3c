pub mod simulation;
pub mod configuration;
pub mod io;
pub mod benchmark;

pub use simulation::states::{Body, Universe, NVec2};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity, ConstantForce, G};
pub use simulation::integrator::{euler_integrator, apply_forces};
pub use simulation::engine::{run, SimulationHooks, Headless};
pub use simulation::scenario::Scenario;
pub use simulation::params::Parameters;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig};

pub use io::{read_universe, write_universe, sci, ReadError};

pub use benchmark::benchmark::{bench_gravity, bench_step};

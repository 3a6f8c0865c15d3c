//! Simulation loop and presentation seam
//!
//! Drives repeated force/integrate ticks from t = 0 until the stopping time,
//! invoking the injected [`SimulationHooks`] around the physics. The hooks
//! are the only place rendering, pacing, or audio happens; the core runs
//! headless with [`Headless`].

use crate::simulation::scenario::Scenario;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::states::Universe;

/// Presentation callbacks invoked by [`run`]
///
/// `on_start` fires once before the first tick (audio playback lives here);
/// `on_frame` fires after every tick with the freshly updated universe
/// (rendering and frame pacing live here). Neither feeds back into the
/// physics.
pub trait SimulationHooks {
    fn on_start(&mut self, _universe: &Universe) {}
    fn on_frame(&mut self, _universe: &Universe) {}
}

/// No-op hooks for headless runs (CLI, tests, benchmarks)
pub struct Headless;

impl SimulationHooks for Headless {}

/// Run the scenario to its stopping time, returning the number of ticks
///
/// Each tick is fully serial: forces for all bodies are accumulated before
/// any integration writes begin. The loop re-checks `t < t_end` before every
/// tick, so a stopping time of exactly 0.0 runs zero ticks and leaves the
/// universe untouched.
pub fn run(scenario: &mut Scenario, hooks: &mut dyn SimulationHooks) -> u64 {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        universe,
        parameters,
        forces,
    } = scenario;

    hooks.on_start(universe);

    let mut ticks = 0;
    while universe.t < parameters.t_end {
        euler_integrator(universe, forces, parameters);
        hooks.on_frame(universe);
        ticks += 1;
    }
    ticks
}

use std::time::Instant;
use crate::simulation::states::{Body, Universe, NVec2};
use crate::simulation::params::Parameters;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;

/// Build a deterministic n-body universe for benchmarking, no rand needed
fn bench_universe(n: usize) -> Universe {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new(
            (i_f * 0.37).sin() * 5.0e10,
            (i_f * 0.13).cos() * 5.0e10,
        );
        let v = NVec2::zeros();

        bodies.push(Body {
            x,
            v,
            m: 1.0e24,
            label: format!("b{i}"),
        });
    }

    Universe {
        bodies,
        radius: 1.0e11,
        t: 0.0,
    }
}

fn bench_params() -> Parameters {
    Parameters {
        t_end: 100.0,
        h0: 1.0,
        eps2: 1.0e6, // keep close passes finite so timings stay meaningful
    }
}

/// Time the direct O(N^2) force accumulation over a range of system sizes
pub fn bench_gravity() {
    // Different universe sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let universe = bench_universe(n);
        let params = bench_params();

        let forces = ForceSet::new().with(NewtonianGravity { eps2: params.eps2 });
        let mut out = vec![NVec2::zeros(); n];

        let start = Instant::now();
        forces.accumulate_forces(universe.t, &universe, &mut out);
        let elapsed = start.elapsed();

        println!("gravity n={:>6}  {:?}", n, elapsed);
    }
}

/// Time full Euler ticks (force accumulation + integration) per size
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 10;

    for n in ns {
        let mut universe = bench_universe(n);
        let params = bench_params();
        let forces = ForceSet::new().with(NewtonianGravity { eps2: params.eps2 });

        let start = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut universe, &forces, &params);
        }
        let elapsed = start.elapsed();

        println!("step    n={:>6}  {} steps in {:?}", n, steps, elapsed);
    }
}

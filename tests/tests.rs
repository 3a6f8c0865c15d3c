use nbsim::simulation::states::{Body, Universe, NVec2};
use nbsim::simulation::params::Parameters;
use nbsim::simulation::forces::{ForceSet, NewtonianGravity, ConstantForce, G};
use nbsim::simulation::integrator::euler_integrator;
use nbsim::simulation::engine::{self, SimulationHooks, Headless};
use nbsim::simulation::scenario::Scenario;

/// Build a simple 2-body Universe separated along the x-axis
pub fn two_body_universe(dist: f64, m1: f64, m2: f64) -> Universe {
    let b1 = Body {
        x: [-dist / 2.0, 0.0].into(),
        v: [0.0, 0.0].into(),
        m: m1,
        label: "a".to_string(),
    };
    let b2 = Body {
        x: [dist / 2.0, 0.0].into(),
        v: [0.0, 0.0].into(),
        m: m2,
        label: "b".to_string(),
    };
    Universe {
        bodies: vec![b1, b2],
        radius: dist,
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        t_end: 1.0,
        h0: 0.001,
        eps2: 0.0,
    }
}

/// Build a gravity term + ForceSet
pub fn gravity_set(p: &Parameters) -> ForceSet {
    ForceSet::new().with(NewtonianGravity { eps2: p.eps2 })
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let uni = two_body_universe(1.0, 2.0e10, 3.0e10);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut f = vec![Default::default(); 2];
    forces.accumulate_forces(uni.t, &uni, &mut f);

    let net: NVec2 = f[0] + f[1];

    assert!(net.norm() == 0.0, "Net force not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let uni = two_body_universe(2.0, 1.0e10, 1.0e10);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut f = vec![Default::default(); 2];
    forces.accumulate_forces(uni.t, &uni, &mut f);

    let dx = uni.bodies[1].x - uni.bodies[0].x;

    // Should point in the same direction as +dx (attraction)
    assert!(dx.norm() > 0.0);
    assert!(f[0].dot(&dx) > 0.0, "Force is not toward second body");
    assert!(f[1].dot(&dx) < 0.0, "Reaction is not toward first body");
}

#[test]
fn gravity_unit_masses_unit_distance_magnitude_is_g() {
    let uni = two_body_universe(1.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut f = vec![Default::default(); 2];
    forces.accumulate_forces(uni.t, &uni, &mut f);

    // r = 1, m1 = m2 = 1  =>  |F| = G exactly, directed along the x-axis
    assert_eq!(f[0].x, G);
    assert_eq!(f[0].y, 0.0);
    assert_eq!(f[1].x, -G);
    assert_eq!(f[1].y, 0.0);
}

#[test]
fn gravity_inverse_square_law() {
    let uni_r = two_body_universe(1.0, 1.0e10, 1.0e10);
    let uni_2r = two_body_universe(2.0, 1.0e10, 1.0e10);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut f_r = vec![Default::default(); 2];
    let mut f_2r = vec![Default::default(); 2];

    forces.accumulate_forces(uni_r.t, &uni_r, &mut f_r);
    forces.accumulate_forces(uni_2r.t, &uni_2r, &mut f_2r);

    let ratio = f_r[0].norm() / f_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-12, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_softening_prevents_blowup() {
    let mut p = test_params();
    p.eps2 = 0.1;

    let uni = two_body_universe(1e-9, 1.0, 1.0);
    let forces = gravity_set(&p);

    let mut f = vec![Default::default(); 2];
    forces.accumulate_forces(uni.t, &uni, &mut f);

    assert!(f[0].norm().is_finite());
    assert!(f[0].norm() < 1e-9, "Softening failed; force too large");
}

#[test]
fn gravity_coincident_bodies_propagate_non_finite() {
    // Default (unsoftened) behavior: r = 0 divides by zero and the resulting
    // non-finite values flow through the integrator unchecked
    let uni = two_body_universe(0.0, 1.0, 1.0);
    let p = test_params();

    let mut scenario = Scenario::from_parts(uni, Parameters { t_end: 0.001, ..p });
    engine::run(&mut scenario, &mut Headless);

    assert!(!scenario.universe.bodies[0].x.x.is_finite());
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn integrator_updates_position_with_new_velocity() {
    // One body, constant force (0, -9.8), m = 1, dt = 1. After a single step
    // the position must already reflect the kicked velocity: v = x = (0, -9.8)
    let mut uni = Universe {
        bodies: vec![Body {
            x: [0.0, 0.0].into(),
            v: [0.0, 0.0].into(),
            m: 1.0,
            label: "probe".to_string(),
        }],
        radius: 10.0,
        t: 0.0,
    };
    let params = Parameters {
        t_end: 1.0,
        h0: 1.0,
        eps2: 0.0,
    };
    let forces = ForceSet::new().with(ConstantForce {
        f: NVec2::new(0.0, -9.8),
    });

    euler_integrator(&mut uni, &forces, &params);

    assert_eq!(uni.bodies[0].v, NVec2::new(0.0, -9.8));
    assert_eq!(uni.bodies[0].x, NVec2::new(0.0, -9.8));
    assert_eq!(uni.t, 1.0);
}

#[test]
fn single_body_moves_inertially() {
    let uni = Universe {
        bodies: vec![Body {
            x: [0.0, 0.0].into(),
            v: [2.0, 3.0].into(),
            m: 5.0,
            label: "lone".to_string(),
        }],
        radius: 100.0,
        t: 0.0,
    };
    let params = Parameters {
        t_end: 10.0,
        h0: 0.5,
        eps2: 0.0,
    };

    // With no partner there is no gravity at all: straight line at constant v
    let mut scenario = Scenario::from_parts(uni, params);
    let ticks = engine::run(&mut scenario, &mut Headless);

    assert_eq!(ticks, 20);
    assert_eq!(scenario.universe.bodies[0].v, NVec2::new(2.0, 3.0));
    assert_eq!(scenario.universe.bodies[0].x, NVec2::new(20.0, 30.0));
}

#[test]
fn two_body_momentum_is_conserved() {
    let mut uni = two_body_universe(1.496e11, 5.974e24, 1.989e30);
    uni.bodies[0].v = [0.0, 2.98e4].into();

    let momentum = |u: &Universe| -> NVec2 {
        u.bodies.iter().map(|b| b.v * b.m).sum()
    };
    let p_before = momentum(&uni);

    let params = Parameters {
        t_end: 5.0e6,
        h0: 25000.0,
        eps2: 0.0,
    };
    let mut scenario = Scenario::from_parts(uni, params);
    let ticks = engine::run(&mut scenario, &mut Headless);
    assert_eq!(ticks, 200);

    let p_after = momentum(&scenario.universe);
    let drift = (p_after - p_before).norm();

    assert!(
        drift < 1e-6 * p_before.norm(),
        "Momentum drifted by {drift}"
    );
}

// ==================================================================================
// Simulation loop tests
// ==================================================================================

struct CountingHooks {
    starts: u32,
    frames: u32,
}

impl SimulationHooks for CountingHooks {
    fn on_start(&mut self, _universe: &Universe) {
        self.starts += 1;
    }
    fn on_frame(&mut self, _universe: &Universe) {
        self.frames += 1;
    }
}

#[test]
fn loop_runs_floor_ticks_for_non_divisible_stop_time() {
    // T = 10, dt = 3: ticks at t = 0, 3, 6, 9; the pre-check fails at 12
    let uni = two_body_universe(1.0e11, 1.0e20, 1.0e20);
    let params = Parameters {
        t_end: 10.0,
        h0: 3.0,
        eps2: 0.0,
    };
    let mut scenario = Scenario::from_parts(uni, params);
    let mut hooks = CountingHooks { starts: 0, frames: 0 };

    let ticks = engine::run(&mut scenario, &mut hooks);

    assert_eq!(ticks, 4);
    assert_eq!(hooks.starts, 1);
    assert_eq!(hooks.frames, 4);
}

#[test]
fn zero_stopping_time_runs_no_ticks() {
    let uni = two_body_universe(1.0, 2.0e10, 3.0e10);
    let before = uni.clone();
    let params = Parameters {
        t_end: 0.0,
        h0: 1.0,
        eps2: 0.0,
    };
    let mut scenario = Scenario::from_parts(uni, params);

    let ticks = engine::run(&mut scenario, &mut Headless);

    assert_eq!(ticks, 0);
    for (a, b) in scenario.universe.bodies.iter().zip(before.bodies.iter()) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.v, b.v);
        assert_eq!(a.m, b.m);
        assert_eq!(a.label, b.label);
    }
}

#[test]
fn bodies_masses_and_labels_survive_a_run() {
    let uni = two_body_universe(1.496e11, 5.974e24, 1.989e30);
    let params = Parameters {
        t_end: 1.0e6,
        h0: 25000.0,
        eps2: 0.0,
    };
    let mut scenario = Scenario::from_parts(uni, params);
    engine::run(&mut scenario, &mut Headless);

    assert_eq!(scenario.universe.bodies.len(), 2);
    assert_eq!(scenario.universe.bodies[0].label, "a");
    assert_eq!(scenario.universe.bodies[1].label, "b");
    assert_eq!(scenario.universe.bodies[0].m, 5.974e24);
    assert_eq!(scenario.universe.bodies[1].m, 1.989e30);
}

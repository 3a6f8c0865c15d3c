//! Force contributors for the n-body engine
//!
//! Defines the force trait and the direct O(N²) Newtonian gravity term,
//! plus a constant (uniform) force used mainly in tests.

use crate::simulation::states::{Universe, NVec2};

/// Gravitational constant in SI units.
pub const G: f64 = 6.67e-11;

/// Collection of force terms (gravity, constant fields, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single net force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute net forces at time `t` for all bodies in `universe`
    /// - `out[i]` will be set to the sum of contributions from all terms
    ///
    /// Reads the universe only; the integrator owns all mutation. This keeps
    /// the force phase on a consistent snapshot of every position.
    pub fn accumulate_forces(&self, t: f64, universe: &Universe, out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.force(t, universe, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on [`Universe`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, t: f64, universe: &Universe, out: &mut [NVec2]);
}

/// Direct pairwise Newtonian gravity
///
/// `eps2` is an optional softening floor added to the squared separation.
/// The default of 0.0 leaves the force unguarded: two coincident bodies
/// divide by zero and the resulting NaN/Inf values propagate through every
/// later step and into the final output.
pub struct NewtonianGravity {
    pub eps2: f64, // softening
}

impl Force for NewtonianGravity {
    fn force(&self, _t: f64, universe: &Universe, out: &mut [NVec2]) {
        let n = universe.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j. Each pair is
        // evaluated once and applied to both bodies with opposite sign;
        // body k still receives its contributions in ascending index order,
        // so the accumulated sums match a full j != i sweep bit-for-bit.
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &universe.bodies[i];

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &universe.bodies[j];

                // Displacement from i to j: i is pulled along +d, j along -d
                let dx = bj.x.x - bi.x.x;
                let dy = bj.x.y - bi.x.y;

                // Softened separation |r|. With eps2 = 0.0 this is the plain
                // Euclidean distance
                let r = (dx * dx + dy * dy + self.eps2).sqrt();

                // F = G m_i m_j / r^2
                let force = G * bi.m * bj.m / (r * r);

                // Resolve the magnitude into components along d
                let fx = force * dx / r;
                let fy = force * dy / r;

                // Equal and opposite (Newton's third law)
                out[i] += NVec2::new(fx, fy);
                out[j] -= NVec2::new(fx, fy);
            }
        }
    }
}

/// Uniform force applied identically to every body
///
/// Not a gravity term; used to exercise the integrator under a known
/// constant acceleration
pub struct ConstantForce {
    pub f: NVec2,
}

impl Force for ConstantForce {
    fn force(&self, _t: f64, universe: &Universe, out: &mut [NVec2]) {
        for f in out.iter_mut().take(universe.bodies.len()) {
            *f += self.f;
        }
    }
}

//! Force / acceleration contributors
//!
//! Defines the acceleration trait, the set that sums its terms, and direct
//! Newtonian gravity

use crate::simulation::states::{System, NVec2};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` is reset to zero, then receives the sum of all terms
    /// - `sys` is only read, so every term sees the same snapshot
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Newtonian gravity by direct summation over every ordered pair
///
/// With `min_separation == None` the inverse-square law is applied as is:
/// two bodies at the same position divide by zero and the result is inf/NaN.
/// With `Some(d)` the squared distance used for the magnitude is clamped to
/// `d^2` and exactly coincident pairs (no defined direction) contribute
/// nothing.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub min_separation: Option<f64>,
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n < 2 { // nothing to attract
            return;
        }

        let min_sq = self.min_separation.map(|d| d * d);

        for i in 0..n {
            let xi = sys.bodies[i].x;

            for (j, bj) in sys.bodies.iter().enumerate() {
                // identity, not value: two bodies may share every field
                if j == i {
                    continue;
                }

                // displacement from i towards j
                let r = bj.x - xi;
                let dist_sq = r.dot(&r);

                let force = match min_sq {
                    None => self.G * bj.m / dist_sq,
                    Some(_) if dist_sq == 0.0 => continue,
                    Some(min_sq) => self.G * bj.m / dist_sq.max(min_sq),
                };
                let distance = dist_sq.sqrt();

                // |a| = G m_j / r^2 along the unit vector r / |r|
                out[i] += force * r / distance;
            }
        }
    }
}

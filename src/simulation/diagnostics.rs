//! Conserved quantities and sanity checks over a [`System`]
//!
//! None of these feed back into the dynamics; they are read by the run loop
//! for logging and by the tests.

use crate::simulation::states::{System, NVec2};

/// Total linear momentum, sum of m v (kg m/s)
pub fn total_momentum(sys: &System) -> NVec2 {
    sys.bodies.iter().fold(NVec2::zeros(), |p, b| p + b.m * b.v)
}

/// Mass-weighted mean position, origin for an empty system
pub fn center_of_mass(sys: &System) -> NVec2 {
    let mass: f64 = sys.bodies.iter().map(|b| b.m).sum();
    if mass <= 0.0 {
        return NVec2::zeros();
    }
    sys.bodies.iter().fold(NVec2::zeros(), |c, b| c + b.m * b.x) / mass
}

pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Pairwise potential energy, -G m_i m_j / r over unordered pairs
#[allow(non_snake_case)]
pub fn potential_energy(sys: &System, G: f64) -> f64 {
    let n = sys.bodies.len();
    let mut e = 0.0;
    for i in 0..n {
        let bi = &sys.bodies[i];
        for bj in &sys.bodies[(i + 1)..] {
            let r = (bj.x - bi.x).norm();
            e -= G * bi.m * bj.m / r;
        }
    }
    e
}

#[allow(non_snake_case)]
pub fn total_energy(sys: &System, G: f64) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, G)
}

/// Distance of body `i` from body `origin` (m)
pub fn separation(sys: &System, i: usize, origin: usize) -> f64 {
    (sys.bodies[i].x - sys.bodies[origin].x).norm()
}

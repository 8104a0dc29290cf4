//! Fixed-step time integrator for the N-body system
//!
//! One force evaluation per step followed by a constant-acceleration
//! kinematic update (Euler-Cromer with the 1/2 a dt^2 position term)

use super::states::{System, NVec2};
use super::forces::AccelSet;
use super::params::Parameters;

/// Advance the system by one step of `params.h0`
///
/// Phase 1 evaluates every acceleration from the current positions into a
/// separate buffer; no body moves until it is complete. Phase 2 then, per body:
///   x_n+1 = x_n + dt v_n + 1/2 dt^2 a_n
///   v_n+1 = v_n + dt a_n
/// Position goes first so it uses the pre-update velocity.
pub fn step(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.h0;
    let dt2 = dt * dt;

    // a_n from x_n, a consistent snapshot of all positions
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accels);

    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.a = *a;
        b.x += b.v * dt + 0.5 * b.a * dt2;
        b.v += b.a * dt;
    }

    sys.t += dt;
}

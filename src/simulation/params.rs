//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings one simulation instance owns:
//! - gravitational constant `G`
//! - fixed step size `h0` (Δt)
//! - optional minimum separation used to clamp close encounters
//!
//! Nothing here is process-wide; two scenarios with different constants can
//! run side by side.

/// CODATA 2018 gravitational constant (N m^2 / kg^2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// One day in seconds
pub const DEFAULT_TIME_STEP: f64 = 86_400.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub h0: f64, // step size (s)
    pub min_separation: Option<f64>, // None = unguarded inverse-square law
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            h0: DEFAULT_TIME_STEP,
            min_separation: None,
        }
    }
}

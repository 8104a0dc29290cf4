//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it and produces the
//! runtime bundle `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - viewer settings and run bookkeeping
//!
//! The scenario is inserted into Bevy as a `Resource` and stepped by the
//! viewer, or driven directly by [`Scenario::run`] in headless mode

use anyhow::Result;
use bevy::prelude::Resource;
use log::{debug, info, warn};

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, ViewConfig};
use crate::simulation::diagnostics;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Headless runs without `t_end` cover one year of daily steps
const DEFAULT_HEADLESS_STEPS: u64 = 365;

/// Bevy resource representing a fully-initialized simulation scenario
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub view: ViewConfig,
    pub t_end: Option<f64>,
    pub log_every: u64,
    pub steps: u64, // steps taken so far
    reported_non_finite: bool,
}

impl Scenario {
    /// Validate `cfg` and map it onto runtime types
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.into_iter().map(|bc: BodyConfig| {
            let mut body = Body::new(NVec2::from(bc.x), NVec2::from(bc.v), bc.m);
            body.name = bc.name;
            body
        }).collect();

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            h0: p_cfg.h0,
            min_separation: p_cfg.min_separation,
        };

        // Forces: a single direct-summation gravity term
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            min_separation: parameters.min_separation,
        });

        info!(
            "scenario ready: {} bodies, h0 = {} s, G = {:e}",
            bodies.len(),
            parameters.h0,
            parameters.G
        );

        Ok(Self {
            parameters,
            system: System::new(bodies),
            forces,
            view: cfg.view,
            t_end: p_cfg.t_end,
            log_every: p_cfg.log_every,
            steps: 0,
            reported_non_finite: false,
        })
    }

    /// Sun and the four inner planets on circular-ish orbits, one-day steps
    pub fn solar_system() -> Result<Self> {
        Self::build_scenario(solar_system_config())
    }

    /// Advance by one fixed step
    pub fn step(&mut self) {
        integrator::step(&mut self.system, &self.forces, &self.parameters);
        self.steps += 1;

        if !self.reported_non_finite && !self.system.is_finite() {
            self.reported_non_finite = true;
            warn!(
                "state became non-finite at step {} (t = {} s); bodies have likely coincided",
                self.steps, self.system.t
            );
        }

        if self.log_every > 0 && self.steps % self.log_every == 0 {
            let p = self.total_momentum();
            debug!(
                "step {}: t = {:.3e} s, E = {:.6e} J, p = ({:.6e}, {:.6e}) kg m/s",
                self.steps,
                self.system.t,
                self.total_energy(),
                p.x,
                p.y
            );
        }
    }

    /// Advance `steps` times
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Steps a headless run takes: `t_end / h0` rounded up, or one year
    pub fn default_steps(&self) -> u64 {
        match self.t_end {
            Some(t_end) => (t_end / self.parameters.h0).ceil() as u64,
            None => DEFAULT_HEADLESS_STEPS,
        }
    }

    pub fn total_energy(&self) -> f64 {
        diagnostics::total_energy(&self.system, self.parameters.G)
    }

    pub fn total_momentum(&self) -> NVec2 {
        diagnostics::total_momentum(&self.system)
    }
}

/// The built-in solar system, same content as `scenarios/solar_system.yaml`
pub fn solar_system_config() -> ScenarioConfig {
    let planet = |name: &str, x: f64, m: f64, vy: f64| BodyConfig {
        name: Some(name.to_string()),
        x: [x, 0.0],
        v: [0.0, vy],
        m,
    };

    ScenarioConfig {
        parameters: ParametersConfig::default(),
        bodies: vec![
            planet("Sun", 0.0, 1.989e30, 0.0),
            planet("Mercury", 57.9e9, 3.285e23, 47.87e3),
            planet("Venus", 108.2e9, 4.867e24, 35.02e3),
            planet("Earth", 149.6e9, 5.972e24, 29.78e3),
            planet("Mars", 227.9e9, 6.39e23, 24.07e3),
        ],
        view: ViewConfig::default(),
    }
}

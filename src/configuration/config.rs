//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and step size
//! - [`BodyConfig`]       – initial state for each body
//! - [`ViewConfig`]       – how the viewer scales and paces the run
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A two-body scenario matching these types (every `parameters` and `view`
//! key is optional):
//!
//! ```yaml
//! parameters:
//!   G: 6.67430e-11          # gravitational constant
//!   h0: 86400.0             # fixed step size (s), one day
//!   min_separation: 1.0e6   # clamp close encounters (m), omit for none
//!   t_end: 31557600.0       # simulated duration for headless runs (s)
//!   log_every: 30           # steps between diagnostics logs, 0 = off
//!
//! bodies:
//!   - name: Sun
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.989e30
//!   - name: Earth
//!     x: [ 1.496e11, 0.0 ]
//!     v: [ 0.0, 2.978e4 ]
//!     m: 5.972e24
//!
//! view:
//!   scale: 1.0e9            # metres per screen unit
//!   steps_per_second: 144.0
//!   point_size: 5.0
//! ```
//!
//! [`ScenarioConfig::validate`] rejects configurations the physics can't run
//! (non-positive mass or step, empty body list, coincident bodies). The
//! scenario builder calls it before anything is constructed.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::simulation::params::{DEFAULT_TIME_STEP, GRAVITATIONAL_CONSTANT};

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_h0")]
    pub h0: f64, // time step size
    #[serde(default)]
    pub min_separation: Option<f64>, // clamp distance, None keeps the raw inverse-square law
    #[serde(default)]
    pub t_end: Option<f64>, // simulated duration for headless runs
    #[serde(default)]
    pub log_every: u64, // steps between diagnostics logs
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: default_g(),
            h0: default_h0(),
            min_separation: None,
            t_end: None,
            log_every: 0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub x: [f64; 2], // initial position (m)
    pub v: [f64; 2], // initial velocity (m/s)
    pub m: f64,      // mass (kg)
}

/// Presentation settings, ignored by headless runs
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub scale: f64,            // metres per screen unit
    pub steps_per_second: f64, // physics ticks per wall-clock second
    pub point_size: f32,       // base radius of a body on screen
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scale: 1.0e9,
            steps_per_second: 144.0,
            point_size: 5.0,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub view: ViewConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg = serde_yaml::from_str(yaml).context("invalid scenario YAML")?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        Ok(cfg)
    }

    /// Fail fast on anything that would make the physics meaningless
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        ensure!(p.G.is_finite() && p.G > 0.0, "parameters.G must be positive, got {}", p.G);
        ensure!(p.h0.is_finite() && p.h0 > 0.0, "parameters.h0 must be positive, got {}", p.h0);
        if let Some(d) = p.min_separation {
            ensure!(d.is_finite() && d > 0.0, "parameters.min_separation must be positive, got {d}");
        }
        if let Some(t_end) = p.t_end {
            ensure!(t_end.is_finite() && t_end > 0.0, "parameters.t_end must be positive, got {t_end}");
        }

        ensure!(!self.bodies.is_empty(), "scenario has no bodies");
        for (i, b) in self.bodies.iter().enumerate() {
            let label = b.label(i);
            ensure!(b.m.is_finite() && b.m > 0.0, "body {label}: mass must be positive, got {}", b.m);
            ensure!(
                b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()),
                "body {label}: position and velocity must be finite"
            );
        }

        // coincident bodies divide by zero on the very first step
        for (i, bi) in self.bodies.iter().enumerate() {
            for (j, bj) in self.bodies.iter().enumerate().skip(i + 1) {
                ensure!(
                    bi.x != bj.x,
                    "bodies {} and {} share position {:?}",
                    bi.label(i),
                    bj.label(j),
                    bi.x
                );
            }
        }

        let view = &self.view;
        ensure!(view.scale.is_finite() && view.scale > 0.0, "view.scale must be positive");
        ensure!(
            view.steps_per_second.is_finite() && view.steps_per_second > 0.0,
            "view.steps_per_second must be positive"
        );
        ensure!(view.point_size.is_finite() && view.point_size > 0.0, "view.point_size must be positive");

        Ok(())
    }
}

impl BodyConfig {
    fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => format!("{name} (#{index})"),
            None => format!("#{index}"),
        }
    }
}

fn default_g() -> f64 {
    GRAVITATIONAL_CONSTANT
}

fn default_h0() -> f64 {
    DEFAULT_TIME_STEP
}

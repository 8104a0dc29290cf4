//! Core state types for the simulation (the body store).
//!
//! - `Body`   a single point mass using `NVec2`
//! - `System` the ordered collection of bodies plus the simulated time `t`
//!
//! Bodies are identified by their index in `System::bodies`, never by value.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: Option<String>, // label used in logs and reports
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub a: NVec2, // acceleration from the most recent step (m/s^2)
    pub m: f64, // mass (kg), constant after creation
}

impl Body {
    /// A body at rest acceleration-wise; `a` is filled in by the first step
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Self {
        Self {
            name: None,
            x,
            v,
            a: NVec2::zeros(),
            m,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for display, falls back to `#index`
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{index}"),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).chain(self.a.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // 2d collection of bodies
    pub t: f64, // simulated time (s)
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// `false` once a degenerate step has leaked inf/NaN into the state
    pub fn is_finite(&self) -> bool {
        self.t.is_finite() && self.bodies.iter().all(Body::is_finite)
    }
}

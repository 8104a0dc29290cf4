pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT, DEFAULT_TIME_STEP};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::step;
pub use simulation::scenario::{Scenario, solar_system_config};

pub use configuration::config::{ParametersConfig, BodyConfig, ViewConfig, ScenarioConfig};

pub use visualization::viewer2d::run_2d;

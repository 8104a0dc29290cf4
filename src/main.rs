use solsim::{run_2d, Scenario, ScenarioConfig};
use solsim::simulation::diagnostics;

use anyhow::Result;
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Direct-summation solar system simulator")]
struct Args {
    /// Scenario file under `scenarios/`, or a path to one
    #[arg(short, long, default_value = "solar_system.yaml")]
    file: String,

    /// Run without a window and print the final state
    #[arg(long)]
    headless: bool,

    /// Steps to take in headless mode (default: t_end / h0, or one year)
    #[arg(long)]
    steps: Option<u64>,
}

// bare names resolve against the crate's scenarios directory
fn scenario_path(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.exists() {
        return path;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file)
}

fn run_headless(mut scenario: Scenario, steps: Option<u64>) {
    let steps = steps.unwrap_or_else(|| scenario.default_steps());
    let e0 = scenario.total_energy();

    scenario.run(steps);

    let e1 = scenario.total_energy();
    info!(
        "ran {} steps to t = {:.3e} s, relative energy drift {:.3e}",
        steps,
        scenario.system.t,
        ((e1 - e0) / e0).abs()
    );

    println!("{:<10} {:>14} {:>14} {:>14}", "body", "x (m)", "y (m)", "r (m)");
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        let r = diagnostics::separation(&scenario.system, i, 0);
        println!("{:<10} {:>14.6e} {:>14.6e} {:>14.6e}", b.label(i), b.x.x, b.x.y, r);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let path = scenario_path(&args.file);
    info!("loading scenario {}", path.display());

    let scenario_cfg = ScenarioConfig::from_path(&path)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        run_headless(scenario, args.steps);
    } else {
        run_2d(scenario);
    }

    Ok(())
}

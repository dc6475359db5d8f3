//! Ricochet entry point
//!
//! Headless driver: builds a scenario from the command line or a settings
//! file, runs it for a number of frames and optionally dumps the final
//! state as JSON.

use std::path::PathBuf;

use clap::Parser;

use ricochet::app::{NoInput, Simulation, run};
use ricochet::renderer::CircleBatch;
use ricochet::sim::{Scenario, total_kinetic_energy, total_momentum};
use ricochet::{SimResult, Settings};

#[derive(Parser, Debug)]
#[command(version, about = "Balls bouncing in a rectangular arena")]
struct Args {
    /// Arena width
    width: Option<f64>,
    /// Arena height
    height: Option<f64>,
    /// Number of balls
    count: Option<usize>,
    /// Fixed radius for every ball (random in [20, 60] otherwise)
    radius: Option<f64>,
    /// Restitution coefficient, intended range [0, 1]
    restitution: Option<f64>,

    /// RNG seed (clock time when absent)
    #[arg(long)]
    seed: Option<u64>,
    /// Frames to run
    #[arg(long)]
    frames: Option<u64>,
    /// Log energy/momentum every N frames (0 = never)
    #[arg(long)]
    log_interval: Option<u64>,
    /// Settings JSON file; positional arguments override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the final balls to this JSON file
    #[arg(long)]
    dump: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> SimResult<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let scenario = &mut settings.scenario;
        if let Some(w) = self.width {
            scenario.width = w;
        }
        if let Some(h) = self.height {
            scenario.height = h;
        }
        if let Some(n) = self.count {
            scenario.count = n;
        }
        if self.radius.is_some() {
            scenario.radius = self.radius;
        }
        if self.restitution.is_some() {
            scenario.restitution = self.restitution;
        }
        if self.seed.is_some() {
            scenario.seed = self.seed;
        }
        if let Some(frames) = self.frames {
            settings.frames = frames;
        }
        if let Some(interval) = self.log_interval {
            settings.log_interval = interval;
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = try_main() {
        log::error!("{e}");
        eprintln!("ricochet: {e}");
        std::process::exit(1);
    }
}

fn try_main() -> SimResult<()> {
    let args = Args::parse();
    let settings = args.settings()?;
    log::info!("Ricochet starting...");

    let scenario = Scenario::generate(&settings.scenario)?;
    let seed = scenario.seed;
    let mut sim = Simulation::from(scenario);
    let mut batch = CircleBatch::new();

    let energy_start = total_kinetic_energy(&sim.balls);
    let chunk = match settings.log_interval {
        0 => settings.frames,
        n => n,
    };

    let mut remaining = settings.frames;
    while remaining > 0 {
        let step = chunk.min(remaining);
        let summary = run(&mut sim, &mut NoInput, &mut batch, step);
        remaining -= summary.frames;
        if settings.log_interval > 0 {
            let p = total_momentum(&sim.balls);
            log::info!(
                "tick {}: energy {:.6}, momentum ({:.6}, {:.6})",
                sim.ticks,
                total_kinetic_energy(&sim.balls),
                p.x,
                p.y
            );
        }
        if summary.quit || summary.frames == 0 {
            break;
        }
    }

    log::info!(
        "Finished {} ticks (seed {}), energy {:.6} -> {:.6}, {} circles in last frame",
        sim.ticks,
        seed,
        energy_start,
        total_kinetic_energy(&sim.balls),
        batch.instances().len()
    );

    if let Some(path) = &args.dump {
        let json = serde_json::to_string_pretty(&sim.balls)?;
        std::fs::write(path, json)?;
        log::info!("Final state written to {}", path.display());
    }

    Ok(())
}

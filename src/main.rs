//! Tilt Maze headless runner
//!
//! Drives the simulation from a held or seeded tilt fed in like sensor
//! readings, one per tick, and logs what the ball does. Rendering and real
//! sensors belong to the host platform.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;

    use tilt_maze::input::{LiveSensor, ManualOverride, TiltSource, WanderTilt};
    use tilt_maze::sim::{MultiHitPolicy, PenetrationPolicy};
    use tilt_maze::{ConfigError, Settings, Simulation};

    /// Command line arguments
    #[derive(Parser, Debug)]
    #[command(name = "tilt-maze")]
    #[command(about = "Headless ball-in-a-maze tilt simulation", long_about = None)]
    pub struct Args {
        /// Settings file (JSON); defaults to the classic maze
        #[arg(long, value_name = "PATH")]
        pub config: Option<std::path::PathBuf>,

        /// Number of ticks to run
        #[arg(long, value_name = "N", default_value = "600")]
        pub ticks: u64,

        /// Held tilt as "forward_back,left_right" (slider range -3..3)
        #[arg(long, value_name = "FB,LR", default_value = "0,1", allow_hyphen_values = true)]
        pub tilt: String,

        /// Use a seeded random-walk tilt instead of a held tilt
        #[arg(long, value_name = "SEED")]
        pub wander: Option<u64>,

        /// Push the ball out of walls it has entered
        #[arg(long)]
        pub push_out: bool,

        /// Reflect each axis at most once per tick
        #[arg(long)]
        pub reflect_once: bool,

        /// Print the final render snapshot as JSON
        #[arg(long)]
        pub json: bool,

        /// Log a summary every N ticks (0 disables)
        #[arg(long, value_name = "N", default_value = "60")]
        pub report_every: u64,
    }

    impl Args {
        /// Parse the held tilt, falling back to no tilt
        pub fn parse_tilt(&self) -> (f32, f32) {
            let parts: Vec<Option<f32>> = self
                .tilt
                .split(',')
                .map(|s| s.trim().parse::<f32>().ok())
                .collect();
            match parts.as_slice() {
                [Some(fb), Some(lr)] => (*fb, *lr),
                _ => {
                    log::warn!("Unrecognised tilt '{}', using 0,0", self.tilt);
                    (0.0, 0.0)
                }
            }
        }
    }

    pub fn run() -> Result<(), ConfigError> {
        let args = Args::parse();

        let mut settings = match &args.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if args.push_out {
            settings.collision.penetration = PenetrationPolicy::PushOut;
        }
        if args.reflect_once {
            settings.collision.multi_hit = MultiHitPolicy::ReflectOnce;
        }

        // Readings arrive through the sensor feed, one per frame
        let sensor = LiveSensor::new();
        let feed = sensor.feed();
        let mut wander = args.wander.map(WanderTilt::new);
        let held = {
            let (fb, lr) = args.parse_tilt();
            ManualOverride::new(fb, lr).sample()
        };

        let mut sim = Simulation::new(&settings, sensor)?;
        let mut total_hits = 0usize;

        for _ in 0..args.ticks {
            match wander.as_mut() {
                Some(walk) => {
                    if let Some(sample) = walk.poll() {
                        feed.push(sample);
                    }
                }
                None => feed.push(held),
            }
            // No new reading this frame: the ball does not move
            let Some(report) = sim.advance() else {
                continue;
            };
            total_hits += report.hits.len();

            if args.report_every > 0 && report.tick % args.report_every == 0 {
                let ball = sim.ball();
                log::info!(
                    "tick {:>6}: pos=({:7.1}, {:7.1}) vel=({:6.2}, {:6.2}) hits={}",
                    report.tick,
                    ball.position.x,
                    ball.position.y,
                    ball.velocity.x,
                    ball.velocity.y,
                    total_hits
                );
            }
        }

        let snapshot = sim.snapshot();
        log::info!(
            "Finished after {} ticks at ({:.1}, {:.1}), {} wall hits",
            snapshot.tick,
            snapshot.ball.position.x,
            snapshot.ball.position.y,
            total_hits
        );

        if args.json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Tilt Maze (headless) starting...");

    if let Err(e) = cli::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build is consumed as a library by the host page
}

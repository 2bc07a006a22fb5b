//! Headless runner for the particle field
//!
//! Drives the field against a counting surface at the configured frame rate
//! and logs frame statistics. Run with: cargo run --features cli --bin hero-cli

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::Parser;
    use hero_fx::core::{
        CountingSurface, FieldConfig, FramePacer, ParticleField, SurfaceSize, TickOutcome,
    };
    use hero_fx::theme::{SharedTheme, Theme};
    use hero_fx::time::now_seconds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tokio::time::MissedTickBehavior;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    /// Run the hero particle field without a browser
    #[derive(Parser)]
    #[command(version)]
    pub struct Args {
        /// Surface width in pixels
        #[arg(long, default_value_t = 1280.0)]
        pub width: f64,

        /// Surface height in pixels
        #[arg(long, default_value_t = 720.0)]
        pub height: f64,

        /// JSON field config (defaults apply to missing keys)
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Stop after this many drawn frames (runs until Ctrl-C otherwise)
        #[arg(short, long)]
        pub frames: Option<u64>,

        /// Seed for reproducible runs
        #[arg(short, long)]
        pub seed: Option<u64>,

        /// Use the reduced-motion particle count
        #[arg(long)]
        pub reduced_motion: bool,

        /// Flip the theme every N frames
        #[arg(long)]
        pub theme_every: Option<u64>,
    }

    /// Timer period for the pacer's interval; tokio rejects a zero period
    pub fn frame_period(pacer: &FramePacer) -> Duration {
        Duration::from_secs_f64(pacer.interval_ms() / 1000.0).max(Duration::from_millis(1))
    }

    pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,hero_fx=debug"));
        fmt().with_env_filter(filter).with_target(true).init();

        let args = Args::parse();
        let config = match &args.config {
            Some(path) => FieldConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => FieldConfig::default(),
        };

        let rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let theme = SharedTheme::new(Theme::Light);
        let mut field = ParticleField::with_rng(config, theme.clone(), rng);
        field.set_reduced_motion(args.reduced_motion);

        let size = SurfaceSize::new(args.width, args.height);
        if size.is_degenerate() {
            warn!(width = size.width, height = size.height, "Degenerate surface, nothing will be visible");
        }
        field.activate(size);

        let fps = field.config().fps;
        let period = frame_period(&FramePacer::new(fps));
        let mut frame_interval = tokio::time::interval(period);
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut stats_interval = tokio::time::interval(Duration::from_secs(5));

        let mut surface = CountingSurface::new();
        let mut frames = 0u64;
        let mut frames_last_interval = 0u64;
        let mut connections_last_interval = 0usize;
        let start = now_seconds();

        info!(fps, width = size.width, height = size.height, "Running particle field");

        loop {
            tokio::select! {
                _ = frame_interval.tick() => {
                    if let TickOutcome::Drawn(stats) = field.tick(&mut surface) {
                        frames += 1;
                        frames_last_interval += 1;
                        connections_last_interval += stats.connections;
                    }
                    if let Some(every) = args.theme_every {
                        if every > 0 && frames % every == 0 {
                            let next = theme.toggle();
                            info!(theme = next.as_str(), "Theme flipped");
                        }
                    }
                    if args.frames.is_some_and(|limit| frames >= limit) {
                        break;
                    }
                }
                _ = stats_interval.tick() => {
                    let avg_connections = if frames_last_interval > 0 {
                        connections_last_interval as f64 / frames_last_interval as f64
                    } else {
                        0.0
                    };
                    info!(
                        frames,
                        particles = field.particles().len(),
                        "/sec" = format!("{:.1}", frames_last_interval as f64 / 5.0),
                        avg_connections = format!("{avg_connections:.1}"),
                        "stats"
                    );
                    frames_last_interval = 0;
                    connections_last_interval = 0;
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted");
                    break;
                }
            }
        }

        field.deactivate();
        info!(
            frames,
            draw_calls = surface.draw_calls(),
            elapsed_s = format!("{:.2}", now_seconds() - start),
            "Done"
        );
        Ok(())
    }
}


#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}

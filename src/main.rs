use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake3d::game::GameConfig;
use snake3d::logging;
use snake3d::modes::{HeadlessMode, HumanMode};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "snake3d")]
#[command(version, about = "Snake in a 3D grid, steered like an aircraft")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Largest legal absolute coordinate (the cube is 2n+1 cells wide)
    #[arg(long)]
    half_extent: Option<i32>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for fruit placement
    #[arg(long)]
    seed: Option<u64>,

    /// Never respawn the fruit inside the snake
    #[arg(long)]
    avoid_body: bool,

    /// Headless turn script: one of U, D, L, R or '.' per tick
    #[arg(long, default_value = "")]
    turns: String,

    /// Stop a headless run after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Write logs here (human mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play in the terminal with the keyboard
    Human,
    /// Run a turn script without a display
    Headless,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(half_extent) = self.half_extent {
            config.half_extent = half_extent;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.avoid_body {
            config.respawn_avoids_body = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match (&cli.mode, &cli.log_file) {
        (_, Some(path)) => logging::init_file(path)?,
        (Mode::Headless, None) => logging::init_stderr(),
        (Mode::Human, None) => {}
    }

    let config = cli.game_config()?;
    info!(?config, "starting");

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
        Mode::Headless => {
            let mut headless_mode = HeadlessMode::new(config, &cli.turns, cli.max_ticks)?;
            let report = headless_mode.run().await?;
            println!("{}", report.summary());
        }
    }

    Ok(())
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use hostpal::config::PalConfig;
use hostpal::fatal::FatalError;
use hostpal::frame::{FrameDriver, PalServices};
use hostpal::host::DesktopHost;
use hostpal::traits::Application;
use hostpal::util::logging::init_logging;

#[derive(Parser)]
#[command(about = "Run the platform adaptation layer with a demo application")]
struct Args {
    /// Number of frames to run before the host signals stop.
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// Game/mod directory forwarded to the application as "-game <dir>".
    #[arg(long)]
    game: Option<String>,

    /// Path to a config file (defaults to palconfig.json in the cwd).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to write log files to.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    verbose: bool,
}

/// Minimal application exercising the layer: drains key events and tracks
/// accumulated time.
#[derive(Default)]
struct DemoApp {
    elapsed: f64,
    frames: u64,
}

impl Application for DemoApp {
    fn init(&mut self, config: &PalConfig, pal: &mut PalServices<'_>) -> Result<(), FatalError> {
        info!(
            base_dir = %config.base_dir,
            budget = config.memory_budget_bytes,
            "demo app starting"
        );
        if !config.app_args.is_empty() {
            info!(args = ?config.app_args, "forwarded arguments");
        }
        debug!(free_slots = pal.files.free_slots(), "file table ready");
        Ok(())
    }

    fn update(&mut self, delta_seconds: f64, pal: &mut PalServices<'_>) -> Result<(), FatalError> {
        self.elapsed += delta_seconds;
        self.frames += 1;
        for event in pal.events.drain() {
            info!(code = ?event.code, pressed = event.pressed, "key event");
        }
        Ok(())
    }

    fn shutdown(&mut self) {
        info!(frames = self.frames, elapsed = self.elapsed, "demo app done");
    }
}

/// Forward a game/mod directory into the application argument list.
/// An empty directory name is ignored.
fn push_game_arg(config: &mut PalConfig, dir: &str) {
    if dir.is_empty() {
        return;
    }
    config.app_args.push("-game".to_string());
    config.app_args.push(dir.to_string());
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.log_dir.as_deref(), args.verbose) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let config = match args.config {
        Some(path) => PalConfig::load_from(path),
        None => PalConfig::load(),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load config: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = args.game.as_deref() {
        push_game_arg(&mut config, dir);
    }

    let host = DesktopHost::new(args.frames);
    let mut driver = FrameDriver::new(DemoApp::default(), host);
    driver.run(&config).exit_code()
}

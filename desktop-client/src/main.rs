mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::games::snake::SnakeSessionSettings;
use common::version::VERSION;
use common::{log, logger};
use eframe::egui;

use config::get_config_manager;
use offline::spawn_snake_game;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_desktop_client", version = VERSION)]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    grid_size: Option<u32>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config()?;
    if let Some(grid_size) = args.grid_size {
        config.game.grid_size = grid_size;
        config.validate()?;
    }

    let settings = SnakeSessionSettings::from(&config.game);
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    log!(
        "Starting snake v{} on {}x{} grid, seed {}",
        VERSION,
        settings.grid_size,
        settings.grid_size,
        seed
    );

    let shared_state = SharedState::new();
    let driver = spawn_snake_game(shared_state.clone(), settings, seed);

    let board_pixels = config.window.board_pixels as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_pixels + 40.0, board_pixels + 220.0])
            .with_title(format!("Snake v{}", VERSION)),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(shared_state, driver, board_pixels)))),
    )?;

    log!("Window closed");
    Ok(())
}

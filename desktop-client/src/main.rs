mod config;
mod constants;
mod platform;
mod runner;
mod state;
mod ui;

use clap::Parser;
use common::{log, logger};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;

use config::get_config_manager;
use constants::WINDOW_SIZE;
use state::SharedState;
use ui::SimoneApp;

#[derive(Parser)]
#[command(name = "simone", about = "Repeat the growing sequence of arrows")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pins the first generator register; requires --seed-b
    #[arg(long, requires = "seed_b", value_parser = clap::value_parser!(u8).range(1..))]
    seed_a: Option<u8>,

    #[arg(long, requires = "seed_a", value_parser = clap::value_parser!(u8).range(1..))]
    seed_b: Option<u8>,

    /// Prefix for every log line, overrides the config
    #[arg(long)]
    log_prefix: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config);
    config_manager.ensure_config_exists()?;
    let config = config_manager.get_config()?;

    let prefix = args.log_prefix.or(config.log.prefix.clone());
    logger::init_logger(prefix, config.log.file.as_deref())?;

    let key_bindings = config.keys.resolve()?;
    let pinned_seeds = match (args.seed_a, args.seed_b) {
        (Some(seed_a), Some(seed_b)) => Some((seed_a, seed_b)),
        _ => config.seeds.map(|seeds| (seeds.seed_a, seeds.seed_b)),
    };
    if let Some((seed_a, seed_b)) = pinned_seeds {
        log!("Using pinned seeds {:02X}/{:02X}", seed_a, seed_b);
    }

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::channel();

    let shared_state_clone = shared_state.clone();
    let settings = config.timings;
    std::thread::Builder::new()
        .name("simone-game".to_string())
        .spawn(move || runner::game_loop(settings, pinned_seeds, shared_state_clone, command_rx))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title("Simone"),
        ..Default::default()
    };

    let cell_size = config.display.cell_size;
    eframe::run_native(
        "Simone",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SimoneApp::new(
                shared_state,
                command_tx,
                key_bindings,
                cell_size,
            )))
        }),
    )?;

    log!("Window closed");
    Ok(())
}

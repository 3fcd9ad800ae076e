//! Panelwise - Terminal trainer for electrical panel wiring and safety
//!
//! This application teaches electrical-safety fundamentals through four
//! reading modules with quizzes and an interactive panel-wiring simulator
//! with three difficulty levels.

use anyhow::Result;
use clap::Parser;

use panelwise::config::Config;
use panelwise::constants::{APP_BINARY_NAME, APP_NAME};
use panelwise::learning::ModuleId;
use panelwise::progress::ProgressStore;
use panelwise::tui::{self, AppState, Screen};

/// Panelwise - Terminal trainer for electrical panel wiring and safety
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Open the panel simulator directly
    #[arg(short, long)]
    simulator: bool,

    /// Open a learning module directly (introduction, hazards, assembly, maintenance)
    #[arg(short, long, value_name = "MODULE")]
    module: Option<String>,

    /// Clear all saved module progress and exit
    #[arg(long)]
    reset_progress: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.reset_progress {
        let path = ProgressStore::default_path()?;
        if path.exists() {
            std::fs::remove_file(&path)?;
            println!("Progress cleared: {}", path.display());
        } else {
            println!("No saved progress found.");
        }
        return Ok(());
    }

    let module = match cli.module.as_deref() {
        Some(key) => match ModuleId::parse_key(key) {
            Some(id) => Some(id),
            None => {
                eprintln!("Error: Unknown module '{}'.", key);
                eprintln!();
                eprintln!("Available modules:");
                for id in ModuleId::ALL {
                    eprintln!("  {:<14} {}", id.key(), id.title());
                }
                eprintln!();
                eprintln!("Example:");
                eprintln!("  {} --module introduction", APP_BINARY_NAME);
                std::process::exit(1);
            }
        },
        None => None,
    };

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal trainer for electrical panel wiring and safety");
    println!();

    // Missing or unreadable config falls back to defaults; the trainer
    // must start even with a corrupted config file.
    let config = Config::load().unwrap_or_else(|_| Config::default());
    let progress = ProgressStore::load().unwrap_or_default();

    let mut state = AppState::new(config, progress);
    if cli.simulator {
        state.screen = Screen::Simulator;
    } else if let Some(id) = module {
        state.screen = Screen::Module(tui::ReaderState::new(id));
    }

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result?;

    // Persist whatever progress accumulated during the run
    if let Err(error) = state.progress.save() {
        eprintln!("Warning: could not save progress: {error:#}");
    }

    println!("Final score: {}", state.session.score());
    Ok(())
}

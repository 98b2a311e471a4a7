use clap::Parser;
use std::process::ExitCode;

use termvid::cli::{play_file, Args};
use termvid::interrupt::setup_ctrlc_handler;
use termvid::{EndReason, PlayerOptions};

/// Conventional exit status for a process stopped by SIGINT
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Usage errors print help and exit non-zero before any file I/O
    let args = Args::parse();

    if let Err(e) = setup_ctrlc_handler() {
        log::warn!("Could not set up Ctrl+C handler: {}", e);
    }

    match play_file(&args.path, PlayerOptions::default()) {
        Ok(stats) if stats.end_reason == EndReason::Interrupted => ExitCode::from(EXIT_INTERRUPTED),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_clean_exit() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

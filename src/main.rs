// ============================================================
// File: main.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Final Project - Index Rework
// Date: Oct 19, 2026
//
// Description:
//   Entry point for the ordered key store program.
//   Sets up logging, preloads any key files named on the command
//   line, then hands stdin/stdout to the REPL in `lib.rs`.
//
//   Responses go to standard output and log lines to standard
//   error, so piped runs can be checked without log noise.
// ============================================================
use anyhow::Result;
use log::{info, warn};
use rbstore::{load_keys, repl_loop, Config, Session};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::io;


/// Entry point for the key store.
fn main() -> Result<()> {
    let config = Config::from_env()?;

    TermLogger::init(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    println!("Red-Black Key Store");

    // Load any key files before taking commands
    let mut session = Session::new();
    for path in &config.preload {
        match load_keys(&mut session.tree, path) {
            Ok(count) => println!("Loaded {} numbers from {}", count, path.display()),
            Err(e) => warn!("skipping {}: {:#}", path.display(), e),
        }
    }

    // Hand off to the main command loop
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl_loop(&mut session, stdin.lock(), &mut stdout, config.show_prompt)?;

    info!("exiting");
    Ok(())
}

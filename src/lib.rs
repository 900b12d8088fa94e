//! # rbstore
//! An interactive in-memory ordered key store built on a red-black tree.
//!
//! ## Features
//! - Integer keys typed on a line are inserted in order (duplicates allowed)
//! - Bulk key loading from a file, one integer per line
//! - Search and an indented tree print for debugging
//! - Case-insensitive commands
//!
//! ## Usage
//! This crate is primarily consumed by the binary in `main.rs`,
//! which provides the REPL interface. All reusable logic and
//! unit tests live here so the project can be tested with `cargo test`.
// =====================================================================
// File: lib.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Final Project - Index Rework
// Date: Oct 19, 2026
//
//   This module implements the command-line interface (CLI)
//   that accepts the following input:
//
//     `<n1> [<n2> ...]`  -> Insert every integer on the line (all or nothing)
//     `FILE [<path>]`    -> Insert every key in a file (asks for the path if missing)
//     `PRINT`            -> Show the tree, right subtree on top
//     `SEARCH [<n>]`     -> Report whether a key is present (asks if missing)
//     `DELETE [<n>]`     -> Recognised, but deletion is disabled
//     `HELP`             -> Show the command list
//     `QUIT` / `EXIT`    -> Terminate the program
// =====================================================================
mod storage;
pub use storage::{load_keys, parse_key_lines, read_key_file};

pub mod tree;
pub use tree::{Color, InvariantViolation, Node, NodeId, RBTree};

pub mod session;
pub use session::{Prompt, Session};

pub mod config;
pub use config::Config;

use log::{debug, info, warn};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

/// Main menu shown before each fresh command.
pub const MAIN_PROMPT: &str = "Enter numbers or a command (FILE, PRINT, SEARCH, DELETE, QUIT): ";

const PROPER_SYNTAX: &str =
    "Syntax Usage: <n1> [<n2> ...], FILE [<path>], PRINT, SEARCH [<n>], DELETE [<n>], QUIT";

/// Result of handling a single input line.
///
/// - `Continue` means the REPL should keep running.
/// - `Exit` means the REPL should break out and terminate.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}


/// Read–Evaluate–Print Loop (REPL) to handle interactive input.
///
/// Reads lines from `input`, executes them against the [`Session`] and
/// writes responses to `output`. The loop ends on `QUIT`/`EXIT` or at the
/// end of input; either way the session's tree is torn down.
///
/// # Arguments
/// * `session` - The active [`Session`] holding the tree.
/// * `input` - Line source (stdin in the binary, a cursor in tests).
/// * `output` - Where responses go.
/// * `show_prompt` - Print the menu / follow-up prompts before reading.
///
/// # Example
/// ```
/// use rbstore::{Session, repl_loop};
///
/// let mut session = Session::new();
/// let mut out = Vec::new();
/// repl_loop(&mut session, "5 3 8\nsearch 3\nquit\n".as_bytes(), &mut out, false).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Value found in tree."));
/// ```
pub fn repl_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    show_prompt: bool,
) -> io::Result<()> {
    let result = run_lines(session, input, output, show_prompt);

    // Release the tree on every exit path, errors included
    session.teardown();
    result
}


/// Body of [`repl_loop`]; returns at `QUIT`/`EXIT`, end of input or an I/O error.
fn run_lines<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    output: &mut W,
    show_prompt: bool,
) -> io::Result<()> {
    let mut raw_line = Vec::new();

    loop {
        if show_prompt {
            let prompt = session.pending.map_or(MAIN_PROMPT, Prompt::message);
            writeln!(output)?;
            writeln!(output, "{}", prompt)?;
            output.flush()?;
        }

        raw_line.clear();
        if input.read_until(b'\n', &mut raw_line)? == 0 {
            debug!("end of input");
            break;
        }

        // Bytes that are not UTF-8 become replacement characters and fail to parse
        let decoded = String::from_utf8_lossy(&raw_line);
        if let Cow::Owned(_) = decoded {
            warn!("input line was not valid UTF-8");
        }
        let line = decoded.trim_end_matches(['\n', '\r']);

        match handle_line(session, line, output)? {
            CommandResult::Exit => break,
            CommandResult::Continue => (),
        }
    }

    Ok(())
}


/// Everything after the first token of a line, trimmed.
fn command_rest(line: &str) -> &str {
    line.trim_start()
        .split_once(char::is_whitespace)
        .map_or("", |(_, rest)| rest.trim())
}


/// Parses a raw input line into a command and its arguments.
///
/// The first token is treated as the command (normalized to uppercase),
/// and the remaining tokens are collected as arguments. Leading and
/// trailing whitespace is ignored.
pub fn parse_command(line: &str) -> (String, Vec<String>) {
    let mut command_segments = line.split_whitespace();
    let cmd = command_segments.next().unwrap_or("").to_uppercase();
    let args: Vec<String> = command_segments.map(|s| s.to_string()).collect();

    (cmd, args)
}


/// Parses every whitespace-separated token on a line as a key.
///
/// All or nothing: the first bad token fails the whole line.
///
/// # Example
/// ```
/// use rbstore::parse_keys;
/// assert_eq!(parse_keys("4 -1  9").unwrap(), vec![4, -1, 9]);
/// assert!(parse_keys("4 x 9").is_err());
/// ```
pub fn parse_keys(line: &str) -> Result<Vec<i64>, ParseIntError> {
    line.split_whitespace().map(str::parse::<i64>).collect()
}


/// Handles a single input line and returns whether the REPL should continue or exit.
///
/// If the session is waiting on a prompt, the line answers it. Otherwise the
/// first token is matched against the command list, and anything that is
/// not a command is treated as a list of keys to insert.
pub fn handle_line<W: Write>(
    session: &mut Session,
    line: &str,
    output: &mut W,
) -> io::Result<CommandResult> {
    if let Some(prompt) = session.pending.take() {
        let answer = line.trim();
        match prompt {
            Prompt::SearchKey => search_key(session, answer, output)?,
            Prompt::FileName => load_file(session, answer, output)?,
        }
        return Ok(CommandResult::Continue);
    }

    let (cmd, args) = parse_command(line);

    match cmd.as_str() {
        // File command format:  FILE [<path>]
        "FILE" => {
            if args.is_empty() {
                session.pending = Some(Prompt::FileName);
            } else {
                // Path is the rest of the line, inner whitespace kept
                load_file(session, command_rest(line), output)?;
            }
        }

        // Print command format:  PRINT
        "PRINT" => {
            writeln!(output, "Tree: ")?;
            write!(output, "{}", session.tree.render())?;
            writeln!(output)?;
        }

        // Search command format:  SEARCH [<n>]
        "SEARCH" => match args.as_slice() {
            [] => session.pending = Some(Prompt::SearchKey),
            [key] => search_key(session, key, output)?,
            _ => writeln!(output, "Invalid input.")?,
        },

        // Delete is recognised so it is not mistaken for bad numbers
        "DELETE" => {
            writeln!(output, "Deletion is disabled for the red-black tree.")?;
        }

        "HELP" => {
            writeln!(output, "{}", PROPER_SYNTAX)?;
        }

        "QUIT" | "EXIT" => {
            info!("quit requested with {} keys in the tree", session.tree.len());
            return Ok(CommandResult::Exit);
        }

        // Blank line holds no numbers
        "" => {
            writeln!(output, "Invalid input.")?;
        }

        // Everything else should be a list of keys
        _ => match parse_keys(line) {
            Ok(keys) => {
                debug!("inserting {} keys from input line", keys.len());
                session.tree.extend(keys);
            }
            Err(e) => {
                debug!("rejected input line '{}': {}", line.trim(), e);
                writeln!(output, "Invalid input.")?;
            }
        },
    }

    Ok(CommandResult::Continue)
}


/// Answer a search request and print whether the key is present.
fn search_key<W: Write>(session: &Session, text: &str, output: &mut W) -> io::Result<()> {
    match text.parse::<i64>() {
        Ok(key) => {
            let found = session.tree.contains(key);
            writeln!(
                output,
                "Value{}found in tree.",
                if found { " " } else { " not " }
            )
        }
        Err(_) => writeln!(output, "Invalid input."),
    }
}


/// Load a key file into the session's tree, reporting failures to the user.
fn load_file<W: Write>(session: &mut Session, path: &str, output: &mut W) -> io::Result<()> {
    match load_keys(&mut session.tree, path) {
        Ok(count) => writeln!(output, "Added {} numbers from {}.", count, path),
        Err(e) => {
            warn!("file load failed: {:#}", e);
            writeln!(output, "Could not load file: {:#}", e)
        }
    }
}



// =================================================================
// lib.rs Unit tests
// =================================================================

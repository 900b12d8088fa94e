// =====================================================================
// File: config.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Final Project - Index Rework
// Date: Oct 19, 2026
//
// Description:
//   Run-time settings for the binary, collected from the environment
//   and the command line:
//
//     RBSTORE_LOG=<level>   -> off, error, warn, info, debug, trace
//     RBSTORE_QUIET=1       -> do not print prompts (for piped input)
//     -q / --quiet          -> same as RBSTORE_QUIET
//     <path> ...            -> key files inserted before the REPL starts
// =====================================================================
use anyhow::{bail, Context, Result};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "RBSTORE_LOG";

/// Environment variable that turns prompts off when set to anything but `0`.
pub const QUIET_ENV: &str = "RBSTORE_QUIET";

/// Log level used when none is configured.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub show_prompt: bool,
    /// Key files loaded in order before reading commands.
    pub preload: Vec<PathBuf>,
}


impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            show_prompt: true,
            preload: Vec::new(),
        }
    }
}


impl Config {
    /// Build the configuration from the real process environment and arguments.
    pub fn from_env() -> Result<Self> {
        Self::from_sources(std::env::args().skip(1), |name| std::env::var(name).ok())
    }

    /// Build the configuration from explicit sources.
    ///
    /// `args` excludes the program name; `lookup` resolves environment
    /// variables.
    ///
    /// # Example
    /// ```
    /// use rbstore::Config;
    /// use log::LevelFilter;
    ///
    /// let config = Config::from_sources(
    ///     vec!["-q".to_string(), "keys.txt".to_string()],
    ///     |name| (name == "RBSTORE_LOG").then(|| "debug".to_string()),
    /// ).unwrap();
    /// assert_eq!(config.log_level, LevelFilter::Debug);
    /// assert!(!config.show_prompt);
    /// assert_eq!(config.preload.len(), 1);
    /// ```
    pub fn from_sources<I, F>(args: I, lookup: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(level) = lookup(LOG_ENV) {
            config.log_level = LevelFilter::from_str(level.trim())
                .with_context(|| format!("{} has unknown log level '{}'", LOG_ENV, level))?;
        }

        if let Some(quiet) = lookup(QUIET_ENV) {
            config.show_prompt = quiet.trim() == "0";
        }

        for arg in args {
            match arg.as_str() {
                "-q" | "--quiet" => config.show_prompt = false,
                flag if flag.starts_with('-') => bail!("unknown option '{}'", flag),
                path => config.preload.push(PathBuf::from(path)),
            }
        }

        Ok(config)
    }
}

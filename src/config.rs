//! Command line and runtime configuration for the terminal binary.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::input::DEFAULT_RELEASE_TIMEOUT_MS;
use crate::types::TICK_MS;

/// blocktris - falling blocks in the terminal
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed for pieces, palettes and the attract demo (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Milliseconds per game tick
    #[arg(short, long, default_value_t = TICK_MS)]
    pub tick_ms: u32,

    /// Idle time after which a held key counts as released, for terminals
    /// that never report key releases
    #[arg(short, long, default_value_t = DEFAULT_RELEASE_TIMEOUT_MS)]
    pub release_timeout_ms: u32,

    /// Write logs to this file (the terminal itself is in raw mode)
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("tick interval must be at least 1 ms")]
    ZeroTick,

    #[error("key release timeout must be at least 1 ms")]
    ZeroReleaseTimeout,

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub tick: Duration,
    pub release_timeout_ms: u32,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        if args.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if args.release_timeout_ms == 0 {
            return Err(ConfigError::ZeroReleaseTimeout);
        }
        Ok(Self {
            seed: args.seed.unwrap_or_else(rand::random::<u32>),
            tick: Duration::from_millis(args.tick_ms as u64),
            release_timeout_ms: args.release_timeout_ms,
            log_file: args.log_file,
        })
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick.as_millis() as u32
    }

    /// Open the log file for appending, if one was requested.
    pub fn open_log_file(&self) -> Result<Option<File>, ConfigError> {
        let Some(path) = &self.log_file else {
            return Ok(None);
        };
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(Some)
            .map_err(|source| ConfigError::LogFile {
                path: path.clone(),
                source,
            })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick: Duration::from_millis(TICK_MS as u64),
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
            log_file: None,
        }
    }
}

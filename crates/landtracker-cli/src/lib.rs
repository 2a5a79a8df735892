//! # landtracker-cli
//!
//! Command-line tool for Land Tracker access decisions:
//! - Decide a single action for an actor and target
//! - Print the ability flags the admin UI would receive
//! - Print the full role × action decision matrix
//! - Manage the TOML configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use error::{Error, Result};

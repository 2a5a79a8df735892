//! Land Tracker CLI
//!
//! Inspect access decisions from the command line.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use landtracker_cli::cli::{Cli, Command};
use landtracker_cli::commands;
use landtracker_cli::config::LandTrackerConfig;
use landtracker_cli::config_handlers::handle_config_command;
use landtracker_cli::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Config commands must work even when the file is missing or broken
        Command::Config { action } => {
            logging::init("warn", cli.verbose);
            handle_config_command(cli.config.as_deref(), action)?;
        }
        command => {
            let config = LandTrackerConfig::load(cli.config.as_deref())?;
            logging::init(&config.logging.level, cli.verbose);
            tracing::debug!(?config, "configuration loaded");
            run(command, &config)?;
        }
    }

    Ok(())
}

fn run(command: Command, config: &LandTrackerConfig) -> Result<()> {
    match command {
        Command::Check {
            action,
            actor,
            target,
            json,
        } => {
            let report = commands::check(config, &action, actor.actor(), target.target()?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", commands::render_check(&report));
            }
        }
        Command::Abilities { actor, target } => {
            let report = commands::abilities(config, actor.actor(), target.target()?);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Matrix { json } => {
            let rows = commands::decision_matrix(&config.gate());
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", commands::render_matrix(&rows));
            }
        }
        Command::Config { .. } => unreachable!("config commands are dispatched before loading"),
    }
    Ok(())
}

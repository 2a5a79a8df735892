//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use landtracker_authz::Target;
use landtracker_core::{Actor, Role};

use crate::error::{Error, Result};

/// Land Tracker access decisions
#[derive(Parser, Debug)]
#[command(name = "landtracker")]
#[command(version, about = "Inspect Land Tracker access decisions", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decide a single action, e.g. `user.update`
    Check {
        /// Action as `resource.ability`
        action: String,

        /// Requesting actor
        #[command(flatten)]
        actor: ActorArgs,

        /// Target entity, if the action needs one
        #[command(flatten)]
        target: TargetArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the ability flags of an actor, optionally over a target
    Abilities {
        /// Requesting actor
        #[command(flatten)]
        actor: ActorArgs,

        /// Target entity, if the action needs one
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Print every role against every user action
    Matrix {
        /// Print the matrix as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration file management
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key, e.g. `authz.guard_self_delete`
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Where to write; defaults to the platform config dir
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// The requesting actor.
#[derive(Args, Debug, Clone)]
pub struct ActorArgs {
    /// Actor role: administrator, manager or staff
    #[arg(long)]
    pub actor_role: Role,

    /// Actor user id
    #[arg(long)]
    pub actor_id: u64,
}

impl ActorArgs {
    /// The actor these flags describe.
    pub fn actor(&self) -> Actor {
        Actor::new(self.actor_id, self.actor_role)
    }
}

/// The target entity, either a user (`--target-id` + `--target-role`) or an
/// activity record (`--owner`).
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Target user id
    #[arg(long, conflicts_with = "owner")]
    pub target_id: Option<u64>,

    /// Target user role
    #[arg(long, conflicts_with = "owner")]
    pub target_role: Option<Role>,

    /// Owner id of the target activity record
    #[arg(long)]
    pub owner: Option<u64>,
}

impl TargetArgs {
    /// The target these flags describe, if any.
    pub fn target(&self) -> Result<Option<Target>> {
        match (self.target_id, self.target_role, self.owner) {
            (None, None, None) => Ok(None),
            (None, None, Some(owner)) => Ok(Some(Target::activity(owner))),
            (Some(id), Some(role), None) => Ok(Some(Target::user(id, role))),
            (Some(_), None, None) => Err(Error::invalid_args("--target-id needs --target-role")),
            (None, Some(_), None) => Err(Error::invalid_args("--target-role needs --target-id")),
            _ => Err(Error::invalid_args(
                "use either --target-id/--target-role or --owner",
            )),
        }
    }
}

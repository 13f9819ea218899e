//! CLI module - Command-line interface for authorbook
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Args, Parser, Subcommand};

/// authorbook - manage blog author accounts
#[derive(Parser)]
#[command(name = "authorbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new author
    #[command(alias = "a")]
    Add(AddArgs),

    /// Show an author by id
    #[command(alias = "s")]
    Show {
        /// Author id (canonical form)
        id: String,
    },

    /// Find authors whose email contains the given text
    #[command(alias = "find")]
    Search {
        /// Part of an email address
        email: String,
    },

    /// Change fields of an existing author
    #[command(alias = "u")]
    Update(UpdateArgs),

    /// Activate the account holding an activation token
    Activate {
        /// 32 character activation token
        token: String,
    },

    /// Delete an author
    #[command(alias = "rm")]
    Remove {
        /// Author id (canonical form)
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Write the default config file
    Init,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub avatar_url: String,

    /// Plain text password, hashed before storing
    #[arg(long, required_unless_present = "hash", conflicts_with = "hash")]
    pub password: Option<String>,

    /// Pre-computed 97 character password hash
    #[arg(long)]
    pub hash: Option<String>,

    /// Create the account already activated
    #[arg(long)]
    pub activated: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Author id (canonical form)
    pub id: String,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub avatar_url: Option<String>,

    /// New plain text password
    #[arg(long)]
    pub password: Option<String>,
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "authorbook",
            "add",
            "--email",
            "fponce2@cnm.edu",
            "--username",
            "fponce2",
            "--avatar-url",
            "https://gravatar.com/avatar/x",
            "--password",
            "secret",
        ])
        .unwrap();

        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.email, "fponce2@cnm.edu");
        assert_eq!(args.password.as_deref(), Some("secret"));
        assert!(!args.activated);
    }

    #[test]
    fn test_add_needs_password_or_hash() {
        let base = [
            "authorbook",
            "add",
            "--email",
            "a@b.co",
            "--username",
            "a",
            "--avatar-url",
            "x",
        ];
        assert!(Cli::try_parse_from(base).is_err());

        let both = base
            .iter()
            .copied()
            .chain(["--password", "p", "--hash", "h"]);
        assert!(Cli::try_parse_from(both).is_err());
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["authorbook", "init"]).unwrap();
        assert!(matches!(cli.command, Commands::Init));
    }

    #[test]
    fn test_parse_remove_alias() {
        let cli = Cli::try_parse_from(["authorbook", "rm", "some-id", "-y"]).unwrap();
        assert!(matches!(cli.command, Commands::Remove { yes: true, .. }));
    }
}

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kotlinit",
    bin_name = "kotlinit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant Kotlin Gradle project scaffolding",
    long_about = "Kotlinit generates buildable Kotlin Gradle projects: \
                  build scripts, wrapper, entry point, tests, and editor \
                  configuration.",
    after_help = "EXAMPLES:\n\
        \x20 kotlinit new demo-app --package com.example\n\
        \x20 kotlinit new my-service --package org.acme.service --dir ~/work\n\
        \x20 kotlinit completions bash > /usr/share/bash-completion/completions/kotlinit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Kotlin Gradle project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 kotlinit new demo-app\n\
            \x20 kotlinit new demo-app --package com.example\n\
            \x20 kotlinit new demo-app --package com.example --dir /tmp/ws --yes"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kotlinit completions bash > ~/.local/share/bash-completion/completions/kotlinit\n\
            \x20 kotlinit completions zsh  > ~/.zfunc/_kotlinit\n\
            \x20 kotlinit completions fish > ~/.config/fish/completions/kotlinit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `kotlinit new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Prompted for interactively when omitted on a terminal.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Package identifier, e.g. `com.example`.
    #[arg(
        short = 'p',
        long = "package",
        value_name = "PACKAGE",
        help = "Package identifier (default: com.example)"
    )]
    pub package: Option<String>,

    /// Target directory the project folder is created in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Target directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kotlinit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "kotlinit",
            "new",
            "demo-app",
            "--package",
            "com.example",
            "--yes",
        ]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name.as_deref(), Some("demo-app"));
                assert_eq!(args.package.as_deref(), Some("com.example"));
                assert!(args.yes);
                assert!(args.dir.is_none());
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn new_alias_n_works() {
        let cli = Cli::parse_from(["kotlinit", "n", "demo"]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn dir_flag_is_a_path() {
        let cli = Cli::parse_from(["kotlinit", "new", "demo", "-d", "/tmp/ws"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.dir, Some(PathBuf::from("/tmp/ws")));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn name_is_optional_for_interactive_use() {
        let cli = Cli::parse_from(["kotlinit", "new"]);
        if let Commands::New(args) = cli.command {
            assert!(args.name.is_none());
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["kotlinit", "--quiet", "--verbose", "new", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_parses_shell() {
        let cli = Cli::parse_from(["kotlinit", "completions", "bash"]);
        if let Commands::Completions(args) = cli.command {
            assert!(matches!(args.shell, Shell::Bash));
        } else {
            panic!("expected Completions command");
        }
    }
}

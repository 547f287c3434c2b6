//! Flags understood by both `devnest` and `devnest-chown`.
//!
//! Neither binary has subcommands, so [`GlobalArgs`] is flattened straight
//! into [`super::Cli`] and [`super::ChownCli`]. Whatever is parsed here
//! drives the shared start-up in [`crate::startup`]: the tracing filter,
//! the config file to load and how [`crate::output::OutputManager`] renders.

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Logging, colour, config and output flags of either binary.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise the tracing level for every devnest crate.
    ///
    /// `RUST_LOG`, when set, replaces the level chosen here.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity on stderr:
    (none)  - Warnings and errors (including the overwrite notice)
    -v      - Info level (steps being run)
    -vv     - Debug level (paths, commands, exit codes)
    -vvv    - Trace level"
    )]
    pub verbose: u8,

    /// Silence stdout messages and lower logging to errors.
    ///
    /// The notice logged before an existing project is deleted is kept.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Plain glyphs on stdout and no ANSI codes in log lines.
    ///
    /// `NO_COLOR` with any non-empty value other than a falsey word
    /// (`0`, `false`, `no`, `off`) has the same effect.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML, YAML or JSON file layered between the defaults and `DEVNEST_*`
    /// variables. Unlike the default location, it must exist.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How results are written to stdout.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured glyphs and headers.
    Human,
    /// The same lines without colour.
    Plain,
    /// One pretty-printed JSON report (generation or ownership).
    Json,
}

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── devnest ───────────────────────────────────────────────────────────────────

/// Entry-point for the `devnest` binary.
#[derive(Debug, Parser)]
#[command(
    name     = "devnest",
    bin_name = "devnest",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a base Docker devcontainer project.",
    long_about = "devnest creates <base>/<name> (base defaults to the parent \
                  directory) and fills it with a Python devcontainer, a VS Code \
                  launch configuration and a hello-world entry point.",
    after_help = "EXAMPLES:\n\
        \x20 devnest --projectname demo-app\n\
        \x20 devnest --projectname demo-app --overwrite-existing-project\n\
        \x20 DEVNEST_PROJECT__BASE_PATH=~/work devnest --projectname demo-app",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Remove an existing project directory before generating (destructive).
    #[arg(
        long = "overwrite-existing-project",
        help = "Overwrite existing project directory if it already exists."
    )]
    pub overwrite_existing_project: bool,
}

// ── devnest-chown ─────────────────────────────────────────────────────────────

/// Entry-point for the `devnest-chown` binary.
#[derive(Debug, Parser)]
#[command(
    name     = "devnest-chown",
    bin_name = "devnest-chown",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Hand a generated project to the shared container account.",
    long_about = "Ensures the 'dockeruser' group and user (id 65000) exist, then \
                  recursively sets owner dockeruser:dockeruser and mode 770 on \
                  <base>/<name>.  Needs root privileges.  Every step is best \
                  effort; failures are reported, never fatal.",
    after_help = "EXAMPLES:\n\
        \x20 sudo devnest-chown --projectname demo-app",
)]
pub struct ChownCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub project: ProjectArgs,
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Selects the project directory `<base>/<name>`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[arg(
        long = "projectname",
        value_name = "NAME",
        help = "Specify the project name."
    )]
    pub projectname: String,
}

//! # devnest CLI
//!
//! Command-line front end for devnest, shared by two binaries:
//!
//! - `devnest --projectname <NAME> [--overwrite-existing-project]` creates
//!   `<base>/<name>` and writes the devcontainer files into it.
//! - `devnest-chown --projectname <NAME>` hands an existing project to the
//!   `dockeruser` account (needs root).
//!
//! ## Exit codes
//!
//! | Code | Meaning                                       |
//! |------|-----------------------------------------------|
//! |  0   | Success (also `--help` / `--version`)         |
//! |  1   | Invalid name, existing project, system error  |
//! |  2   | Argument parse error                          |
//! |  4   | Configuration error                           |

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod startup;

//! `devnest`: create a base Docker devcontainer project.

use std::process::ExitCode;

use devnest_cli::{cli::Cli, commands, startup};

fn main() -> ExitCode {
    let cli: Cli = match startup::parse() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let session = match startup::init(&cli.global) {
        Ok(session) => session,
        Err(code) => return code,
    };

    let result = commands::create::execute(
        cli.project,
        cli.overwrite_existing_project,
        &session.config,
        &session.output,
    );

    startup::finish(result, &cli.global, &session)
}

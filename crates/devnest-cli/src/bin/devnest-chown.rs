//! `devnest-chown`: hand a generated project to the container account.

use std::process::ExitCode;

use devnest_adapters::SystemCommandRunner;
use devnest_cli::{cli::ChownCli, commands, startup};

fn main() -> ExitCode {
    let cli: ChownCli = match startup::parse() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let session = match startup::init(&cli.global) {
        Ok(session) => session,
        Err(code) => return code,
    };

    let result = commands::chown::execute(
        cli.project,
        &session.config,
        &session.output,
        Box::new(SystemCommandRunner::new()),
    );

    startup::finish(result, &cli.global, &session)
}

//! External command adapters.

use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use devnest_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandStatus},
    },
    error::DevnestResult,
};
use tracing::{debug, instrument};

/// Runs commands on the host with `std::process::Command`.
///
/// Output of the child is discarded; only the exit status matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip(self), level = "debug")]
    fn run(&self, program: &str, args: &[String]) -> DevnestResult<CommandStatus> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                command: render_command(program, args),
                reason: e.to_string(),
            })?;

        debug!(code = ?status.code(), "Command finished");

        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

/// Records every invocation and answers from a script (testing).
///
/// Programs without a scripted answer succeed. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<String>>>,
    script: Vec<(String, Scripted)>,
}

#[derive(Debug, Clone)]
enum Scripted {
    Exit(i32),
    SpawnError(String),
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` exit with `code`.
    pub fn exit_with(mut self, program: &str, code: i32) -> Self {
        self.script.push((program.to_string(), Scripted::Exit(code)));
        self
    }

    /// Make `program` fail to start.
    pub fn fail_to_spawn(mut self, program: &str, reason: &str) -> Self {
        self.script
            .push((program.to_string(), Scripted::SpawnError(reason.to_string())));
        self
    }

    /// Every command line seen so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String]) -> DevnestResult<CommandStatus> {
        let command = render_command(program, args);
        self.calls
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(command.clone());

        match self.script.iter().find(|(p, _)| p == program) {
            Some((_, Scripted::Exit(code))) => Ok(CommandStatus::exited(*code)),
            Some((_, Scripted::SpawnError(reason))) => Err(ApplicationError::CommandFailed {
                command,
                reason: reason.clone(),
            }
            .into()),
            None => Ok(CommandStatus::succeeded()),
        }
    }
}

fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

//! Ownership Service - hands a generated project to a fixed system account.
//!
//! Every step is attempted regardless of how the previous ones went. A step
//! that cannot be spawned or exits non-zero is logged and recorded, never
//! returned as an error. All steps are idempotent.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{application::ports::CommandRunner, domain::ProjectName};

/// Account and mode applied by [`OwnershipService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipPolicy {
    pub account: &'static str,
    pub id: u32,
    pub mode: &'static str,
}

impl OwnershipPolicy {
    /// `dockeruser` (uid/gid 65000), owner and group rwx, nothing for others.
    pub const DOCKER_USER: Self = Self {
        account: "dockeruser",
        id: 65000,
        mode: "770",
    };
}

impl Default for OwnershipPolicy {
    fn default() -> Self {
        Self::DOCKER_USER
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OwnershipStep {
    CreateGroup,
    CheckUser,
    CreateUser,
    ChangeOwner,
    ChangeMode,
}

impl OwnershipStep {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateGroup => "create group",
            Self::CheckUser => "check user",
            Self::CreateUser => "create user",
            Self::ChangeOwner => "change owner",
            Self::ChangeMode => "change mode",
        }
    }
}

impl fmt::Display for OwnershipStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum StepStatus {
    Succeeded,
    Failed { reason: String },
    Skipped,
}

impl StepStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: OwnershipStep,
    pub command: String,
    #[serde(flatten)]
    pub status: StepStatus,
}

/// Per-step record of one [`OwnershipService::fix_ownership`] run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipReport {
    pub path: PathBuf,
    pub account: String,
    pub steps: Vec<StepOutcome>,
}

impl OwnershipReport {
    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Failed { .. }))
    }

    pub fn outcome(&self, step: OwnershipStep) -> Option<&StepStatus> {
        self.steps.iter().find(|s| s.step == step).map(|s| &s.status)
    }
}

pub struct OwnershipService {
    runner: Box<dyn CommandRunner>,
    policy: OwnershipPolicy,
}

impl OwnershipService {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            runner,
            policy: OwnershipPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OwnershipPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Ensure the account exists, then chown and chmod `project_path` recursively.
    #[instrument(skip_all, fields(project = %project_name, path = %project_path.display()))]
    pub fn fix_ownership(&self, project_path: &Path, project_name: &ProjectName) -> OwnershipReport {
        let OwnershipPolicy { account, id, mode } = self.policy;
        let id = id.to_string();
        let id = id.as_str();
        let target = project_path.display().to_string();
        let mut steps = Vec::with_capacity(5);

        steps.push(self.attempt(
            OwnershipStep::CreateGroup,
            "groupadd",
            &["-g", id, account],
        ));

        let check = self.attempt(OwnershipStep::CheckUser, "id", &["-u", account]);
        let user_exists = check.status.is_success();
        steps.push(check);

        if user_exists {
            debug!(account, "Account already exists");
            steps.push(StepOutcome {
                step: OwnershipStep::CreateUser,
                command: "useradd".into(),
                status: StepStatus::Skipped,
            });
        } else {
            steps.push(self.attempt(
                OwnershipStep::CreateUser,
                "useradd",
                &["-u", id, "-g", id, "-m", account],
            ));
        }

        info!("Changing ownership and permissions of {project_name}");
        let owner = format!("{account}:{account}");
        steps.push(self.attempt(
            OwnershipStep::ChangeOwner,
            "chown",
            &["-R", owner.as_str(), target.as_str()],
        ));
        steps.push(self.attempt(
            OwnershipStep::ChangeMode,
            "chmod",
            &["-R", mode, target.as_str()],
        ));

        OwnershipReport {
            path: project_path.to_path_buf(),
            account: account.to_string(),
            steps,
        }
    }

    /// Run one step inside its own error boundary.
    fn attempt(&self, step: OwnershipStep, program: &str, args: &[&str]) -> StepOutcome {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let command = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        let status = match self.runner.run(program, &args) {
            Ok(status) if status.success => StepStatus::Succeeded,
            Ok(status) => StepStatus::Failed {
                reason: match status.code {
                    Some(code) => format!("exited with status {code}"),
                    None => "terminated by signal".into(),
                },
            },
            Err(e) => StepStatus::Failed {
                reason: e.to_string(),
            },
        };

        match (&status, step) {
            (StepStatus::Failed { reason }, OwnershipStep::CheckUser) => {
                debug!(%step, %command, %reason, "Account not found")
            }
            (StepStatus::Failed { reason }, _) => {
                warn!(%step, %command, %reason, "Step failed, continuing")
            }
            _ => debug!(%step, %command, "Step succeeded"),
        }

        StepOutcome {
            step,
            command,
            status,
        }
    }
}

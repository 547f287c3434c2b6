//! Implementation of the `devnest-chown` command.
//!
//! Hands `<base>/<name>` to the shared container account.  Step failures are
//! shown but never change the exit code.

use tracing::{info, instrument};

use devnest_adapters::LocalFilesystem;
use devnest_core::{
    application::{
        OwnershipReport, OwnershipService, StepStatus,
        ports::{CommandRunner, Filesystem},
    },
    domain::ProjectName,
};

use crate::{
    cli::{OutputFormat, ProjectArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `devnest-chown` command.
///
/// `runner` carries out `groupadd`, `id`, `useradd`, `chown` and `chmod`; the
/// binary passes the host runner.
#[instrument(skip_all, fields(project = %args.projectname))]
pub fn execute(
    args: ProjectArgs,
    config: &AppConfig,
    output: &OutputManager,
    runner: Box<dyn CommandRunner>,
) -> CliResult<()> {
    let project_name = ProjectName::parse(args.projectname)?;
    let project_path = config.project.base_path.join(project_name.as_str());

    let json = output.format() == OutputFormat::Json;
    if !json && !LocalFilesystem::new().is_dir(&project_path) {
        output.warning(&format!(
            "'{}' is not a directory; continuing anyway",
            project_path.display()
        ))?;
    }

    let service = OwnershipService::new(runner);
    if !json {
        output.header(&format!(
            "Changing ownership and permissions of {project_name}..."
        ))?;
    }

    let report = service.fix_ownership(&project_path, &project_name);
    info!(failures = report.failures().count(), "Ownership adjustment finished");

    if json {
        return output.json(&report);
    }
    show_report(&report, output)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Info,
}

/// One line per step, then a verdict.
fn report_lines(report: &OwnershipReport) -> Vec<(Tone, String)> {
    let mut lines: Vec<_> = report
        .steps
        .iter()
        .map(|outcome| match &outcome.status {
            StepStatus::Succeeded => (Tone::Success, format!("{}: {}", outcome.step, outcome.command)),
            StepStatus::Failed { reason } => (
                Tone::Warning,
                format!("{}: {} ({reason})", outcome.step, outcome.command),
            ),
            StepStatus::Skipped => (Tone::Info, format!("{}: skipped", outcome.step)),
        })
        .collect();

    lines.push(match report.failures().count() {
        0 => (
            Tone::Success,
            format!(
                "'{}' now belongs to {}",
                report.path.display(),
                report.account
            ),
        ),
        n => (
            Tone::Warning,
            format!(
                "{n} step(s) failed; ownership of '{}' may be incomplete",
                report.path.display()
            ),
        ),
    });

    lines
}

fn show_report(report: &OwnershipReport, output: &OutputManager) -> CliResult<()> {
    for (tone, line) in report_lines(report) {
        match tone {
            Tone::Success => output.success(&line)?,
            Tone::Warning => output.warning(&line)?,
            Tone::Info => output.info(&line)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use devnest_adapters::RecordingRunner;
    use tempfile::TempDir;

    use super::*;
    use crate::cli::GlobalArgs;

    fn output(format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn config_in(base: &Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.project.base_path = base.to_path_buf();
        config
    }

    fn project() -> ProjectArgs {
        ProjectArgs {
            projectname: "demo-app".into(),
        }
    }

    fn report_from(runner: RecordingRunner) -> OwnershipReport {
        OwnershipService::new(Box::new(runner))
            .fix_ownership(Path::new("/srv/demo-app"), &ProjectName::parse("demo-app").unwrap())
    }

    #[test]
    fn execute_runs_every_step_against_project_path() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("demo-app")).unwrap();
        let runner = RecordingRunner::new().exit_with("id", 1);

        execute(
            project(),
            &config_in(temp.path()),
            &output(OutputFormat::Plain),
            Box::new(runner.clone()),
        )
        .unwrap();

        let target = temp.path().join("demo-app").display().to_string();
        assert_eq!(
            runner.calls(),
            [
                "groupadd -g 65000 dockeruser".to_string(),
                "id -u dockeruser".to_string(),
                "useradd -u 65000 -g 65000 -m dockeruser".to_string(),
                format!("chown -R dockeruser:dockeruser {target}"),
                format!("chmod -R 770 {target}"),
            ]
        );
    }

    #[test]
    fn failing_steps_still_succeed() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new()
            .fail_to_spawn("groupadd", "not found")
            .exit_with("chown", 1)
            .exit_with("chmod", 1);

        for format in [OutputFormat::Plain, OutputFormat::Json] {
            let result = execute(
                project(),
                &config_in(temp.path()),
                &output(format),
                Box::new(runner.clone()),
            );
            assert!(result.is_ok(), "{format:?}");
        }
        assert_eq!(runner.calls().len(), 8);
    }

    #[test]
    fn invalid_name_runs_nothing() {
        let runner = RecordingRunner::new();
        let result = execute(
            ProjectArgs {
                projectname: "Bad_Name".into(),
            },
            &AppConfig::default(),
            &output(OutputFormat::Plain),
            Box::new(runner.clone()),
        );

        assert!(result.is_err());
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn lines_show_each_step_outcome() {
        let report = report_from(RecordingRunner::new().exit_with("chmod", 2));

        assert_eq!(
            report_lines(&report),
            vec![
                (Tone::Success, "create group: groupadd -g 65000 dockeruser".to_string()),
                (Tone::Success, "check user: id -u dockeruser".to_string()),
                (Tone::Info, "create user: skipped".to_string()),
                (
                    Tone::Success,
                    "change owner: chown -R dockeruser:dockeruser /srv/demo-app".to_string()
                ),
                (
                    Tone::Warning,
                    "change mode: chmod -R 770 /srv/demo-app (exited with status 2)".to_string()
                ),
                (
                    Tone::Warning,
                    "1 step(s) failed; ownership of '/srv/demo-app' may be incomplete".to_string()
                ),
            ]
        );
    }

    #[test]
    fn clean_run_ends_with_ownership_verdict() {
        let lines = report_lines(&report_from(RecordingRunner::new()));
        assert_eq!(
            lines.last(),
            Some(&(
                Tone::Success,
                "'/srv/demo-app' now belongs to dockeruser".to_string()
            ))
        );
    }

    #[test]
    fn json_report_carries_step_statuses() {
        let report = report_from(
            RecordingRunner::new()
                .exit_with("id", 1)
                .fail_to_spawn("useradd", "not found"),
        );

        let doc = serde_json::to_value(&report).unwrap();
        assert_eq!(doc["account"], "dockeruser");
        assert_eq!(doc["path"], "/srv/demo-app");

        let steps = doc["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0]["step"], "create-group");
        assert_eq!(steps[0]["status"], "succeeded");
        assert_eq!(steps[1]["status"], "failed");
        assert_eq!(steps[1]["reason"], "exited with status 1");
        assert_eq!(steps[2]["step"], "create-user");
        assert_eq!(steps[2]["status"], "failed");
        assert!(
            steps[2]["reason"]
                .as_str()
                .unwrap()
                .contains("not found")
        );
    }
}

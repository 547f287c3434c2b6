//! Implementation of the `devnest` command.
//!
//! Responsibility: turn the arguments into a validated project name and path,
//! call the core services, and display results. No business logic lives here.

use tracing::{info, instrument};

use devnest_adapters::{LocalFilesystem, ProcessIdentity, SimpleRenderer, builtin_templates};
use devnest_core::{
    application::{DirectoryService, GenerationReport, ScaffoldService},
    domain::ProjectName,
};

use crate::{
    cli::{OutputFormat, ProjectArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `devnest` command.
///
/// Dispatch sequence:
/// 1. Validate the project name
/// 2. Create (or recreate, with `overwrite`) `<base>/<name>`
/// 3. Generate the devcontainer files
/// 4. Report where the project was set up
#[instrument(skip_all, fields(project = %args.projectname, overwrite = overwrite))]
pub fn execute(
    args: ProjectArgs,
    overwrite: bool,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    // 1. Validate
    let project_name = ProjectName::parse(args.projectname)?;

    // 2. Prepare directory
    let project_path = DirectoryService::new(Box::new(LocalFilesystem::new())).prepare(
        &project_name,
        overwrite,
        &config.project.base_path,
    )?;

    // 3. Generate
    let service = ScaffoldService::new(
        builtin_templates::devcontainer(),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessIdentity::new()),
    )
    .with_author(config.author.clone());

    let report = service.generate(&project_path, &project_name)?;
    info!(path = %report.path.display(), "Project set up");

    // 4. Report
    show_report(&report, output)
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(report);
    }

    let path = report.path.display();
    output.print(&format!("Files generated in: {path}"))?;
    output.success(&format!("Project '{}' set up in: {path}", report.project))?;
    output.print("Done.")?;

    Ok(())
}

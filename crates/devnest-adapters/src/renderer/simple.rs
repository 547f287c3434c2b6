//! Simple variable substitution renderer.

use std::collections::HashSet;
use std::path::Path;

use devnest_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{
        DomainValidator as validator, ProjectStructure, RenderContext, TemplateContent,
        TemplateSet, find_unresolved,
    },
    error::{DevnestError, DevnestResult},
};
use tracing::{debug, instrument};

/// Simple renderer using basic variable substitution.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = template.name()))]
    fn render(
        &self,
        template: &TemplateSet,
        context: &RenderContext,
        output_root: &Path,
    ) -> DevnestResult<ProjectStructure> {
        // Validate template first
        validator::validate_template(template).map_err(DevnestError::Domain)?;

        let mut structure = ProjectStructure::new(output_root);
        let mut directories = HashSet::new();

        for file in template.files() {
            // Parent directories come before the first file that needs them
            if let Some(parent) = file.path.parent() {
                if directories.insert(parent.to_path_buf()) {
                    structure.add_directory(parent);
                }
            }

            let content = render_content(&file.content, context, &file.path.to_string())?;
            structure.add_file(file.path.as_path(), content, file.permissions);
        }

        debug!(
            entries = structure.entries().len(),
            project = context.project_name(),
            "Template rendered"
        );

        // Validate final structure
        validator::validate_project_structure(&structure).map_err(DevnestError::Domain)?;

        Ok(structure)
    }
}

fn render_content(
    content: &TemplateContent,
    ctx: &RenderContext,
    path: &str,
) -> DevnestResult<String> {
    match content {
        TemplateContent::Literal(source) => Ok((*source).to_string()),
        TemplateContent::Parameterized(source) => {
            let rendered = ctx.render(source);
            if let Some(placeholder) = find_unresolved(&rendered) {
                return Err(ApplicationError::RenderingFailed {
                    reason: format!("Unresolved placeholder {placeholder} in {path}"),
                }
                .into());
            }
            Ok(rendered)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use devnest_core::domain::{
        FsEntry, GitAuthor, HostIdentity, ProjectName, TemplateFile,
    };

    use super::*;
    use crate::builtin_templates;

    fn context() -> RenderContext {
        RenderContext::new(
            &ProjectName::parse("demo-app").unwrap(),
            HostIdentity::resolve(Some((1001, 1001))),
            &GitAuthor::default(),
        )
    }

    fn content_of(structure: &ProjectStructure, path: &str) -> String {
        structure
            .files()
            .find(|f| f.path == Path::new(path))
            .map(|f| f.content.clone())
            .unwrap_or_else(|| panic!("missing {path}"))
    }

    #[test]
    fn directories_precede_their_files_once() {
        let structure = SimpleRenderer::new()
            .render(
                &builtin_templates::devcontainer(),
                &context(),
                Path::new("/out/demo-app"),
            )
            .unwrap();

        let order: Vec<(bool, PathBuf)> = structure
            .entries()
            .iter()
            .map(|e| match e {
                FsEntry::Directory(d) => (true, d.path.clone()),
                FsEntry::File(f) => (false, f.path.clone()),
            })
            .collect();

        assert_eq!(order[0], (true, PathBuf::from(".devcontainer")));
        assert_eq!(structure.directories().count(), 3);
        assert_eq!(structure.files().count(), 9);
        assert_eq!(structure.root(), Path::new("/out/demo-app"));
    }

    #[test]
    fn env_file_gets_identity_and_author() {
        let structure = SimpleRenderer::new()
            .render(
                &builtin_templates::devcontainer(),
                &context(),
                Path::new("/out"),
            )
            .unwrap();

        assert_eq!(
            content_of(&structure, ".devcontainer/.env"),
            "# .env for docker-compose\nCURRENT_UID=1001\nCURRENT_GID=1001\n\
             GIT_USER_NAME=Your Name\nGIT_USER_EMAIL=you@example.com\n"
        );
    }

    #[test]
    fn project_name_reaches_compose_and_devcontainer_json() {
        let structure = SimpleRenderer::new()
            .render(
                &builtin_templates::devcontainer(),
                &context(),
                Path::new("/out"),
            )
            .unwrap();

        assert!(
            content_of(&structure, ".devcontainer/docker-compose.yaml")
                .contains("  demo-app-app-main:\n")
        );
        let json = content_of(&structure, ".devcontainer/devcontainer.json");
        assert!(json.contains("\"name\": \"Dev container: demo-app\""));
        assert!(json.contains("\"service\": \"demo-app-app-main\""));
    }

    #[test]
    fn literal_content_is_not_substituted() {
        let template = TemplateSet::new("literal")
            .with_file(TemplateFile::literal("notes.txt", "keep {{PROJECT_NAME}}"));

        let structure = SimpleRenderer::new()
            .render(&template, &context(), Path::new("/out"))
            .unwrap();

        assert_eq!(content_of(&structure, "notes.txt"), "keep {{PROJECT_NAME}}");
        assert_eq!(structure.directories().count(), 0);
    }

    #[test]
    fn unknown_placeholder_fails_rendering() {
        let template = TemplateSet::new("broken")
            .with_file(TemplateFile::parameterized("a.txt", "{{NOT_A_VARIABLE}}"));

        let err = SimpleRenderer::new()
            .render(&template, &context(), Path::new("/out"))
            .unwrap_err();

        match err {
            DevnestError::Application(ApplicationError::RenderingFailed { reason }) => {
                assert!(reason.contains("{{NOT_A_VARIABLE}}"));
                assert!(reason.contains("a.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_template_is_rejected() {
        let err = SimpleRenderer::new()
            .render(&TemplateSet::new("empty"), &context(), Path::new("/out"))
            .unwrap_err();
        assert!(matches!(err, DevnestError::Domain(_)));
    }
}

//! Scaffold Service - main template generation orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Validate the template and the author strings
//! 2. Resolve host identity (with fallback policy)
//! 3. Render the template set with the project context
//! 4. Write every directory and file to the filesystem
//!
//! Files are overwritten in place. A failed write is returned immediately;
//! files written before it are left as they are.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, IdentityProvider, TemplateRenderer},
    domain::{
        DomainValidator as validator, FsEntry, GitAuthor, HostIdentity, ProjectName,
        ProjectStructure, RenderContext, TemplateSet,
    },
    error::{DevnestError, DevnestResult},
};

/// Summary of a completed generation, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub project: String,
    pub path: PathBuf,
    pub identity: HostIdentity,
    /// Written files, relative to `path`, in write order.
    pub files: Vec<PathBuf>,
}

/// Main generation service.
pub struct ScaffoldService {
    template: TemplateSet,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    identity: Box<dyn IdentityProvider>,
    author: GitAuthor,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given template and adapters.
    pub fn new(
        template: TemplateSet,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        identity: Box<dyn IdentityProvider>,
    ) -> Self {
        Self {
            template,
            renderer,
            filesystem,
            identity,
            author: GitAuthor::default(),
        }
    }

    /// Override the author written into the environment file.
    pub fn with_author(mut self, author: GitAuthor) -> Self {
        self.author = author;
        self
    }

    /// Host identity after the fallback policy.
    pub fn resolve_identity(&self) -> HostIdentity {
        let raw = self.identity.effective_ids();
        let resolved = HostIdentity::resolve(raw);
        debug!(?raw, %resolved, "Host identity resolved");
        resolved
    }

    /// Write the template set into `project_path`.
    #[instrument(
        skip_all,
        fields(
            template = self.template.name(),
            project = %project_name,
            path = %project_path.display()
        )
    )]
    pub fn generate(
        &self,
        project_path: &Path,
        project_name: &ProjectName,
    ) -> DevnestResult<GenerationReport> {
        validator::validate_template(&self.template).map_err(DevnestError::Domain)?;
        self.author.validate().map_err(DevnestError::Domain)?;

        let identity = self.resolve_identity();
        let context = RenderContext::new(project_name, identity, &self.author);

        let structure = self.renderer.render(&self.template, &context, project_path)?;
        self.write_all(&structure)?;

        let files: Vec<PathBuf> = structure.files().map(|f| f.path.clone()).collect();
        info!(files = files.len(), "Files generated");

        Ok(GenerationReport {
            project: project_name.to_string(),
            path: project_path.to_path_buf(),
            identity,
            files,
        })
    }

    /// Write all entries in the structure.
    fn write_all(&self, structure: &ProjectStructure) -> DevnestResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    debug!(path = %file.path.display(), bytes = file.content.len(), "Writing file");
                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                }
            }
        }

        Ok(())
    }
}

//! Directory Service - creates (or replaces) the project directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ProjectName,
    error::DevnestResult,
};

/// Prepares `<base_path>/<project_name>` for generation.
pub struct DirectoryService {
    filesystem: Box<dyn Filesystem>,
}

impl DirectoryService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Compute the project path, clear it if asked to, and make sure it exists.
    ///
    /// - Existing directory + `overwrite`: removed recursively, then recreated.
    /// - Existing directory without `overwrite`: [`ApplicationError::ProjectExists`],
    ///   nothing is touched.
    /// - Existing non-directory: [`ApplicationError::NotADirectory`], nothing is
    ///   touched.
    /// - Missing: created along with any missing parents.
    #[instrument(
        skip_all,
        fields(project = %name, overwrite = overwrite, base_path = %base_path.display())
    )]
    pub fn prepare(
        &self,
        name: &ProjectName,
        overwrite: bool,
        base_path: &Path,
    ) -> DevnestResult<PathBuf> {
        let project_path = base_path.join(name.as_str());

        if self.filesystem.is_dir(&project_path) {
            if !overwrite {
                return Err(ApplicationError::ProjectExists { path: project_path }.into());
            }

            warn!(
                path = %project_path.display(),
                "Overwriting existing project directory"
            );
            self.filesystem.remove_dir_all(&project_path)?;
        } else if self.filesystem.exists(&project_path) {
            return Err(ApplicationError::NotADirectory { path: project_path }.into());
        }

        debug!(path = %project_path.display(), "Creating project directory");
        self.filesystem.create_dir_all(&project_path)?;

        info!(path = %project_path.display(), "Project directory ready");
        Ok(project_path)
    }
}

//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `devnest-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ProjectStructure, RenderContext, TemplateSet};
use crate::error::DevnestResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `devnest_adapters::filesystem::LocalFilesystem` (production)
/// - `devnest_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DevnestResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> DevnestResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> DevnestResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> DevnestResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `devnest_adapters::renderer::SimpleRenderer` (variable substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template set into a project structure rooted at `output_root`.
    fn render(
        &self,
        template: &TemplateSet,
        context: &RenderContext,
        output_root: &Path,
    ) -> DevnestResult<ProjectStructure>;
}

/// Port for the host's effective user and group ids.
///
/// Implemented by:
/// - `devnest_adapters::identity::ProcessIdentity` (production)
/// - `devnest_adapters::identity::FixedIdentity` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    /// `(uid, gid)`, or `None` when the platform has no such concept.
    fn effective_ids(&self) -> Option<(u32, u32)>;
}

/// Exit status of an external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub const fn exited(code: i32) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
        }
    }
}

/// Port for running host system-administration utilities.
///
/// Implemented by:
/// - `devnest_adapters::process::SystemCommandRunner` (production)
/// - `devnest_adapters::process::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion.
    ///
    /// `Err` means the command could not be started at all; a command that
    /// ran and failed is `Ok` with `success == false`.
    fn run(&self, program: &str, args: &[String]) -> DevnestResult<CommandStatus>;
}

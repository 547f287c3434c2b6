pub mod common;
pub mod project_structure;
pub mod template;

pub use common::{Permissions, RelativePath};
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use template::{RenderContext, TemplateContent, TemplateFile, TemplateSet};

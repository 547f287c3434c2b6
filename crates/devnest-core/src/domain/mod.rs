//! Core domain layer for devnest.
//!
//! Pure business logic: the project-name policy, the host-identity fallback
//! policy and the template model. All I/O is handled via ports (traits)
//! defined in the application layer.
//!
//! - **No I/O**: No filesystem, process or environment access
//! - **Validated on construction**: `ProjectName` and `HostIdentity` cannot
//!   hold a value that breaks their policy

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    DirectoryToCreate, FileToWrite, FsEntry, Permissions, ProjectStructure, RelativePath,
    RenderContext, TemplateContent, TemplateFile, TemplateSet,
    template::find_unresolved,
};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{FALLBACK_ID, GitAuthor, HostIdentity, ProjectName};

//! Infrastructure adapters for devnest.
//!
//! This crate implements the ports defined in `devnest-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod identity;
pub mod process;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use identity::{FixedIdentity, ProcessIdentity};
pub use process::{RecordingRunner, SystemCommandRunner};
pub use renderer::SimpleRenderer;

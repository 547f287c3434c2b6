//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `devnest-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateRenderer`: Template rendering
//!   - `IdentityProvider`: Host uid/gid lookup
//!   - `CommandRunner`: External administration utilities

pub mod output;

pub use output::{CommandRunner, CommandStatus, Filesystem, IdentityProvider, TemplateRenderer};

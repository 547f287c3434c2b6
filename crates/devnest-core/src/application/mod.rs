//! Application layer for devnest.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DirectoryService, ScaffoldService,
//!   OwnershipService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    DirectoryService, GenerationReport, OwnershipPolicy, OwnershipReport, OwnershipService,
    OwnershipStep, ScaffoldService, StepOutcome, StepStatus,
};

pub use ports::{CommandRunner, CommandStatus, Filesystem, IdentityProvider, TemplateRenderer};

pub use error::ApplicationError;

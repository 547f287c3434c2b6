//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the use cases "prepare the project directory", "generate the files"
//! and "hand the project to the container account".

pub mod directory_service;
pub mod ownership_service;
pub mod scaffold_service;

pub use directory_service::DirectoryService;
pub use ownership_service::{
    OwnershipPolicy, OwnershipReport, OwnershipService, OwnershipStep, StepOutcome, StepStatus,
};
pub use scaffold_service::{GenerationReport, ScaffoldService};

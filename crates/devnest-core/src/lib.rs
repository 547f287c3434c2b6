//! devnest Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the devnest
//! devcontainer scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           devnest-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (DirectoryService, ScaffoldService,    │
//! │   OwnershipService)                     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, TemplateRenderer,         │
//! │   IdentityProvider, CommandRunner)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    devnest-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ProjectName, HostIdentity,            │
//! │   TemplateSet, ProjectStructure)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use devnest_core::prelude::*;
//!
//! let name = ProjectName::parse("demo-app")?;
//! let path = DirectoryService::new(filesystem).prepare(&name, false, "..".as_ref())?;
//! let report = ScaffoldService::new(template, renderer, filesystem, identity)
//!     .generate(&path, &name)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DirectoryService, GenerationReport, OwnershipReport, OwnershipService, ScaffoldService,
        ports::{CommandRunner, CommandStatus, Filesystem, IdentityProvider, TemplateRenderer},
    };
    pub use crate::domain::{
        GitAuthor, HostIdentity, ProjectName, ProjectStructure, RenderContext, TemplateFile,
        TemplateSet,
    };
    pub use crate::error::{DevnestError, DevnestResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

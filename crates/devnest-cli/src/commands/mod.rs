//! Command handlers, one per binary.

pub mod chown;
pub mod create;

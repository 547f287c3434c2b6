//! Host identity adapters.

use devnest_core::application::ports::IdentityProvider;

/// Reads the effective uid/gid of the running process.
///
/// Returns `None` on platforms without POSIX ids; the core fallback policy
/// turns that into `1000:1000`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessIdentity;

impl ProcessIdentity {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityProvider for ProcessIdentity {
    #[cfg(unix)]
    fn effective_ids(&self) -> Option<(u32, u32)> {
        use rustix::process::{getegid, geteuid};

        Some((geteuid().as_raw(), getegid().as_raw()))
    }

    #[cfg(not(unix))]
    fn effective_ids(&self) -> Option<(u32, u32)> {
        None
    }
}

/// Fixed identity for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdentity(pub Option<(u32, u32)>);

impl FixedIdentity {
    pub fn new(uid: u32, gid: u32) -> Self {
        Self(Some((uid, gid)))
    }

    /// An identity provider that behaves like a non-POSIX host.
    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl IdentityProvider for FixedIdentity {
    fn effective_ids(&self) -> Option<(u32, u32)> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use devnest_core::domain::HostIdentity;

    use super::*;

    #[test]
    #[cfg(unix)]
    fn process_identity_is_available_on_unix() {
        assert!(ProcessIdentity::new().effective_ids().is_some());
    }

    #[test]
    #[cfg(unix)]
    fn process_identity_owns_new_files() {
        use std::os::unix::fs::MetadataExt;

        let file = tempfile::NamedTempFile::new().unwrap();
        let (uid, _) = ProcessIdentity::new().effective_ids().unwrap();
        assert_eq!(file.as_file().metadata().unwrap().uid(), uid);
    }

    #[test]
    fn resolved_process_identity_is_never_root() {
        let identity = HostIdentity::resolve(ProcessIdentity::new().effective_ids());
        assert_ne!(identity.uid(), 0);
        assert_ne!(identity.gid(), 0);
    }

    #[test]
    fn fixed_identity_reports_what_it_was_given() {
        assert_eq!(FixedIdentity::new(1001, 20).effective_ids(), Some((1001, 20)));
        assert_eq!(FixedIdentity::unavailable().effective_ids(), None);
    }
}

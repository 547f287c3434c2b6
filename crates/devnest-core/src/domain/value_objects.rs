//! Domain value objects: ProjectName, HostIdentity, GitAuthor.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Each one enforces its invariant at construction, so a value that exists
//! is a value that is valid.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{entities::template::PLACEHOLDER_OPEN, error::DomainError};

// ── ProjectName ──────────────────────────────────────────────────────────────

static PROJECT_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+[a-z0-9-]*[a-z0-9]$").expect("project name pattern is a valid regex")
});

/// A validated project name.
///
/// Starts with a lowercase letter, continues with lowercase letters, digits
/// or dashes, and ends with a letter or digit. Used both as the directory
/// name and as the `{{PROJECT_NAME}}` substitution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `name` against the naming policy.
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if PROJECT_NAME_PATTERN.is_match(&name) {
            return Ok(Self(name));
        }

        Err(DomainError::InvalidProjectName {
            reason: rejection_reason(&name).into(),
            name,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pick the most specific explanation for a name the pattern rejected.
fn rejection_reason(name: &str) -> &'static str {
    let Some(first) = name.chars().next() else {
        return "name cannot be empty";
    };

    if name.chars().any(|c| c.is_ascii_uppercase()) {
        "name must be lowercase"
    } else if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        "name may only contain lowercase letters a-z, digits 0-9, and dashes (-)"
    } else if !first.is_ascii_lowercase() {
        "name must start with a lowercase letter"
    } else if name.ends_with('-') {
        "name cannot end with a dash"
    } else {
        "name must be at least two characters long"
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── HostIdentity ─────────────────────────────────────────────────────────────

/// The uid/gid pair substituted when the host one is unusable.
pub const FALLBACK_ID: u32 = 1000;

/// The uid/gid pair propagated into the container files.
///
/// Never contains the superuser id: [`HostIdentity::resolve`] replaces it
/// with [`FALLBACK_ID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostIdentity {
    uid: u32,
    gid: u32,
}

impl HostIdentity {
    /// Apply the fallback policy to the ids reported by the host.
    ///
    /// `None` (platform without uids) or a 0 in either position yields
    /// `(1000, 1000)` for both.
    pub fn resolve(raw: Option<(u32, u32)>) -> Self {
        match raw {
            Some((uid, gid)) if uid != 0 && gid != 0 => Self { uid, gid },
            _ => Self::fallback(),
        }
    }

    pub const fn fallback() -> Self {
        Self {
            uid: FALLBACK_ID,
            gid: FALLBACK_ID,
        }
    }

    pub const fn uid(&self) -> u32 {
        self.uid
    }

    pub const fn gid(&self) -> u32 {
        self.gid
    }
}

impl fmt::Display for HostIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.uid, self.gid)
    }
}

// ── GitAuthor ────────────────────────────────────────────────────────────────

/// Author identity written into the generated environment file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitAuthor {
    pub name: String,
    pub email: String,
}

impl GitAuthor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl GitAuthor {
    /// Check that both fields fit on one `KEY=value` line of the `.env` file.
    ///
    /// Control characters would add or split lines, and `{{` would read as a
    /// placeholder.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [("name", &self.name), ("email", &self.email)] {
            let reason = if value.trim().is_empty() {
                "must not be empty"
            } else if value.chars().any(char::is_control) {
                "must not contain control characters such as newlines"
            } else if value.contains(PLACEHOLDER_OPEN) {
                "must not contain '{{'"
            } else {
                continue;
            };

            return Err(DomainError::InvalidAuthor {
                field,
                value: value.clone(),
                reason: reason.into(),
            });
        }

        Ok(())
    }
}

impl Default for GitAuthor {
    fn default() -> Self {
        Self::new("Your Name", "you@example.com")
    }
}

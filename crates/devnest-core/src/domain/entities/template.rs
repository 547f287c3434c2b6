//! Template domain model.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateSet (Entity)                                       │
//! │  ├── name: "devcontainer"                                   │
//! │  └── files: Vec<TemplateFile>                               │
//! │       ├── path: RelativePath (".devcontainer/.env")         │
//! │       ├── content: Literal | Parameterized                  │
//! │       └── permissions: Permissions                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{PROJECT_NAME}} -> "demo-app"  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Literal vs Parameterized
//!
//! Literal content is written as-is and never scanned for placeholders.
//! Parameterized content goes through [`RenderContext::render`].
//!
//! The set of files is fixed at compile time; directories are implied by
//! the file paths and created by the renderer.

use std::collections::{BTreeMap, HashSet};

use crate::domain::{
    entities::common::{Permissions, RelativePath},
    error::DomainError,
    value_objects::{GitAuthor, HostIdentity, ProjectName},
};

/// Opening delimiter of a substitution point.
pub const PLACEHOLDER_OPEN: &str = "{{";
/// Closing delimiter of a substitution point.
pub const PLACEHOLDER_CLOSE: &str = "}}";

/// Template file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateContent {
    /// Written verbatim.
    Literal(&'static str),
    /// Contains `{{VARIABLE}}` placeholders.
    Parameterized(&'static str),
}

impl TemplateContent {
    pub const fn source(&self) -> &'static str {
        match self {
            Self::Literal(s) | Self::Parameterized(s) => s,
        }
    }

    pub const fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized(_))
    }
}

/// One file of a template: where it goes and what it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: RelativePath,
    pub content: TemplateContent,
    pub permissions: Permissions,
}

impl TemplateFile {
    pub fn literal(path: impl Into<RelativePath>, content: &'static str) -> Self {
        Self {
            path: path.into(),
            content: TemplateContent::Literal(content),
            permissions: Permissions::default(),
        }
    }

    pub fn parameterized(path: impl Into<RelativePath>, content: &'static str) -> Self {
        Self {
            path: path.into(),
            content: TemplateContent::Parameterized(content),
            permissions: Permissions::default(),
        }
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }
}

/// A fixed, ordered collection of template files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    name: &'static str,
    files: Vec<TemplateFile>,
}

impl TemplateSet {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: TemplateFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn files(&self) -> &[TemplateFile] {
        &self.files
    }

    /// Non-empty, no duplicate paths, no absolute paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyTemplate {
                template: self.name.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.path.as_path().is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: file.path.to_string(),
                });
            }
            if !seen.insert(file.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Context for template rendering.
///
/// ## Built-in Variables
///
/// | Variable         | Example            |
/// |------------------|--------------------|
/// | `PROJECT_NAME`   | `demo-app`         |
/// | `CURRENT_UID`    | `1000`             |
/// | `CURRENT_GID`    | `1000`             |
/// | `GIT_USER_NAME`  | `Your Name`        |
/// | `GIT_USER_EMAIL` | `you@example.com`  |
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: &ProjectName, identity: HostIdentity, author: &GitAuthor) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert("PROJECT_NAME".to_string(), project_name.to_string());
        variables.insert("CURRENT_UID".to_string(), identity.uid().to_string());
        variables.insert("CURRENT_GID".to_string(), identity.gid().to_string());
        variables.insert("GIT_USER_NAME".to_string(), author.name.clone());
        variables.insert("GIT_USER_EMAIL".to_string(), author.email.clone());

        Self {
            project_name: project_name.to_string(),
            variables,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Substitute every known `{{KEY}}` in `source` in a single left-to-right
    /// pass. Substituted values are copied as they are and never rescanned.
    ///
    /// Unknown placeholders are left in place; see [`find_unresolved`].
    pub fn render(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        let mut rest = source;

        while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
            out.push_str(&rest[..start]);
            let inner = &rest[start + PLACEHOLDER_OPEN.len()..];

            let Some(end) = inner.find(PLACEHOLDER_CLOSE) else {
                rest = &rest[start..];
                break;
            };

            let key = &inner[..end];
            match self.variables.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str(PLACEHOLDER_OPEN);
                    out.push_str(key);
                    out.push_str(PLACEHOLDER_CLOSE);
                }
            }
            rest = &inner[end + PLACEHOLDER_CLOSE.len()..];
        }

        out.push_str(rest);
        out
    }
}

/// First placeholder still present in rendered output, if any.
pub fn find_unresolved(rendered: &str) -> Option<&str> {
    let start = rendered.find(PLACEHOLDER_OPEN)?;
    let rest = &rendered[start..];
    let end = rest
        .find(PLACEHOLDER_CLOSE)
        .map_or(rest.len(), |i| i + PLACEHOLDER_CLOSE.len());
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> RenderContext {
        RenderContext::new(
            &ProjectName::parse("demo-app").unwrap(),
            HostIdentity::resolve(Some((1001, 1002))),
            &GitAuthor::new("Jane Doe", "jane@example.com"),
        )
    }

    #[test]
    fn render_substitutes_all_builtin_variables() {
        let out = context().render(
            "{{PROJECT_NAME}} {{CURRENT_UID}} {{CURRENT_GID}} {{GIT_USER_NAME}} <{{GIT_USER_EMAIL}}>",
        );
        assert_eq!(out, "demo-app 1001 1002 Jane Doe <jane@example.com>");
    }

    #[test]
    fn render_leaves_shell_style_variables_alone() {
        let source = "user: \"${CURRENT_UID}:${CURRENT_GID}\"";
        assert_eq!(context().render(source), source);
    }

    #[test]
    fn render_replaces_every_occurrence() {
        assert_eq!(
            context().render("{{PROJECT_NAME}}/{{PROJECT_NAME}}"),
            "demo-app/demo-app"
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let ctx = RenderContext::new(
            &ProjectName::parse("demo-app").unwrap(),
            HostIdentity::resolve(Some((1001, 1002))),
            &GitAuthor::new("{{PROJECT_NAME}}", "{{NOPE}}"),
        );
        assert_eq!(
            ctx.render("GIT_USER_NAME={{GIT_USER_NAME}}\nGIT_USER_EMAIL={{GIT_USER_EMAIL}}"),
            "GIT_USER_NAME={{PROJECT_NAME}}\nGIT_USER_EMAIL={{NOPE}}"
        );
    }

    #[test]
    fn unknown_and_unterminated_placeholders_are_kept() {
        assert_eq!(
            context().render("{{NOPE}} {{PROJECT_NAME}} {{OPEN"),
            "{{NOPE}} demo-app {{OPEN"
        );
    }

    #[test]
    fn unresolved_placeholder_is_reported() {
        assert_eq!(find_unresolved("a {{NOPE}} b"), Some("{{NOPE}}"));
        assert_eq!(find_unresolved("a {{NOPE"), Some("{{NOPE"));
        assert_eq!(find_unresolved("${file}"), None);
    }

    #[test]
    fn empty_template_set_is_invalid() {
        assert!(matches!(
            TemplateSet::new("empty").validate(),
            Err(DomainError::EmptyTemplate { .. })
        ));
    }

    #[test]
    fn duplicate_paths_are_invalid() {
        let set = TemplateSet::new("dup")
            .with_file(TemplateFile::literal("a.txt", "one"))
            .with_file(TemplateFile::literal("a.txt", "two"));
        assert!(matches!(
            set.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn content_kind_is_reported() {
        assert!(TemplateContent::Parameterized("{{PROJECT_NAME}}").is_parameterized());
        assert!(!TemplateContent::Literal("plain").is_parameterized());
    }
}

//! Built-in devcontainer template.
//!
//! [`devcontainer`] is the single template that ships with devnest: a Python
//! development container wired for VS Code, plus a hello-world entry point.
//!
//! # Layout
//!
//! ```text
//! <project>/
//! ├── .devcontainer/
//! │   ├── Dockerfile
//! │   ├── docker-compose.yaml
//! │   ├── .env
//! │   ├── devcontainer.json
//! │   ├── postStartCommand.sh
//! │   └── requirements.txt
//! ├── .gitignore
//! ├── .vscode/
//! │   └── launch.json
//! └── app-main/
//!     └── helloworld.py
//! ```
//!
//! Only the compose file, `.env` and `devcontainer.json` are parameterized.
//! Shell-style `${VAR}` references are left for Docker Compose and VS Code to
//! expand.

use devnest_core::domain::{Permissions, TemplateFile, TemplateSet};

/// Name reported for the built-in template.
pub const DEVCONTAINER: &str = "devcontainer";

// ── Public API ────────────────────────────────────────────────────────────────

/// The devcontainer template set, in write order.
pub fn devcontainer() -> TemplateSet {
    TemplateSet::new(DEVCONTAINER)
        .with_file(TemplateFile::literal(".devcontainer/Dockerfile", DOCKERFILE))
        .with_file(TemplateFile::parameterized(
            ".devcontainer/docker-compose.yaml",
            DOCKER_COMPOSE,
        ))
        .with_file(TemplateFile::parameterized(".devcontainer/.env", ENV_FILE))
        .with_file(TemplateFile::parameterized(
            ".devcontainer/devcontainer.json",
            DEVCONTAINER_JSON,
        ))
        .with_file(
            TemplateFile::literal(".devcontainer/postStartCommand.sh", POST_START_COMMAND)
                .with_permissions(Permissions::executable()),
        )
        .with_file(TemplateFile::literal(
            ".devcontainer/requirements.txt",
            REQUIREMENTS,
        ))
        .with_file(TemplateFile::literal(".gitignore", GITIGNORE))
        .with_file(TemplateFile::literal(".vscode/launch.json", LAUNCH_JSON))
        .with_file(TemplateFile::literal("app-main/helloworld.py", HELLO_WORLD))
}

// ── File contents ─────────────────────────────────────────────────────────────

const DOCKERFILE: &str = r#"# Use Python as base
# Use Python as base
FROM python:3.10-bullseye

# Build args for your local user
ARG CURRENT_UID=1000
ARG CURRENT_GID=1000

# Create group/user in container
RUN if [ "$CURRENT_UID" = "0" ] || [ "$CURRENT_GID" = "0" ]; then \
      echo "Detected root UID/GID => fallback to UID=1000, GID=1000"; \
      groupadd -g 1000 appuser && useradd -u 1000 -g 1000 -m appuser; \
    else \
      echo "Creating user with UID=$CURRENT_UID, GID=$CURRENT_GID"; \
      groupadd -g $CURRENT_GID appuser && useradd -u $CURRENT_UID -g $CURRENT_GID -m appuser; \
    fi

RUN apt-get update \
    && apt-get install -y sudo locales \
    && sed -i -e 's/# en_US.UTF-8 UTF-8/en_US.UTF-8 UTF-8/' /etc/locale.gen \
    && dpkg-reconfigure --frontend=noninteractive locales \
    && update-locale LC_ALL=en_US.UTF-8 \
    && apt-get clean \
    && rm -rf /var/lib/apt/lists/*

# Give passwordless sudo if desired
RUN echo "appuser ALL=(ALL) NOPASSWD:ALL" > /etc/sudoers.d/appuser

# **Key**: make sure the user has a bash shell
RUN usermod --shell /bin/bash appuser

# Optionally set environment variables for your shell
ENV LC_ALL=en_US.UTF-8
ENV LANG=en_US.UTF-8
ENV LANGUAGE=en_US.UTF-8

# Create and install in a virtual environment
RUN mkdir -p /usr/src/venvs \
    && python -m venv /usr/src/venvs/app-main
COPY requirements.txt /usr/src/
RUN /usr/src/venvs/app-main/bin/pip install --upgrade pip \
    && /usr/src/venvs/app-main/bin/pip install -r /usr/src/requirements.txt

# Switch to the non-root user
USER appuser
WORKDIR /usr/src/project

# **Key**: default command is /bin/bash
CMD ["/bin/bash"]

"#;

const DOCKER_COMPOSE: &str = r#"services:
  {{PROJECT_NAME}}-app-main:
    build:
      context: .
      dockerfile: Dockerfile
      args:
        CURRENT_UID: ${CURRENT_UID}
        CURRENT_GID: ${CURRENT_GID}
    user: "${CURRENT_UID}:${CURRENT_GID}"
    command: sleep infinity
    stdin_open: true
    tty: true
    volumes:
      - ..:/usr/src/project
    environment:
      - GIT_USER_NAME
      - GIT_USER_EMAIL
      - CURRENT_UID
      - CURRENT_GID
"#;

const ENV_FILE: &str = "# .env for docker-compose
CURRENT_UID={{CURRENT_UID}}
CURRENT_GID={{CURRENT_GID}}
GIT_USER_NAME={{GIT_USER_NAME}}
GIT_USER_EMAIL={{GIT_USER_EMAIL}}
";

const DEVCONTAINER_JSON: &str = r#"{
    "name": "Dev container: {{PROJECT_NAME}}",
    "dockerComposeFile": "docker-compose.yaml",
    "service": "{{PROJECT_NAME}}-app-main",
    "workspaceFolder": "/usr/src/project",
    "remoteUser": "appuser",
    "customizations": {
        "vscode": {
            "settings": {
                "python.defaultInterpreterPath": "/usr/src/venvs/app-main/bin/python"
            },
            "extensions": [
                "ms-python.vscode-pylance",
                "ms-python.debugpy",
                "ms-python.python"
            ]
        }
    },
    "postStartCommand": "bash .devcontainer/postStartCommand.sh"
}
"#;

const POST_START_COMMAND: &str = r#"#!/bin/bash
echo "Running postStartCommand.sh..."
"#;

const REQUIREMENTS: &str = "# Add your Python dependencies here\n";

const GITIGNORE: &str = "# Byte-compiled / optimized / DLL files
*.env
*.old
*.log
*.bak
.bashrc
.ssh/
.vscode-server/
.gitconfig
.cache/
.gnupg/
.bash_history
.dotnet/
";

const LAUNCH_JSON: &str = r#"{
    "configurations": [
        {
            "name": "Python: Current File",
            "type": "debugpy",
            "request": "launch",
            "program": "${file}",
            "console": "integratedTerminal"
        }
    ]
}
"#;

const HELLO_WORLD: &str = r#"def main():
    print("Hello from helloworld.py inside app-main folder!")

if __name__ == "__main__":
    main()
"#;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn file<'a>(set: &'a TemplateSet, path: &str) -> &'a TemplateFile {
        set.files()
            .iter()
            .find(|f| f.path.as_path() == Path::new(path))
            .unwrap_or_else(|| panic!("missing {path}"))
    }

    #[test]
    fn devcontainer_is_valid() {
        let set = devcontainer();
        assert!(set.validate().is_ok());
        assert_eq!(set.name(), "devcontainer");
        assert_eq!(set.files().len(), 9);
    }

    #[test]
    fn only_project_specific_files_are_parameterized() {
        let set = devcontainer();
        let parameterized: Vec<String> = set
            .files()
            .iter()
            .filter(|f| f.content.is_parameterized())
            .map(|f| f.path.to_string())
            .collect();
        assert_eq!(
            parameterized,
            [
                ".devcontainer/docker-compose.yaml",
                ".devcontainer/.env",
                ".devcontainer/devcontainer.json",
            ]
        );
    }

    #[test]
    fn post_start_command_is_executable() {
        let set = devcontainer();
        assert!(
            file(&set, ".devcontainer/postStartCommand.sh")
                .permissions
                .executable_flag()
        );
        assert!(
            !file(&set, ".devcontainer/Dockerfile")
                .permissions
                .executable_flag()
        );
    }

    #[test]
    fn dockerfile_keeps_shell_line_continuations() {
        let source = file(&devcontainer(), ".devcontainer/Dockerfile")
            .content
            .source();
        assert!(source.starts_with("# Use Python as base\n# Use Python as base\n"));
        assert!(source.contains("RUN apt-get update \\\n"));
        assert!(!source.contains("\\\\"));
        assert!(source.ends_with("CMD [\"/bin/bash\"]\n\n"));
    }

    #[test]
    fn compose_forwards_identity_to_docker() {
        let source = file(&devcontainer(), ".devcontainer/docker-compose.yaml")
            .content
            .source();
        assert!(source.contains("  {{PROJECT_NAME}}-app-main:\n"));
        assert!(source.contains("user: \"${CURRENT_UID}:${CURRENT_GID}\""));
    }

    #[test]
    fn launch_config_keeps_vscode_variable() {
        let source = file(&devcontainer(), ".vscode/launch.json").content.source();
        assert!(source.contains("\"program\": \"${file}\""));
    }
}

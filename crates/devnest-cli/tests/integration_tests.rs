//! End-to-end tests for the `devnest` binary.

use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

/// `devnest` rooted in `base`, isolated from the caller's environment.
fn devnest(base: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("devnest");
    cmd.current_dir(base)
        .env("DEVNEST_PROJECT__BASE_PATH", base)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn files_under(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    files.sort();
    files
}

#[test]
fn help_flag_exits_zero() {
    let temp = TempDir::new().unwrap();
    devnest(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--projectname"))
        .stdout(predicate::str::contains("--overwrite-existing-project"));
}

#[test]
fn version_flag_exits_zero() {
    let temp = TempDir::new().unwrap();
    devnest(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn creates_demo_project() {
    let temp = TempDir::new().unwrap();

    devnest(temp.path())
        .args(["--projectname", "demo-app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'demo-app' set up in:"))
        .stdout(predicate::str::contains("Done."));

    let project = temp.path().join("demo-app");
    assert_eq!(
        files_under(&project.join(".devcontainer")),
        [
            ".env",
            "Dockerfile",
            "devcontainer.json",
            "docker-compose.yaml",
            "postStartCommand.sh",
            "requirements.txt",
        ]
    );
    assert_eq!(files_under(&project.join(".vscode")), ["launch.json"]);
    assert_eq!(files_under(&project.join("app-main")), ["helloworld.py"]);
    assert!(project.join(".gitignore").is_file());

    let hello = fs::read_to_string(project.join("app-main/helloworld.py")).unwrap();
    assert!(hello.contains("Hello from helloworld.py inside app-main folder!"));

    let compose = fs::read_to_string(project.join(".devcontainer/docker-compose.yaml")).unwrap();
    assert!(compose.contains("  demo-app-app-main:\n"));
}

#[test]
fn second_run_without_overwrite_fails_and_keeps_files() {
    let temp = TempDir::new().unwrap();
    devnest(temp.path())
        .args(["--projectname", "demo-app"])
        .assert()
        .success();

    let project = temp.path().join("demo-app");
    fs::write(project.join("notes.txt"), "mine").unwrap();

    devnest(temp.path())
        .args(["--projectname", "demo-app"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--overwrite-existing-project"));

    assert_eq!(fs::read_to_string(project.join("notes.txt")).unwrap(), "mine");
    assert!(project.join(".devcontainer/Dockerfile").is_file());
}

#[test]
fn overwrite_replaces_existing_project() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("demo-app");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("marker"), "old").unwrap();

    devnest(temp.path())
        .args(["--projectname", "demo-app", "--overwrite-existing-project"])
        .assert()
        .success();

    assert!(!project.join("marker").exists());
    assert!(project.join(".devcontainer/devcontainer.json").is_file());
}

#[test]
fn overwrite_is_logged_before_removal() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("demo-app")).unwrap();

    devnest(temp.path())
        .args(["--projectname", "demo-app", "--overwrite-existing-project"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Overwriting existing project directory"));
}

#[test]
fn overwrite_notice_survives_quiet() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("demo-app")).unwrap();

    devnest(temp.path())
        .args([
            "--projectname",
            "demo-app",
            "--overwrite-existing-project",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Overwriting existing project directory"));
}

#[test]
fn no_color_accepts_any_conventional_value() {
    for value in ["1", "yes", "true"] {
        let temp = TempDir::new().unwrap();
        devnest(temp.path())
            .env("NO_COLOR", value)
            .args(["--projectname", "demo-app"])
            .assert()
            .success();
        assert!(temp.path().join("demo-app/.devcontainer/.env").is_file());
    }
}

#[test]
fn author_from_env_cannot_inject_lines() {
    let temp = TempDir::new().unwrap();

    devnest(temp.path())
        .env("DEVNEST_AUTHOR__NAME", "x\nCURRENT_UID=0")
        .args(["--projectname", "demo-app"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("control characters"));

    assert!(!temp.path().join("demo-app").exists());
}

#[test]
fn author_placeholder_is_not_expanded() {
    let temp = TempDir::new().unwrap();

    devnest(temp.path())
        .env("DEVNEST_AUTHOR__NAME", "{{PROJECT_NAME}}")
        .args(["--projectname", "demo-app"])
        .assert()
        .code(4);

    assert!(!temp.path().join("demo-app").exists());
}

#[test]
fn json_output_describes_generation() {
    let temp = TempDir::new().unwrap();

    let assert = devnest(temp.path())
        .args(["--projectname", "demo-app", "--output-format", "json"])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["project"], "demo-app");
    assert_eq!(report["files"].as_array().map(Vec::len), Some(9));
}

#[test]
fn quiet_run_prints_nothing() {
    let temp = TempDir::new().unwrap();
    devnest(temp.path())
        .args(["--projectname", "demo-app", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(temp.path().join("demo-app/.gitignore").is_file());
}

#[test]
fn base_path_from_config_file() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("projects");
    fs::create_dir_all(&base).unwrap();
    let config = temp.path().join("devnest.toml");
    fs::write(
        &config,
        format!(
            "[project]\nbase_path = {:?}\n\n[author]\nname = \"Jane Doe\"\n",
            base.display().to_string()
        ),
    )
    .unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("devnest");
    cmd.current_dir(temp.path())
        .env_remove("DEVNEST_PROJECT__BASE_PATH")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config)
        .args(["--projectname", "demo-app"])
        .assert()
        .success();

    let env = fs::read_to_string(base.join("demo-app/.devcontainer/.env")).unwrap();
    assert!(env.contains("GIT_USER_NAME=Jane Doe\n"));
    assert!(env.contains("GIT_USER_EMAIL=you@example.com\n"));
}

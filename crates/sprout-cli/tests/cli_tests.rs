//! End-to-end tests of the `sprout` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// `sprout` running inside `dir`, isolated from the user's configuration.
fn sprout(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sprout").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

#[test]
fn test_help_flag() {
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT"))
        .stdout(predicate::str::contains("--with-namespace"))
        .stdout(predicate::str::contains("--pretend"));
}

#[test]
fn test_version_flag() {
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_help_and_fails() {
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_list_licenses() {
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path())
        .arg("--list-licenses")
        .assert()
        .success()
        .stdout(predicate::str::contains("mit"))
        .stdout(predicate::str::contains("gpl3"))
        .stdout(predicate::str::contains("new-bsd"));
}

#[test]
fn test_create_project() {
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path())
        .args(["my-project", "--no-git", "--author", "Jane Doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'my-project' created!"))
        .stderr(predicate::str::contains("create"));

    let root = tmp.path().join("my-project");
    for file in [
        "setup.py",
        "setup.cfg",
        "README.rst",
        "LICENSE.txt",
        "my_project/__init__.py",
        "tests/__init__.py",
    ] {
        assert!(root.join(file).is_file(), "{file} missing");
    }
    let cfg = std::fs::read_to_string(root.join("setup.cfg")).unwrap();
    assert!(cfg.contains("author = Jane Doe"));
    assert!(!root.join(".git").exists());
}

#[test]
fn test_quiet_run_prints_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path())
        .args(["p", "--no-git", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("create").not());
    assert!(tmp.path().join("p/setup.py").is_file());
}

#[test]
fn test_pretend_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path())
        .args(["p", "--no-git", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("setup.py"));
    assert!(!tmp.path().join("p").exists());
}

#[test]
fn test_pretend_reports_every_action_including_git() {
    let tmp = tempfile::tempdir().unwrap();
    let assert = sprout(tmp.path()).args(["p", "--pretend"]).assert().success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    for line in [
        "invoke  get_default_options",
        "invoke  verify_options_consistency",
        "invoke  define_structure",
        "invoke  create_structure",
        "invoke  init_git",
        "chdir",
        "run  git init",
        "run  git add",
    ] {
        assert!(stderr.contains(line), "missing `{line}` in:\n{stderr}");
    }
    assert_eq!(stderr.matches("git init").count(), 1);
    assert!(!tmp.path().join("p").exists());
}

#[test]
fn test_git_repository_then_update() {
    if !git_available() {
        eprintln!("git not installed, skipping");
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path())
        .arg("p")
        .assert()
        .success()
        .stderr(predicate::str::contains("git init"))
        .stderr(predicate::str::contains("git add"));
    assert!(tmp.path().join("p/.git").is_dir());

    sprout(tmp.path())
        .args(["p", "--update"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Update accomplished!"))
        .stderr(predicate::str::contains("git init").not());
    assert!(tmp.path().join("p/setup.py").is_file());
}

#[test]
fn test_existing_directory_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("p")).unwrap();
    sprout(tmp.path())
        .args(["p", "--no-git"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--update"));
}

#[test]
fn test_update_keeps_user_files() {
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path()).args(["p", "--no-git"]).assert().success();
    let readme = tmp.path().join("p/README.rst");
    std::fs::write(&readme, "my own readme").unwrap();

    sprout(tmp.path())
        .args(["p", "--no-git", "--update"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Update accomplished!"));
    assert_eq!(std::fs::read_to_string(&readme).unwrap(), "my own readme");
}

#[test]
fn test_update_of_missing_project_fails() {
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path())
        .args(["ghost", "--no-git", "-U"])
        .assert()
        .code(2);
    assert!(!tmp.path().join("ghost").exists());
}

#[test]
fn test_force_overwrites_existing_files() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("p");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(root.join("README.rst"), "old").unwrap();

    sprout(tmp.path())
        .args(["p", "--no-git", "--force"])
        .assert()
        .success();
    assert_ne!(std::fs::read_to_string(root.join("README.rst")).unwrap(), "old");
}

#[test]
fn test_extensions_and_fuzzy_license() {
    let tmp = tempfile::tempdir().unwrap();
    sprout(tmp.path())
        .args([
            "my-project",
            "--no-git",
            "--with-namespace",
            "com.blue_yonder",
            "--with-gitlab-ci",
            "--license",
            "gpl-3",
        ])
        .assert()
        .success();

    let root = tmp.path().join("my-project");
    assert!(root.join("com/blue_yonder/my_project/__init__.py").is_file());
    assert!(root.join(".gitlab-ci.yml").is_file());
    let license = std::fs::read_to_string(root.join("LICENSE.txt")).unwrap();
    assert!(license.contains("GNU General Public License v3.0"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("sprout.toml");
    std::fs::write(
        &config,
        "[defaults]\nauthor = \"Config Author\"\nemail = \"config@example.com\"\ngit = false\n",
    )
    .unwrap();

    sprout(tmp.path())
        .arg("p")
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let cfg = std::fs::read_to_string(tmp.path().join("p/setup.cfg")).unwrap();
    assert!(cfg.contains("author = Config Author"));
    assert!(cfg.contains("author-email = config@example.com"));
    assert!(!tmp.path().join("p/.git").exists());
}

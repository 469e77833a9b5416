// tests/integration_test.rs
use assert_cmd::Command;
use git2::{Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const INHERITED_ENV: &[&str] = &[
    "GITHUB_ACTIONS",
    "GITHUB_OUTPUT",
    "GITHUB_REPOSITORY",
    "GITHUB_API_URL",
    "INPUT_PREFIX",
    "INPUT_SUFFIX",
    "INPUT_BUMP",
    "INPUT_REPLACE_SUFFIX",
    "INPUT_COPY_FROM",
    "INPUT_NEW_SUFFIX",
    "INPUT_TARGET_SUFFIX",
    "INPUT_SELECTION",
    "INPUT_SOURCE",
    "INPUT_GITHUB_TOKEN",
    "RUST_LOG",
];

fn repo_with_tags(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let sig = Signature::now("Test User", "test@example.com").unwrap();

    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .unwrap();
    let target = repo.find_object(oid, None).unwrap();
    for name in names {
        repo.tag_lightweight(name, &target, false).unwrap();
    }

    dir
}

/// Binary invocation isolated from the caller's CI and config environment
fn bump_tag(repo: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bump-tag").unwrap();
    for name in INHERITED_ENV {
        cmd.env_remove(name);
    }
    cmd.env("HOME", repo)
        .env("XDG_CONFIG_HOME", repo)
        .current_dir(repo)
        .args(["--source", "git", "--path"])
        .arg(repo);
    cmd
}

#[test]
fn test_minor_bump_prints_output() {
    let repo = repo_with_tags(&["v1.2.3", "v2.3.4"]);

    let output = bump_tag(repo.path())
        .args(["--prefix", "v", "--bump", "minor"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "updated_tag=v2.4.0\n");
}

#[test]
fn test_inputs_from_environment() {
    let repo = repo_with_tags(&["v1.2.3", "v2.3.4"]);

    let output = bump_tag(repo.path())
        .env("INPUT_PREFIX", "v")
        .env("INPUT_SUFFIX", "beta")
        .env("INPUT_BUMP", "prerelease")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "updated_tag=v2.4.0-beta.1\n"
    );
}

#[test]
fn test_writes_github_output_file() {
    let repo = repo_with_tags(&["v1.2.3-alpha", "v2.3.4-alpha"]);
    let output_file = repo.path().join("github_output");
    fs::write(&output_file, "earlier=value\n").unwrap();

    let output = bump_tag(repo.path())
        .env("GITHUB_OUTPUT", &output_file)
        .args(["--prefix", "v", "--suffix", "alpha", "--bump", "none"])
        .args(["--copy-from", "true", "--target-suffix", "beta"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let written = fs::read_to_string(&output_file).unwrap();
    assert_eq!(written, "earlier=value\nupdated_tag=v2.3.4-beta\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("copy_from is unnecessary"),
        "warning missing from stderr: {}",
        stderr
    );
}

#[test]
fn test_config_file_in_working_directory() {
    let repo = repo_with_tags(&["release-1.0.0", "release-1.0.1"]);
    fs::write(
        repo.path().join("bumptag.toml"),
        "prefix = \"release-\"\nbump = \"major\"\n",
    )
    .unwrap();

    let output = bump_tag(repo.path()).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "updated_tag=release-2.0.0\n"
    );
}

#[test]
fn test_validation_failure_exits_with_error() {
    let repo = repo_with_tags(&["v1.2.3"]);

    let output = bump_tag(repo.path())
        .args(["--prefix", "v", "--bump", "prerelease"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no tag may be emitted on failure");
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Prerelease bumps must be used with a suffix"));
}

#[test]
fn test_validation_failure_in_github_actions() {
    let repo = repo_with_tags(&["v1.2.3"]);

    let output = bump_tag(repo.path())
        .env("GITHUB_ACTIONS", "true")
        .args(["--prefix", "v", "--suffix", "beta", "--bump", "preminor"])
        .args(["--replace-suffix", "true", "--new-suffix", "rc"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "::error::The flag copy_from:true is not meant to be used with bump:preminor\n"
    );
}

#[test]
fn test_unknown_bump_is_rejected() {
    let repo = repo_with_tags(&[]);

    let output = bump_tag(repo.path())
        .args(["--bump", "huge"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_validation_precedes_git_source_outside_repository() {
    let dir = tempfile::tempdir().unwrap();

    let output = bump_tag(dir.path())
        .args(["--prefix", "v", "--bump", "prerelease"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Prerelease bumps must be used with a suffix"),
        "validation message missing from stderr: {}",
        stderr
    );
    assert!(!stderr.contains("Git operation failed"), "stderr: {}", stderr);
}

#[test]
fn test_validation_precedes_github_source_setup() {
    let dir = tempfile::tempdir().unwrap();

    let output = bump_tag(dir.path())
        .args(["--source", "github", "--repository", "not-a-repository"])
        .args(["--bump", "minor", "--replace-suffix", "true"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("A new_suffix must be defined when using replace_suffix:true"),
        "validation message missing from stderr: {}",
        stderr
    );
    assert!(!stderr.contains("owner/repo"), "stderr: {}", stderr);
}

#[test]
fn test_valid_config_outside_repository_reports_git_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = bump_tag(dir.path())
        .args(["--prefix", "v", "--bump", "patch"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Git operation failed"));
}

use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Keep the developer's own git configuration out of the test repositories
const ISOLATED_GIT_ENV: [(&str, &str); 6] = [
    ("GIT_CONFIG_NOSYSTEM", "1"),
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_AUTHOR_NAME", "History Tester"),
    ("GIT_AUTHOR_EMAIL", "tester@example.com"),
    ("GIT_COMMITTER_NAME", "History Tester"),
    ("GIT_COMMITTER_EMAIL", "tester@example.com"),
];

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    init_repository(repository_dir.path());
    repository_dir
}

/// Turn `dir` into a repository with one empty commit on `main`
pub fn init_repository(dir: &Path) {
    git(dir, &["init", "--quiet"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(dir, &["commit", "--quiet", "--allow-empty", "-m", "Initial commit"]);
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir).args(args).envs(ISOLATED_GIT_ENV);
    cmd
}

pub fn git(dir: &Path, args: &[&str]) {
    run_git_command(dir, args).assert().success();
}

pub fn create_and_checkout(dir: &Path, branch: &str) {
    git(dir, &["checkout", "--quiet", "-b", branch]);
}

pub fn checkout(dir: &Path, branch: &str) {
    git(dir, &["checkout", "--quiet", branch]);
}

pub fn run_history_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("git-history").expect("Failed to find git-history binary");
    cmd.current_dir(dir)
        .args(args)
        .envs(ISOLATED_GIT_ENV)
        .env_remove("GIT_HISTORY_GIT")
        .env_remove("GIT_HISTORY_LOG");
    cmd
}

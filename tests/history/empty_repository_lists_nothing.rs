use crate::common::command::{git, init_repository_dir, repository_dir, run_history_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn repository_without_commits_lists_nothing(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    git(dir, &["init", "--quiet"]);

    run_history_command(dir, &[]).assert().success().stdout("");

    Ok(())
}

#[rstest]
fn repository_without_checkouts_lists_nothing(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_history_command(init_repository_dir.path(), &[])
        .assert()
        .success()
        .stdout("");

    Ok(())
}

use crate::common::command::{
    checkout, create_and_checkout, init_repository_dir, run_history_command,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("1", "feature-y\n")]
#[case("2", "main\nfeature-y\n")]
#[case("5", "feature-x\nmain\nfeature-y\n")]
fn max_count_keeps_the_most_recent_branches(
    init_repository_dir: TempDir,
    #[case] max_count: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    create_and_checkout(dir, "feature-x");
    checkout(dir, "main");
    create_and_checkout(dir, "feature-y");

    run_history_command(dir, &["--max-count", max_count])
        .assert()
        .success()
        .stdout(expected.to_string());

    Ok(())
}

#[rstest]
fn max_count_stops_reading_a_long_reflog(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    create_and_checkout(dir, "feature-x");
    for _ in 0..60 {
        checkout(dir, "main");
        checkout(dir, "feature-x");
    }

    run_history_command(dir, &["-n", "1"])
        .assert()
        .success()
        .stdout("feature-x\n");

    Ok(())
}

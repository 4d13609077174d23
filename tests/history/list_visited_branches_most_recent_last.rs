use crate::common::command::{
    checkout, create_and_checkout, init_repository_dir, run_history_command,
};
use crate::common::stdout_lines;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeSet;

#[rstest]
fn list_branches_from_least_to_most_recently_visited(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    create_and_checkout(dir, "feature-x");
    checkout(dir, "main");
    create_and_checkout(dir, "feature-y");

    run_history_command(dir, &[])
        .assert()
        .success()
        .stdout("feature-x\nmain\nfeature-y\n");

    Ok(())
}

#[rstest]
fn revisited_branch_moves_to_the_end(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    create_and_checkout(dir, "feature-x");
    checkout(dir, "main");
    create_and_checkout(dir, "feature-y");
    checkout(dir, "feature-x");

    run_history_command(dir, &[])
        .assert()
        .success()
        .stdout("main\nfeature-y\nfeature-x\n");

    Ok(())
}

#[rstest]
fn list_many_topic_branches_in_visiting_order(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    let mut unique = BTreeSet::new();
    let mut topics = Vec::new();
    while topics.len() < 5 {
        let topic = format!("topic-{}", Word().fake::<String>());
        if unique.insert(topic.clone()) {
            topics.push(topic);
        }
    }

    for topic in &topics {
        create_and_checkout(dir, topic);
        checkout(dir, "main");
    }

    let output = run_history_command(dir, &[]).assert().success();

    let mut expected = topics.clone();
    expected.push("main".to_string());
    assert_eq!(stdout_lines(output.get_output()), expected);

    Ok(())
}

#[rstest]
fn work_tree_flag_reads_another_workspace(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let elsewhere = TempDir::new()?;

    create_and_checkout(dir, "feature-x");

    run_history_command(elsewhere.path(), &["-C", &dir.to_string_lossy()])
        .assert()
        .success()
        .stdout("main\nfeature-x\n");

    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn work_tree_flag_accepts_a_non_utf8_path() -> Result<(), Box<dyn std::error::Error>> {
    use crate::common::command::init_repository;
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let root = TempDir::new()?;
    let dir = root.path().join(OsStr::from_bytes(b"repo\xff"));
    std::fs::create_dir(&dir)?;
    init_repository(&dir);
    create_and_checkout(&dir, "feature-x");

    run_history_command(root.path(), &[])
        .arg("-C")
        .arg(&dir)
        .assert()
        .success()
        .stdout("main\nfeature-x\n");

    Ok(())
}

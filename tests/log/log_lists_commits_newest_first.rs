use crate::common::command::{add_file, init_repository_dir, kit_commit, run_kit_command};
use crate::common::expected_tree_digest;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_lists_commits_newest_first(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    add_file(dir, "1.txt", "one");
    kit_commit(dir, "first commit", "2024-03-09 10:00:01 +0000")
        .assert()
        .success();
    add_file(dir, "2.txt", "two");
    kit_commit(dir, "second commit", "2024-03-09 10:00:02 +0000")
        .assert()
        .success();
    add_file(dir, "3.txt", "three");
    kit_commit(dir, "third commit", "2024-03-09 10:00:03 +0000")
        .assert()
        .success();

    let output = run_kit_command(dir, &["log"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = format!(
        "\ntree {}\n\nthird commit\n\n\ntree {}\n\nsecond commit\n\n\ntree {}\n\nfirst commit\n\n",
        expected_tree_digest(&[b"one", b"two", b"three"]),
        expected_tree_digest(&[b"one", b"two"]),
        expected_tree_digest(&[b"one"]),
    );
    assert_eq!(stdout, expected);

    Ok(())
}

#[rstest]
fn end_to_end_single_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    add_file(dir, "file.txt", "hello");
    kit_commit(dir, "first", "2024-03-09 10:00:00 +0000")
        .assert()
        .success();

    run_kit_command(dir, &["log"])
        .assert()
        .success()
        .stdout("\ntree db6db2bf01f553580ac5ef479e8a6c98bccf536c\n\nfirst\n\n");

    Ok(())
}

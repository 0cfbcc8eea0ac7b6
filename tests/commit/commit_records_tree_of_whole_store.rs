use crate::common::command::{
    add_file, init_repository_dir, kit_commit, kit_dir, stored_commits, stored_objects,
};
use crate::common::{EMPTY_DIGEST, expected_tree_digest};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn read_commit(dir: &std::path::Path, name: &str) -> String {
    std::fs::read_to_string(kit_dir(dir).join("commits").join(name))
        .unwrap_or_else(|e| panic!("Failed to read commit {name}: {e}"))
}

#[rstest]
fn commit_records_tree_and_message(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    add_file(dir, "file.txt", "hello");

    kit_commit(dir, "first", "2024-03-09 10:00:00 +0000")
        .assert()
        .success()
        .stdout("Created commit 2024-03-09T10-00-00\n");

    assert_eq!(stored_commits(dir), vec!["2024-03-09T10-00-00"]);
    assert_eq!(
        read_commit(dir, "2024-03-09T10-00-00"),
        "tree db6db2bf01f553580ac5ef479e8a6c98bccf536c\n\nfirst\n"
    );

    Ok(())
}

#[rstest]
fn commit_covers_objects_added_before_the_previous_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    add_file(dir, "a.txt", "A");
    kit_commit(dir, "add a", "2024-03-09 10:00:00 +0000")
        .assert()
        .success();

    add_file(dir, "b.txt", "B");
    kit_commit(dir, "add b", "2024-03-09 10:00:05 +0000")
        .assert()
        .success();

    assert_eq!(stored_objects(dir).len(), 2);
    assert_eq!(
        read_commit(dir, "2024-03-09T10-00-00"),
        format!("tree {}\n\nadd a\n", expected_tree_digest(&[b"A"]))
    );
    assert_eq!(
        read_commit(dir, "2024-03-09T10-00-05"),
        format!("tree {}\n\nadd b\n", expected_tree_digest(&[b"A", b"B"]))
    );

    Ok(())
}

#[rstest]
fn repeated_commits_share_the_tree_line(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    add_file(dir, "file.txt", "stable");

    kit_commit(dir, "snapshot", "2024-03-09 10:00:00 +0000")
        .assert()
        .success();
    kit_commit(dir, "snapshot", "2024-03-09 10:00:01 +0000")
        .assert()
        .success();

    let commits = stored_commits(dir);
    assert_eq!(commits.len(), 2);
    assert_eq!(read_commit(dir, &commits[0]), read_commit(dir, &commits[1]));

    Ok(())
}

#[rstest]
fn commit_of_an_empty_store(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    kit_commit(dir, "nothing yet", "2024-03-09 10:00:00 +0000")
        .assert()
        .success();

    assert_eq!(
        read_commit(dir, "2024-03-09T10-00-00"),
        format!("tree {EMPTY_DIGEST}\n\nnothing yet\n")
    );

    Ok(())
}

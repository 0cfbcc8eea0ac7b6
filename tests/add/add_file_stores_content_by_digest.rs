use crate::common::command::{init_repository_dir, kit_dir, run_kit_command, stored_objects};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use crate::common::sha1_hex;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_file_stores_content_by_digest(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("file.txt"), "hello".to_string()));

    run_kit_command(dir, &["add", "file.txt"])
        .assert()
        .success()
        .stdout("");

    let object_path = kit_dir(dir)
        .join("objects")
        .join("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
    assert_eq!(std::fs::read(object_path)?, b"hello");
    assert_eq!(stored_objects(dir).len(), 1);

    Ok(())
}

#[rstest]
fn add_multiple_files_in_one_call(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let files = write_generated_files(dir, 4);

    let mut cmd = run_kit_command(dir, &["add"]);
    for file in &files {
        cmd.arg(&file.path);
    }
    cmd.assert().success();

    let mut expected = files
        .iter()
        .map(|file| sha1_hex(file.content.as_bytes()))
        .collect::<Vec<_>>();
    expected.sort();
    expected.dedup();
    assert_eq!(stored_objects(dir), expected);

    for file in &files {
        let object_path = kit_dir(dir)
            .join("objects")
            .join(sha1_hex(file.content.as_bytes()));
        assert_eq!(std::fs::read_to_string(object_path)?, file.content);
    }

    Ok(())
}

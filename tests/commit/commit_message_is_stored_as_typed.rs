use crate::common::command::{init_repository_dir, kit_dir, run_kit_command, stored_commits};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(&["-1", "off", "by", "one"], "-1 off by one")]
#[case(&["  padded", ""], "  padded ")]
fn commit_message_is_stored_as_typed(
    init_repository_dir: TempDir,
    #[case] words: &[&str],
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    let mut args = vec!["commit"];
    args.extend_from_slice(words);
    run_kit_command(dir, &args)
        .env("KIT_COMMIT_DATE", "2024-03-09 10:00:00 +0000")
        .assert()
        .success()
        .stdout("Created commit 2024-03-09T10-00-00\n");

    assert_eq!(stored_commits(dir), vec!["2024-03-09T10-00-00"]);
    let body = std::fs::read_to_string(kit_dir(dir).join("commits").join("2024-03-09T10-00-00"))?;
    assert_eq!(
        body.split_once("\n\n").map(|(_, message)| message.to_string()),
        Some(format!("{expected}\n"))
    );

    Ok(())
}

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_LOG");
    cmd
}

pub fn init_journal(path: &Path) {
    moodlog_cmd().arg("init").arg(path).assert().success();
}

/// Run one record invocation for `date`, feeding `answers` as stdin lines.
/// Returns stdout.
pub fn record_on(path: &Path, date: &str, answers: &[&str]) -> String {
    let mut stdin = answers.join("\n");
    stdin.push('\n');

    let output = moodlog_cmd()
        .current_dir(path)
        .arg(date)
        .write_stdin(stdin)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "record on {} failed: {}",
        date,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

pub fn prompt_count(stdout: &str) -> usize {
    stdout.matches("Enter your mood: ").count()
}

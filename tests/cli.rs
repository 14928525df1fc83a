#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fcqs_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("fcqs"));
    cmd.env_remove("FCQS_NOTES_FILE")
        .env_remove("FCQS_CONTENTS_NO_TITLE")
        .env_remove("FCQS_LOG");
    cmd
}

/// `fcqs` reading the main notes fixture.
fn fcqs_notes() -> Command {
    let mut cmd = fcqs_cmd();
    cmd.env("FCQS_NOTES_FILE", fixture("notes.md"));
    cmd
}

#[test]
fn test_lists_titles() {
    fcqs_notes()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "title\nLong title and contents have lines\n",
        ))
        .stdout(predicate::str::ends_with("URL\ncommand-line\ncommand-line with $\n"))
        .stdout(predicate::str::contains("No contents near EOF").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_writes_contents() {
    fcqs_notes()
        .arg("Long title and contents have lines")
        .assert()
        .success()
        .stdout("# Long title and contents have lines\n\nline 1\n\nline 2\n");
}

#[test]
fn test_notitle_flag_and_env() {
    fcqs_notes()
        .args(["-t", "title"])
        .assert()
        .success()
        .stdout("contents\n");

    fcqs_notes()
        .env("FCQS_CONTENTS_NO_TITLE", "")
        .arg("title")
        .assert()
        .success()
        .stdout("contents\n");
}

#[test]
fn test_first_url() {
    fcqs_notes()
        .args(["-u", "URL"])
        .assert()
        .success()
        .stdout("http://github.com/yendo/fcqs/\n");
}

#[test]
fn test_first_command_block() {
    fcqs_notes()
        .args(["--command", "command-line"])
        .assert()
        .success()
        .stdout("ls -l | nl\n");

    fcqs_notes()
        .args(["-c", "command-line with $"])
        .assert()
        .success()
        .stdout("date\n");
}

#[test]
fn test_location_across_files() {
    let files = env::join_paths([fixture("location.md"), fixture("location_extra.md")]).unwrap();
    fcqs_cmd()
        .env("FCQS_NOTES_FILE", &files)
        .args(["-l", "5th Line"])
        .assert()
        .success()
        .stdout(format!(
            "{:?} 5\n{:?} 13\n",
            fixture("location.md").display().to_string(),
            fixture("location_extra.md").display().to_string()
        ));
}

#[test]
fn test_titles_across_files() {
    let files = env::join_paths([fixture("location.md"), fixture("location_extra.md")]).unwrap();
    fcqs_cmd()
        .env("FCQS_NOTES_FILE", &files)
        .assert()
        .success()
        .stdout("location test data\n5th Line\nother 5th Line\n9th Line\n");
}

#[test]
fn test_lookup_without_title_fails() {
    for flag in ["-u", "-c", "-l"] {
        fcqs_notes()
            .arg(flag)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "Error: invalid number of arguments",
            ));
    }
}

#[test]
fn test_two_titles_fail() {
    fcqs_notes()
        .args(["title", "URL"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number of arguments"));
}

#[test]
fn test_conflicting_flags_fail() {
    fcqs_notes().args(["-u", "-l", "URL"]).assert().failure();
}

#[test]
fn test_missing_notes_file() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("not_exists.md");

    fcqs_cmd()
        .env("FCQS_NOTES_FILE", &missing)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "Error: notes file: {}:",
            missing.display()
        )));
}

#[test]
fn test_missing_second_file_fails_before_output() {
    let temp = TempDir::new().unwrap();
    let files = env::join_paths([fixture("notes.md"), temp.path().join("gone.md")]).unwrap();

    fcqs_cmd()
        .env("FCQS_NOTES_FILE", &files)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("gone.md"));
}

#[test]
fn test_empty_title_is_ignored() {
    fcqs_notes().arg("").assert().success().stdout("");
    fcqs_notes().args(["-c", " "]).assert().success().stdout("");
}

#[test]
fn test_unknown_title_writes_nothing() {
    fcqs_notes()
        .arg("no such note")
        .assert()
        .success()
        .stdout("");
}

#[cfg(unix)]
#[test]
fn test_default_notes_file_in_home() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("fcnotes.md"), "# home note\n\nfrom home\n").unwrap();

    fcqs_cmd()
        .env("HOME", home.path())
        .arg("home note")
        .assert()
        .success()
        .stdout("# home note\n\nfrom home\n");
}

#[test]
fn test_version() {
    fcqs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(env!("CARGO_PKG_VERSION")));

    fcqs_cmd()
        .env("FCQS_NOTES_FILE", "/nonexistent/notes.md")
        .arg("-v")
        .assert()
        .success();
}

#[test]
fn test_bash_script() {
    fcqs_cmd()
        .env("FCQS_NOTES_FILE", "/nonexistent/notes.md")
        .arg("--bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("bind -x"))
        .stdout(predicate::str::contains("fzf"));
}

#[test]
fn test_debug_log_goes_to_stderr() {
    fcqs_notes()
        .env("FCQS_LOG", "debug")
        .arg("title")
        .assert()
        .success()
        .stdout("# title\n\ncontents\n")
        .stderr(predicate::str::contains("extracted contents"));
}

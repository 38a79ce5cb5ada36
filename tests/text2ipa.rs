//! Integration tests for the `text2ipa` binary.

#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn text2ipa() -> Command {
    Command::cargo_bin("text2ipa").unwrap()
}

#[test]
fn requires_text_or_file() {
    text2ipa().assert().failure().code(2);
}

#[test]
fn fallback_converts_word_by_word() {
    text2ipa()
        .arg("--cmudict")
        .arg(fixture("cmudict-sample.dict"))
        .args(["--text", "best kept secret of"])
        .assert()
        .success()
        .stdout("bɛst kɛpt sikɹʌt ʌv\n");
}

#[test]
fn primary_lexicon_wins_when_it_knows_every_word() {
    text2ipa()
        .arg("--lexicon")
        .arg(fixture("ipa-lexicon-sample.txt"))
        .arg("--cmudict")
        .arg(fixture("cmudict-sample.dict"))
        .args(["--text", "Best kept secret"])
        .assert()
        .success()
        .stdout("ˈbɛst ˈkɛpt ˈsikɹɪt\n");
}

#[test]
fn primary_miss_falls_back() {
    text2ipa()
        .arg("--lexicon")
        .arg(fixture("ipa-lexicon-sample.txt"))
        .arg("--cmudict")
        .arg(fixture("cmudict-sample.dict"))
        .args(["--text", "break the ice", "--debug"])
        .assert()
        .success()
        .stdout("bɹeɪk ðʌ aɪs\n")
        .stderr(predicate::str::contains("[debug] lexicon: no result"));
}

#[test]
fn unknown_words_are_kept() {
    text2ipa()
        .arg("--cmudict")
        .arg(fixture("cmudict-sample.dict"))
        .args(["--text", "best zyzzyva"])
        .assert()
        .success()
        .stdout("bɛst zyzzyva\n");
}

#[test]
fn separator_option() {
    text2ipa()
        .arg("--cmudict")
        .arg(fixture("cmudict-sample.dict"))
        .args(["--text", "best kept", "--sep", " · "])
        .assert()
        .success()
        .stdout("bɛst · kɛpt\n");
}

#[test]
fn file_mode_converts_each_non_blank_line() {
    let tmp = TempDir::new().unwrap();
    let phrases = tmp.path().join("phrases.txt");
    fs::write(&phrases, "best kept\n\n   \nbreak the ice\n").unwrap();

    text2ipa()
        .arg("--cmudict")
        .arg(fixture("cmudict-sample.dict"))
        .arg("--file")
        .arg(&phrases)
        .assert()
        .success()
        .stdout("bɛst kɛpt\nbɹeɪk ðʌ aɪs\n");
}

#[test]
fn file_mode_warns_when_empty() {
    let tmp = TempDir::new().unwrap();
    let phrases = tmp.path().join("phrases.txt");
    fs::write(&phrases, "\n  \n").unwrap();

    text2ipa()
        .arg("--cmudict")
        .arg(fixture("cmudict-sample.dict"))
        .arg("--file")
        .arg(&phrases)
        .assert()
        .success()
        .stderr(predicate::str::contains("[warn] No non-empty lines found."));
}

#[test]
fn missing_file_is_an_error() {
    let tmp = TempDir::new().unwrap();

    text2ipa()
        .arg("--cmudict")
        .arg(fixture("cmudict-sample.dict"))
        .arg("--file")
        .arg(tmp.path().join("nope.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("[error] File not found:"));
}

#[test]
fn no_dictionary_is_an_error() {
    text2ipa()
        .args(["--text", "hello"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("[error] no fallback dictionary"));
}

//! Command-line behavior of the `phage-matcher` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn matcher() -> Command {
    Command::cargo_bin("phage-matcher").unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_writes_match_table() {
    let dir = TempDir::new().unwrap();
    let phage = write(&dir, "phages.fa", ">phage one\nACGGTC\nATTGCA\n");
    let host = write(&dir, "hosts.fa", ">host\nTTACGGTCATTGCATT\n");
    let output = dir.path().join("matches.csv");

    matcher()
        .args(["-k", "6", arg(&phage), arg(&host), arg(&output)])
        .assert()
        .success();

    let table = fs::read_to_string(&output).unwrap();
    assert_eq!(
        table,
        format!(
            "{},{}\nphage one:1-12,host:3-14\n",
            phage.display(),
            host.display()
        )
    );
}

#[test]
fn test_default_kmer_length_skips_short_sequences() {
    let dir = TempDir::new().unwrap();
    let phage = write(&dir, "phages.fa", ">phage\nACGGTCATTGCA\n");
    let host = write(&dir, "hosts.fa", ">host\nTTACGGTCATTGCATT\n");
    let output = dir.path().join("matches.csv");

    matcher()
        .args([arg(&phage), arg(&host), arg(&output)])
        .assert()
        .success();

    let table = fs::read_to_string(&output).unwrap();
    assert_eq!(table.lines().count(), 1);
}

#[test]
fn test_invalid_kmer_length_fails() {
    let dir = TempDir::new().unwrap();
    let phage = write(&dir, "phages.fa", ">phage\nACGT\n");
    let host = write(&dir, "hosts.fa", ">host\nACGT\n");
    let output = dir.path().join("matches.csv");

    for k in ["0", "33"] {
        matcher()
            .args(["-k", k, arg(&phage), arg(&host), arg(&output)])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid k-mer length"));
    }
    assert!(!output.exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let host = write(&dir, "hosts.fa", ">host\nACGT\n");
    let missing = dir.path().join("missing.fa");
    let output = dir.path().join("matches.csv");

    matcher()
        .args([arg(&missing), arg(&host), arg(&output)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to load phage FASTA"));
    assert!(!output.exists());
}

#[test]
fn test_missing_arguments_fail() {
    matcher()
        .arg("phages.fa")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    matcher()
        .args(["-v", "-q", "a.fa", "b.fa", "out.csv"])
        .assert()
        .failure();
}

#[test]
fn test_quiet_suppresses_progress() {
    let dir = TempDir::new().unwrap();
    let phage = write(&dir, "phages.fa", ">phage\nACGGTCATTGCA\n");
    let host = write(&dir, "hosts.fa", ">host\nTTACGGTCATTGCATT\n");
    let output = dir.path().join("matches.csv");

    matcher()
        .args(["-q", "-k", "6", arg(&phage), arg(&host), arg(&output)])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_empty_inputs_give_header_only() {
    let dir = TempDir::new().unwrap();
    let phage = write(&dir, "phages.fa", "");
    let host = write(&dir, "hosts.fa", ">host\nACGTACGT\n");
    let output = dir.path().join("matches.csv");

    matcher()
        .args(["-k", "4", arg(&phage), arg(&host), arg(&output)])
        .assert()
        .success();

    let table = fs::read_to_string(&output).unwrap();
    assert_eq!(table, format!("{},{}\n", phage.display(), host.display()));
}

#[test]
fn test_reverse_hit_has_descending_host_range() {
    let dir = TempDir::new().unwrap();
    let phage = write(&dir, "phages.fa", ">phage\nACGGTCATTGCA\n");
    let host = write(&dir, "hosts.fa", ">host\nGGGTGCAATGACCGTAA\n");
    let output = dir.path().join("matches.csv");

    matcher()
        .args(["-k", "6", arg(&phage), arg(&host), arg(&output)])
        .assert()
        .success();

    let table = fs::read_to_string(&output).unwrap();
    assert!(table.ends_with("\nphage:1-12,host:15-4\n"));
}

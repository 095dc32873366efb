use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kmer_jaccard"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Could not run kmer_jaccard")
}

fn write_kmers(dir: &Path) {
    fs::write(dir.join("a.txt"), "AAA\nCCC\nGGG\n").unwrap();
    fs::write(dir.join("b.txt"), "CCC\nGGG\nTTT\nACG\n").unwrap();
}

#[test]
fn jaccard_to_stdout() {
    let tmp = TempDir::new().unwrap();
    write_kmers(tmp.path());
    let out = run(tmp.path(), &["a.txt", "b.txt"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "0.4");
}

#[test]
fn jaccard_to_file() {
    let tmp = TempDir::new().unwrap();
    write_kmers(tmp.path());
    let out = run(tmp.path(), &["a.txt", "b.txt", "--output", "j.txt"]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(tmp.path().join("j.txt")).unwrap().trim(),
        "0.4"
    );
}

#[test]
fn missing_kmer_file_fails() {
    let tmp = TempDir::new().unwrap();
    write_kmers(tmp.path());
    let out = run(tmp.path(), &["a.txt", "missing.txt"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn one_argument_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    write_kmers(tmp.path());
    let out = run(tmp.path(), &["a.txt"]);
    assert_eq!(out.status.code(), Some(1));
}

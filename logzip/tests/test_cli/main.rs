use std::fs;
use std::path::Path;
use std::process::Output;

use assert_cmd::Command;
use tempfile::tempdir;

const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog";

fn write_file(dir: &Path, name: &str, data: &[u8]) {
    fs::write(dir.join(name), data).unwrap();
}

fn run_logzip(args: &[&str]) -> Output {
    Command::cargo_bin("logzip")
        .unwrap()
        .args(args)
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn reports_compressed_file_count() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.log", SAMPLE_TEXT.as_bytes());
    write_file(dir.path(), "b.log", b"b");
    write_file(dir.path(), "c.log", b"c");

    let output = run_logzip(&["-p", dir.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Compression was finished. Number of compressed files: 3\n"
    );
    assert!(dir.path().join("a.log.gz").exists());
    assert!(dir.path().join("a.log").exists());
}

#[test]
fn empty_directory_exits_with_one() {
    let dir = tempdir().unwrap();

    let output = run_logzip(&["-p", dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "No logs found.\n");
}

#[test]
fn missing_path_exits_with_two() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nonexistent");

    let output = run_logzip(&["-p", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout_of(&output),
        format!(
            "Path not found. The path that caused this: '{}'\n",
            missing.display()
        )
    );
}

#[test]
fn missing_path_aborts_valid_roots_listed_first() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.log", b"a");
    let missing = dir.path().join("nonexistent");

    let output = run_logzip(&[
        "-p",
        dir.path().to_str().unwrap(),
        missing.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("a.log.gz").exists());
}

#[test]
fn delete_flag_removes_originals() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.log", SAMPLE_TEXT.as_bytes());

    let output = run_logzip(&["-d", "-p", dir.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert!(!dir.path().join("a.log").exists());
    assert!(dir.path().join("a.log.gz").exists());
}

#[test]
fn recursive_flag_descends_into_subdirs() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.log", b"a");

    let sub = dir.path().join("nested");
    fs::create_dir(&sub).unwrap();
    write_file(&sub, "b.log", b"b");

    // Without -r only the top level is compressed
    let output = run_logzip(&["-p", dir.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Compression was finished. Number of compressed files: 1\n"
    );
    assert!(!sub.join("b.log.gz").exists());

    let output = run_logzip(&["-r", "-p", dir.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(sub.join("b.log.gz").exists());
}

#[test]
fn multiple_paths_are_all_processed() {
    let base = tempdir().unwrap();
    let one = base.path().join("one");
    let two = base.path().join("two");
    fs::create_dir(&one).unwrap();
    fs::create_dir(&two).unwrap();
    write_file(&one, "a.log", b"a");
    write_file(&two, "b.log", b"b");

    let output = run_logzip(&["-p", one.to_str().unwrap(), two.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Compression was finished. Number of compressed files: 2\n"
    );
    assert!(one.join("a.log.gz").exists());
    assert!(two.join("b.log.gz").exists());
}

#[test]
fn boundary_levels_are_accepted() {
    for level in ["1", "9"] {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "a.log", SAMPLE_TEXT.as_bytes());

        let output = run_logzip(&["-c", level, "-p", dir.path().to_str().unwrap()]);

        assert!(output.status.success());
        assert!(dir.path().join("a.log.gz").exists());
    }
}

#[test]
fn out_of_range_levels_are_usage_errors() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.log", b"a");

    for level in ["0", "10"] {
        let output = run_logzip(&["-c", level, "-p", dir.path().to_str().unwrap()]);

        assert!(!output.status.success());
        // Rejected at parse time: nothing is compressed
        assert!(!dir.path().join("a.log.gz").exists());
    }
}

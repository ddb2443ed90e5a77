//! Test suite for the command layer: exit codes and dump loading.

use ipaclones::commands;
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

fn write_dump(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("test.ipa-clones");
    let mut file = File::create(&path).unwrap();
    write!(file, "{content}").unwrap();
    path
}

#[test]
fn test_spawns_known_symbol_exits_zero() {
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;isra\n");
    assert_eq!(commands::run_spawns(&path, "f", true).unwrap(), 0);
}

#[test]
fn test_spawns_unknown_symbol_exits_one() {
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;isra\n");
    assert_eq!(commands::run_spawns(&path, "nonexistent", true).unwrap(), 1);
}

#[test]
fn test_removed_is_a_predicate() {
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "Callgraph removal;f;3;a.c;1;1\n");
    assert_eq!(commands::run_removed(&path, "f", true).unwrap(), 0);
    assert_eq!(commands::run_removed(&path, "nonexistent", true).unwrap(), 1);
}

#[test]
fn test_stats_runs() {
    let dir = tempdir().unwrap();
    let path = write_dump(&dir, "Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;isra\n");
    assert_eq!(commands::run_stats(&path, false).unwrap(), 0);
}

#[test]
fn test_load_failure_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.ipa-clones");
    assert!(commands::run_stats(&missing, true).is_err());
}

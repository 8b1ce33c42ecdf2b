use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::process::Command;

use confgen::{GeneratorSettings, NodeFile, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

/// Names of all entries in `dir`, sorted.
fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn run_binary(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cluster-confgen"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

// ============================================================================
// Library tests
// ============================================================================

#[test]
fn test_two_node_cluster() {
    let dir = tempdir().unwrap();
    let settings = GeneratorSettings::default().with_output_dir(dir.path());
    let mut rng = StdRng::seed_from_u64(100);

    generate(&settings, ["127.0.0.1:9090", "127.0.0.1:9091"], &mut rng).unwrap();
    assert_eq!(dir_listing(dir.path()), vec!["node0.conf", "node1.conf"]);

    let node0 = fs::read_to_string(dir.path().join("node0.conf")).unwrap();
    let node1 = fs::read_to_string(dir.path().join("node1.conf")).unwrap();

    let lines0: Vec<&str> = node0.lines().collect();
    let lines1: Vec<&str> = node1.lines().collect();
    assert_eq!(lines0[0], "# node0 configuration file");
    assert_eq!(lines1[0], "# node1 configuration file");
    assert!(lines0[1].ends_with("\t1"));
    assert!(lines0[2].ends_with("\t0"));
    assert!(lines1[1].ends_with("\t0"));
    assert!(lines1[2].ends_with("\t1"));

    let ids = |lines: &[&str]| -> Vec<String> {
        lines[1..]
            .iter()
            .map(|l| l.split('\t').nth(2).unwrap().to_string())
            .collect()
    };
    let ids0 = ids(&lines0[..]);
    assert_eq!(ids0, ids(&lines1[..]));
    assert_ne!(ids0[0], ids0[1]);
}

#[test]
fn test_every_file_lists_full_roster() {
    let dir = tempdir().unwrap();
    let settings = GeneratorSettings::default().with_output_dir(dir.path());
    let mut rng = StdRng::seed_from_u64(101);
    let endpoints = ["10.0.0.1:7000", "10.0.0.2:7001", "db.local:7002", "10.0.0.4:7003"];

    generate(&settings, endpoints, &mut rng).unwrap();

    let mut first_ids: Option<Vec<String>> = None;
    for idx in 0..endpoints.len() {
        let path = dir.path().join(format!("node{}.conf", idx));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), endpoints.len() + 1);

        let parsed = NodeFile::read(&path).unwrap();
        let self_lines: Vec<usize> = parsed
            .lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_self)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(self_lines, vec![idx]);

        for (line, endpoint) in parsed.lines.iter().zip(endpoints) {
            let (host, port) = endpoint.split_once(':').unwrap();
            assert_eq!(line.host, host);
            assert_eq!(line.port, port);
            assert_eq!(line.node_id.len(), 32);
            assert!(line.node_id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }

        let ids: Vec<String> = parsed.lines.iter().map(|l| l.node_id.clone()).collect();
        match &first_ids {
            Some(expected) => assert_eq!(&ids, expected),
            None => {
                let unique: HashSet<&String> = ids.iter().collect();
                assert_eq!(unique.len(), ids.len());
                first_ids = Some(ids);
            }
        }
    }
}

#[test]
fn test_rerun_replaces_previous_files() {
    let dir = tempdir().unwrap();
    let settings = GeneratorSettings::default().with_output_dir(dir.path());
    let mut rng = StdRng::seed_from_u64(102);

    generate(&settings, ["a:1", "b:2", "c:3"], &mut rng).unwrap();
    generate(&settings, ["d:4"], &mut rng).unwrap();

    assert_eq!(dir_listing(dir.path()), vec!["node0.conf"]);
    let content = fs::read_to_string(dir.path().join("node0.conf")).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("d\t4\t"));
}

#[test]
fn test_no_endpoints_clears_everything() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("node0.conf"), "old").unwrap();
    fs::write(dir.path().join("unrelated.conf"), "old").unwrap();
    fs::write(dir.path().join("README"), "keep").unwrap();

    let settings = GeneratorSettings::default().with_output_dir(dir.path());
    let mut rng = StdRng::seed_from_u64(103);
    let written = generate(&settings, Vec::<String>::new(), &mut rng).unwrap();

    assert!(written.is_empty());
    assert_eq!(dir_listing(dir.path()), vec!["README"]);
}

// ============================================================================
// Binary tests
// ============================================================================

#[test]
fn test_binary_writes_files_in_working_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("stale.conf"), "old").unwrap();

    let output = run_binary(dir.path(), &["127.0.0.1:9090", "127.0.0.1:9091"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(dir_listing(dir.path()), vec!["node0.conf", "node1.conf"]);
}

#[test]
fn test_binary_without_arguments_succeeds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("node3.conf"), "old").unwrap();

    let output = run_binary(dir.path(), &[]);
    assert!(output.status.success());
    assert!(dir_listing(dir.path()).is_empty());
}

#[test]
fn test_binary_rejects_malformed_endpoint() {
    let dir = tempdir().unwrap();

    let output = run_binary(dir.path(), &["badhost"]);
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(dir_listing(dir.path()).is_empty());
}

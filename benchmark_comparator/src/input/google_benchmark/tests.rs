//!
//! Tests for the JSON sample batches.
//!

use std::path::Path;

use crate::issue::Issue;

use super::Batch;

#[test]
fn samples() {
    let batch: Batch = serde_json::from_str(
        r#"{
            "context": { "date": "2025-06-01T10:00:00+00:00", "num_cpus": 8 },
            "benchmarks": [
                { "name": "BM_ToString/Color", "run_type": "iteration", "real_time": 10.5, "cpu_time": 10.4, "time_unit": "ns" },
                { "name": "BM_ToString/Flags", "real_time": 12 }
            ]
        }"#,
    )
    .expect("Always valid");

    let (samples, issues) = batch.samples(Path::new("bench/run_1.json"));

    assert!(issues.is_empty(), "{issues:?}");
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].name, "BM_ToString/Color");
    assert_eq!(samples[0].real_time, 10.5);
    assert_eq!(samples[1].real_time, 12.0);
}

#[test]
fn malformed_entries_are_skipped() {
    let batch: Batch = serde_json::from_str(
        r#"{ "benchmarks": [
            { "name": "BM_A", "real_time": "fast" },
            { "real_time": 3 },
            { "name": "BM_B", "real_time": 4 },
            42
        ] }"#,
    )
    .expect("Always valid");

    let (samples, issues) = batch.samples(Path::new("run.json"));

    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].name, "BM_B");
    assert_eq!(issues.len(), 3);
    assert!(matches!(issues[0], Issue::MalformedSample { index: 0, .. }));
    assert!(matches!(issues[2], Issue::MalformedSample { index: 3, .. }));
}

#[test]
fn malformed_documents() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let broken = directory.path().join("broken.json");
    let shapeless = directory.path().join("shapeless.json");
    std::fs::write(broken.as_path(), "{ \"benchmarks\": [").expect("Always valid");
    std::fs::write(shapeless.as_path(), "[1, 2, 3]").expect("Always valid");

    assert!(matches!(
        Batch::try_from(broken.as_path()),
        Err(Issue::MalformedDocument { .. })
    ));
    assert!(matches!(
        Batch::try_from(shapeless.as_path()),
        Err(Issue::MalformedDocument { .. })
    ));
    assert!(matches!(
        Batch::try_from(directory.path().join("absent.json").as_path()),
        Err(Issue::MalformedDocument { .. })
    ));
}

#[test]
fn discover() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    for name in ["b.json", "a.json", "notes.txt"] {
        std::fs::write(directory.path().join(name), "{}").expect("Always valid");
    }

    let paths = Batch::discover(directory.path()).expect("Always valid");

    assert_eq!(
        paths,
        vec![directory.path().join("a.json"), directory.path().join("b.json")]
    );
}

#[test]
fn discover_with_pattern_characters_in_path() {
    let root = tempfile::tempdir().expect("Temporary directory");
    let directory = root.path().join("perf[old]");
    std::fs::create_dir_all(directory.as_path()).expect("Always valid");
    std::fs::write(directory.join("a.json"), "{}").expect("Always valid");
    std::fs::create_dir_all(root.path().join("perfo")).expect("Always valid");
    std::fs::write(root.path().join("perfo/b.json"), "{}").expect("Always valid");

    let paths = Batch::discover(directory.as_path()).expect("Always valid");

    assert_eq!(paths, vec![directory.join("a.json")]);
}

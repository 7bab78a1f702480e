#![cfg(test)]
use std::path::PathBuf;

use ipsift_common::config::Config;
use ipsift_common::error::{FileOp, PipelineError};
use ipsift_core::document::Document;
use ipsift_core::{extract, pipeline, store};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn scratch_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ipsift-e2e-{tag}-{}.json", std::process::id()))
}

/// Runs the whole pipeline with a seeded generator into a buffer and checks
/// the external contract: sorted, duplicate-free output and no artifact left
/// behind.
#[test]
fn full_run_prints_sorted_unique_addresses_and_removes_artifact() {
    let cfg = Config {
        artifact: scratch_path("full-run"),
    };
    let mut rng = StdRng::seed_from_u64(7);
    let mut out: Vec<u8> = Vec::new();

    let result = pipeline::run(&cfg, &mut rng, &mut out);
    assert!(result.is_ok(), "pipeline failed: {:?}", result.err());
    assert!(!cfg.artifact.exists(), "artifact left behind after a clean run");

    let printed = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = printed.lines().collect();
    assert!(!lines.is_empty() && lines.len() <= 10, "got {} lines", lines.len());

    let mut expected = lines.clone();
    expected.sort_unstable();
    expected.dedup();
    assert_eq!(lines, expected, "output must be sorted and duplicate-free");
}

/// Single-element document persisted, reloaded and extracted: the two
/// addresses come back in lexicographic order and the file is gone at the
/// end.
#[test]
fn single_address_document_round_trips_end_to_end() {
    let path = scratch_path("single");
    let doc = Document {
        private_addresses: vec!["10.0.0.1".into()],
        public_addresses: vec!["8.8.8.8".into()],
    };

    let text = doc.to_text().unwrap();
    store::persist(&path, &text).unwrap();
    let raw = store::reload(&path).unwrap();

    assert_eq!(Document::parse(&raw).unwrap(), doc);
    // Lexicographic order: '1' < '8'.
    assert_eq!(extract::extract(&raw), vec!["10.0.0.1", "8.8.8.8"]);

    store::remove(&path).unwrap();
    assert!(!path.exists());
}

#[test]
fn persist_failure_aborts_before_any_output() {
    let cfg = Config {
        artifact: PathBuf::from("/nonexistent-ipsift-dir/ips.json"),
    };
    let mut rng = StdRng::seed_from_u64(7);
    let mut out: Vec<u8> = Vec::new();

    let err = pipeline::run(&cfg, &mut rng, &mut out).unwrap_err();
    match err {
        PipelineError::Io { op, ref path, .. } => {
            assert_eq!(op, FileOp::Write);
            assert_eq!(path, &cfg.artifact);
        }
        ref other => panic!("expected a write failure, got: {other}"),
    }
    assert!(err.to_string().contains("write"), "got: {err}");
    assert!(out.is_empty(), "no addresses may be printed on failure");
}

/// Output sink that rejects every write, forcing a failure after the
/// artifact has been persisted.
struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A failure after persistence leaves the artifact on disk: cleanup only
/// runs as the final stage of a successful run.
#[test]
fn failure_after_persist_leaves_the_artifact_behind() {
    let cfg = Config {
        artifact: scratch_path("leftover"),
    };
    let mut rng = StdRng::seed_from_u64(7);

    let err = pipeline::run(&cfg, &mut rng, &mut BrokenPipe).unwrap_err();
    assert!(matches!(err, PipelineError::Output(_)), "got: {err}");
    assert!(cfg.artifact.exists(), "artifact must survive a late failure");

    store::remove(&cfg.artifact).unwrap();
}

use std::path::PathBuf;

use scanlens::core::ProjectSnapshot;
use scanlens::io::load_snapshot;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/project_snapshot.json")
}

#[allow(dead_code)]
pub fn load_fixture() -> ProjectSnapshot {
    load_snapshot(&fixture_path()).expect("fixture snapshot should load")
}

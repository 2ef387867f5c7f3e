//! Shared helpers for the workspace-level integration tests.

use std::path::PathBuf;

/// Path of a fixture under `tests/testdata`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("testdata");
    path.push(name);
    path
}

/// Read a fixture file into a string.
pub fn read_fixture(name: &str) -> std::io::Result<String> {
    std::fs::read_to_string(fixture_path(name))
}

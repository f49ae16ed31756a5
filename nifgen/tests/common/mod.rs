//! Shared helpers for `nifgen` integration tests.

use camino::Utf8PathBuf;

/// Absolute path of a file under `tests/fixtures`.
pub(crate) fn fixture(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Contents of a golden file under `tests/fixtures/expected`.
pub(crate) fn expected(name: &str) -> String {
    let path = fixture("expected").join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("read golden {path}: {err}"))
}

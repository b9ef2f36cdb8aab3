//! Test helpers for writing catalog files and capturing command output.

use camino::{Utf8Path, Utf8PathBuf};
use sojourn_core::{Catalog, SiteRecord};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// A temporary directory addressed through UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `catalog` as a JSON record array and return its path.
    pub(super) fn write_catalog(&self, name: &str, catalog: &Catalog) -> Utf8PathBuf {
        let records: Vec<SiteRecord> = catalog.to_records();
        let payload = serde_json::to_vec_pretty(&records).expect("serialise catalog");
        let path = self.path(name);
        write_utf8(&path, &payload);
        path
    }
}

/// Decode captured output as UTF-8.
pub(super) fn output_text(buffer: &[u8]) -> String {
    String::from_utf8(buffer.to_vec()).expect("stdout utf-8")
}

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use doxygraph::{ExportSettings, SymbolModel};

pub fn fixture_root(case: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(case)
}

pub fn open_fixture(case: &str) -> SymbolModel {
    SymbolModel::open(&ExportSettings::new(fixture_root(case))).expect("fixture export loads")
}

/// Write `files` into a fresh directory under the system temp dir.
pub fn write_export(
    tag: &str,
    files: &[(&str, &str)],
) -> PathBuf {
    let root = std::env::temp_dir().join(format!(
        "doxygraph-it-{tag}-{}",
        std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).expect("clock drift").as_nanos()
    ));
    std::fs::create_dir_all(&root).expect("create temp export");
    for (name, text) in files {
        std::fs::write(root.join(name), text).expect("write export file");
    }
    root
}

pub fn remove(root: &Path) {
    let _ = std::fs::remove_dir_all(root);
}

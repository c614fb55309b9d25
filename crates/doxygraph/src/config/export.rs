use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;

pub const DEFAULT_INDEX_FILE: &str = "index.xml";

/// Where the XML export lives. Satellite documents are read from the same
/// directory as the root index.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub root: PathBuf,
    pub index_file: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            index_file: DEFAULT_INDEX_FILE.to_owned(),
        }
    }
}

impl ExportSettings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }

    pub(crate) fn apply_patch(
        &mut self,
        patch: ExportSettingsPatch,
    ) {
        if let Some(v) = patch.root {
            self.root = v;
        }
        if let Some(v) = patch.index_file {
            self.index_file = v;
        }
    }

    /// Trim the index file name; a blank name falls back to the default.
    /// Run again after overriding fields by hand.
    pub fn normalize(&mut self) {
        self.index_file = self.index_file.trim().to_owned();
        if self.index_file.is_empty() {
            self.index_file = DEFAULT_INDEX_FILE.to_owned();
        }
    }

    pub(crate) fn rebase(
        &mut self,
        base: &Path,
    ) {
        if self.root.is_relative() {
            self.root = base.join(&self.root);
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ExportSettingsPatch {
    pub(crate) root: Option<PathBuf>,
    pub(crate) index_file: Option<String>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, toml::Value>,
}

//! Settings for one run, read from `doxygraph.toml`.
//!
//! Each category lives in its own file with a `*Patch` type holding only the
//! keys a file actually sets. [`Settings`] applies patches over defaults and
//! normalizes the result.

mod export;
mod logging;
mod outline;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

pub use export::{DEFAULT_INDEX_FILE, ExportSettings};
use export::ExportSettingsPatch;
use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
pub use outline::{OutlineFormat, OutlineSettings};
use outline::OutlineSettingsPatch;
use serde::Deserialize;

use crate::error::{Error, Result};

pub const SETTINGS_FILENAME: &str = "doxygraph.toml";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub export: ExportSettings,
    pub logging: LoggingSettings,
    pub outline: OutlineSettings,
}

impl Settings {
    /// Parse settings text. Relative paths are kept as written.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        let patch: SettingsPatch = toml::from_str(text)?;
        let mut settings = Self::default();
        settings.apply_patch(patch);
        settings.normalize();
        Ok(settings)
    }

    /// Read a settings file. A relative `export.root` is taken relative to the
    /// directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Config {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;
        let mut settings = Self::from_toml_str(&text).map_err(|error| Error::Config {
            path: path.to_path_buf(),
            reason: error.message().to_owned(),
        })?;
        if let Some(dir) = path.parent() {
            settings.export.rebase(dir);
        }
        Ok(settings)
    }

    fn apply_patch(
        &mut self,
        patch: SettingsPatch,
    ) {
        if let Some(p) = patch.export {
            self.export.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
        if let Some(p) = patch.outline {
            self.outline.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.export.normalize();
    }
}

/// Walks parent directories from `start` looking for `doxygraph.toml`.
pub fn find_settings_file(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(SETTINGS_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SettingsPatch {
    export: Option<ExportSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    outline: Option<OutlineSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, toml::Value>,
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;

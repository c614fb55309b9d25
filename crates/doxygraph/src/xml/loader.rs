use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    error::{Error, Result},
    xml::XmlElement,
};

/// A parsed document together with the path it was read from.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    pub path: PathBuf,
    pub root: XmlElement,
}

impl XmlDocument {
    /// Parse XML text. `path` is only used to label errors.
    pub fn parse(
        path: impl Into<PathBuf>,
        text: &str,
    ) -> Result<Self> {
        let path = path.into();
        let doc = match roxmltree::Document::parse(text) {
            Ok(doc) => doc,
            Err(error) => {
                return Err(Error::Parse {
                    path,
                    reason: error.to_string(),
                });
            },
        };
        let root = XmlElement::from_roxml(doc.root_element());
        Ok(Self {
            path,
            root,
        })
    }
}

/// Reads documents of one export directory.
///
/// Holds no cache: each call reads and parses the file again. Deduplication
/// is the job of [`SymbolModel`](crate::SymbolModel).
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    export_root: PathBuf,
}

impl DocumentLoader {
    pub fn new(export_root: impl Into<PathBuf>) -> Self {
        Self {
            export_root: export_root.into(),
        }
    }

    /// Resolve `path` against the export root. Absolute paths are kept as is.
    pub fn resolve_path(
        &self,
        path: &Path,
    ) -> PathBuf {
        self.export_root.join(path)
    }

    pub fn load(
        &self,
        path: &Path,
    ) -> Result<XmlDocument> {
        let path = self.resolve_path(path);
        debug!("[loader] reading {}", path.display());
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(source) => {
                return Err(Error::Io {
                    path,
                    source,
                });
            },
        };
        XmlDocument::parse(path, &text)
    }
}

#[cfg(test)]
#[path = "../../tests/src/xml/loader_tests.rs"]
mod tests;

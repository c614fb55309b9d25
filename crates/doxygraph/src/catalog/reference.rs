use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    catalog::CompoundKind,
    error::Result,
    ident::{QualifiedName, RefId},
    xml::{DocumentLoader, XmlDocument, XmlElement},
};

/// One `<compound>` row of the root index: a pointer to a definition that
/// has not been loaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub id: RefId,
    pub kind: CompoundKind,
    pub name: QualifiedName,
    /// Satellite document, relative to the export root.
    pub document: PathBuf,
}

impl Reference {
    fn from_element(
        elem: &XmlElement,
        index_path: &Path,
    ) -> Result<Self> {
        let id = RefId::new(elem.require_attr("refid", index_path)?);
        let kind = CompoundKind::parse(elem.require_attr("kind", index_path)?);
        let name = QualifiedName::parse(&elem.require_child_text("name", index_path)?);
        let document = PathBuf::from(id.document_file_name());
        Ok(Self {
            id,
            kind,
            name,
            document,
        })
    }
}

/// Every reference listed by the root index, in document order.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    index_path: PathBuf,
    version: Option<String>,
    references: Vec<Reference>,
}

impl ReferenceCatalog {
    /// Load and parse the root index. Any failure here is fatal: nothing can
    /// be built without it.
    pub fn load(
        loader: &DocumentLoader,
        index_file: &Path,
    ) -> Result<Self> {
        Self::from_document(loader.load(index_file)?)
    }

    pub fn from_document(document: XmlDocument) -> Result<Self> {
        let XmlDocument {
            path,
            root,
        } = document;
        let version = root.attr("version").map(str::to_owned);
        let references = root
            .into_descendants_named("compound")
            .iter()
            .map(|elem| Reference::from_element(elem, &path))
            .collect::<Result<Vec<_>>>()?;
        debug!("[catalog] {} lists {} compounds", path.display(), references.len());
        Ok(Self {
            index_path: path,
            version,
            references,
        })
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Doxygen version that produced the export, when recorded.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src/catalog/reference_tests.rs"]
mod tests;

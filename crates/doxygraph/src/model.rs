use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    path::Path,
};

use tracing::{debug, info};

use crate::{
    catalog::{Reference, ReferenceCatalog},
    config::ExportSettings,
    definition::{Definition, DefinitionFactory},
    error::{Error, Result},
    ident::RefId,
    xml::{DocumentLoader, XmlDocument},
};

/// The id → definition table of one export.
///
/// A model only exists fully loaded: [`SymbolModel::load_all`] either reads
/// every satellite document or fails, so every lookup afterwards sees the
/// complete table. Definitions are stored once and handed out by reference;
/// resolving an id twice yields the same object.
#[derive(Debug)]
pub struct SymbolModel {
    catalog: ReferenceCatalog,
    defs: Vec<Definition>,
    /// Map from id to index in `defs`.
    id_to_def: HashMap<RefId, usize>,
    documents_loaded: usize,
}

impl SymbolModel {
    /// Read the root index named by `settings`, then every satellite document.
    pub fn open(settings: &ExportSettings) -> Result<Self> {
        let loader = DocumentLoader::new(&settings.root);
        let catalog = ReferenceCatalog::load(&loader, Path::new(&settings.index_file))?;
        Self::load_all(&loader, catalog)
    }

    /// Load the satellite document of every reference and index each
    /// definition it yields by id.
    ///
    /// A document path is read at most once even if several references share
    /// it. When two definitions claim the same id the first one inserted is
    /// kept. Every catalog id must end up in the table.
    pub fn load_all(
        loader: &DocumentLoader,
        catalog: ReferenceCatalog,
    ) -> Result<Self> {
        let mut model = Self {
            catalog,
            defs: Vec::new(),
            id_to_def: HashMap::new(),
            documents_loaded: 0,
        };
        let mut seen_documents = HashSet::new();

        for reference in model.catalog.references() {
            if !seen_documents.insert(loader.resolve_path(&reference.document)) {
                debug!("[model] {} already loaded, skipping for {}", reference.document.display(), reference.id);
                continue;
            }
            let document = loader.load(&reference.document)?;
            model.documents_loaded += 1;
            insert_document(&mut model.defs, &mut model.id_to_def, document)?;
        }

        if let Some(missing) = model.catalog.references().iter().find(|r| !model.id_to_def.contains_key(&r.id)) {
            return Err(Error::malformed(
                loader.resolve_path(&missing.document),
                format!("no definition for `{}` listed in the root index", missing.id),
            ));
        }

        info!(
            "[model] loaded {} definitions from {} documents ({} references)",
            model.defs.len(),
            model.documents_loaded,
            model.catalog.len()
        );
        Ok(model)
    }

    /// The definition for `id`. An unknown id means the export is inconsistent.
    pub fn resolve(
        &self,
        id: &RefId,
    ) -> Result<&Definition> {
        self.get(id).ok_or_else(|| Error::UnresolvedReference {
            id: id.clone(),
            referrer: None,
        })
    }

    /// Like [`resolve`](Self::resolve), but a miss is `None`.
    pub fn get(
        &self,
        id: &RefId,
    ) -> Option<&Definition> {
        self.id_to_def.get(id).map(|&i| &self.defs[i])
    }

    /// All namespaces in insertion order. Restartable: the table never changes.
    pub fn namespaces(&self) -> impl Iterator<Item = &Definition> + '_ {
        self.defs.iter().filter(|def| def.kind().is_namespace())
    }

    /// All definitions in insertion order.
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> + '_ {
        self.defs.iter()
    }

    pub fn references(&self) -> &[Reference] {
        self.catalog.references()
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Number of satellite documents read by the load pass.
    pub fn documents_loaded(&self) -> usize {
        self.documents_loaded
    }

    pub(crate) fn resolve_indices(
        &self,
        ids: &[RefId],
        referrer: &RefId,
    ) -> Result<Vec<usize>> {
        ids.iter()
            .map(|id| {
                self.id_to_def.get(id).copied().ok_or_else(|| Error::UnresolvedReference {
                    id: id.clone(),
                    referrer: Some(referrer.clone()),
                })
            })
            .collect()
    }

    /// Definitions for `ids`, using the cached `indices` where they still
    /// point at the right id. An index that misses (a cache filled from
    /// another model) falls back to the id table.
    pub(crate) fn definitions_at(
        &self,
        ids: &[RefId],
        indices: &[usize],
        referrer: &RefId,
    ) -> Result<Vec<&Definition>> {
        ids.iter()
            .zip(indices)
            .map(|(id, &i)| match self.defs.get(i) {
                Some(def) if def.id() == id => Ok(def),
                _ => self.id_to_def.get(id).and_then(|&j| self.defs.get(j)).ok_or_else(|| {
                    Error::UnresolvedReference {
                        id: id.clone(),
                        referrer: Some(referrer.clone()),
                    }
                }),
            })
            .collect()
    }
}

fn insert_document(
    defs: &mut Vec<Definition>,
    id_to_def: &mut HashMap<RefId, usize>,
    document: XmlDocument,
) -> Result<()> {
    let XmlDocument {
        path,
        root,
    } = document;
    let factory = DefinitionFactory::new(&path);
    for elem in root.into_descendants_named("compounddef") {
        let def = factory.build(&elem)?;
        match id_to_def.entry(def.id().clone()) {
            Entry::Occupied(_) => {
                debug!("[model] duplicate id {} in {}, keeping the first definition", def.id(), path.display());
            },
            Entry::Vacant(slot) => {
                slot.insert(defs.len());
                defs.push(def);
            },
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src/model_tests.rs"]
mod tests;

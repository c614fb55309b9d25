use std::path::Path;

use once_cell::sync::OnceCell;
use tracing::trace;

use crate::{
    definition::{CompoundDefinition, Definition},
    error::Result,
    ident::RefId,
    model::SymbolModel,
    xml::XmlElement,
};

/// A namespace and the ids of the namespaces and classes it directly contains.
///
/// Child ids are read when the definition is built, so a missing `refid` is
/// caught during the load pass. Resolving them to definitions happens on first
/// access and is then cached.
#[derive(Debug)]
pub struct NamespaceDefinition {
    compound: CompoundDefinition,
    inner_namespace_ids: Vec<RefId>,
    inner_class_ids: Vec<RefId>,
    child_namespaces: OnceCell<Vec<usize>>,
    child_classes: OnceCell<Vec<usize>>,
}

impl NamespaceDefinition {
    pub(crate) fn new(
        compound: CompoundDefinition,
        elem: &XmlElement,
        document: &Path,
    ) -> Result<Self> {
        Ok(Self {
            compound,
            inner_namespace_ids: inner_ids(elem, "innernamespace", document)?,
            inner_class_ids: inner_ids(elem, "innerclass", document)?,
            child_namespaces: OnceCell::new(),
            child_classes: OnceCell::new(),
        })
    }

    pub fn compound(&self) -> &CompoundDefinition {
        &self.compound
    }

    pub fn inner_namespace_ids(&self) -> &[RefId] {
        &self.inner_namespace_ids
    }

    pub fn inner_class_ids(&self) -> &[RefId] {
        &self.inner_class_ids
    }

    /// Directly nested namespaces, in document order.
    ///
    /// `model` should be the model that owns this definition; another model
    /// is looked up by id and never served indices cached from it.
    pub fn child_namespaces<'m>(
        &'m self,
        model: &'m SymbolModel,
    ) -> Result<Vec<&'m Definition>> {
        let indices = self.child_namespaces.get_or_try_init(|| {
            trace!("[namespace] resolving child namespaces of {}", self.compound.id());
            model.resolve_indices(&self.inner_namespace_ids, self.compound.id())
        })?;
        model.definitions_at(&self.inner_namespace_ids, indices, self.compound.id())
    }

    /// Classes and structs declared directly in this namespace, in document order.
    pub fn child_classes<'m>(
        &'m self,
        model: &'m SymbolModel,
    ) -> Result<Vec<&'m Definition>> {
        let indices = self.child_classes.get_or_try_init(|| {
            trace!("[namespace] resolving child classes of {}", self.compound.id());
            model.resolve_indices(&self.inner_class_ids, self.compound.id())
        })?;
        model.definitions_at(&self.inner_class_ids, indices, self.compound.id())
    }
}

fn inner_ids(
    elem: &XmlElement,
    tag: &str,
    document: &Path,
) -> Result<Vec<RefId>> {
    elem.children_named(tag).map(|inner| inner.require_attr("refid", document).map(RefId::new)).collect()
}

#[cfg(test)]
#[path = "../../tests/src/definition/namespace_tests.rs"]
mod tests;

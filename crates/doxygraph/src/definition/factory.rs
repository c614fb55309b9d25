use std::path::Path;

use crate::{
    catalog::CompoundKind,
    definition::{ClassDefinition, CompoundDefinition, Definition, FunctionDefinition, NamespaceDefinition},
    error::Result,
    xml::XmlElement,
};

/// Builds typed definitions from `<compounddef>` and `<memberdef>` nodes of
/// one document.
///
/// The `kind` attribute is matched once, here. Supporting a new kind means a
/// new arm below and a new [`Definition`] variant.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionFactory<'a> {
    document: &'a Path,
}

impl<'a> DefinitionFactory<'a> {
    /// `document` labels errors and is recorded on every definition built.
    pub fn new(document: &'a Path) -> Self {
        Self {
            document,
        }
    }

    /// Fails if `id`, `kind`, or the name node is missing.
    pub fn build(
        &self,
        elem: &XmlElement,
    ) -> Result<Definition> {
        let kind = CompoundKind::parse(elem.require_attr("kind", self.document)?);
        let compound = CompoundDefinition::from_element(elem, kind.clone(), self.document)?;
        let definition = match kind {
            CompoundKind::Namespace => Definition::Namespace(NamespaceDefinition::new(compound, elem, self.document)?),
            CompoundKind::Class | CompoundKind::Struct => {
                Definition::Class(ClassDefinition::new(compound, elem, self.document)?)
            },
            CompoundKind::Function => Definition::Function(FunctionDefinition::new(compound, elem, self.document)?),
            CompoundKind::Other(_) => Definition::Generic(compound),
        };
        Ok(definition)
    }
}

#[cfg(test)]
#[path = "../../tests/src/definition/factory_tests.rs"]
mod tests;

use std::path::{Path, PathBuf};

use crate::{
    catalog::CompoundKind,
    error::Result,
    ident::{QualifiedName, RefId},
    location::SourceLocation,
    xml::XmlElement,
};

/// Fields every definition carries, whatever its kind.
#[derive(Debug, Clone)]
pub struct CompoundDefinition {
    id: RefId,
    kind: CompoundKind,
    name: QualifiedName,
    location: SourceLocation,
    language: Option<String>,
    document: PathBuf,
}

impl CompoundDefinition {
    pub(crate) fn from_element(
        elem: &XmlElement,
        kind: CompoundKind,
        document: &Path,
    ) -> Result<Self> {
        let id = RefId::new(elem.require_attr("id", document)?);
        let name = read_name(elem, document)?;
        let location = SourceLocation::from_owner(elem, document)?;
        Ok(Self {
            id,
            kind,
            name,
            location,
            language: elem.attr("language").map(str::to_owned),
            document: document.to_path_buf(),
        })
    }

    pub fn id(&self) -> &RefId {
        &self.id
    }

    pub fn kind(&self) -> &CompoundKind {
        &self.kind
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Source language tag (`C++`, `C#`, ...). Only compounds carry one.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Document this definition was parsed from.
    pub fn document(&self) -> &Path {
        &self.document
    }
}

/// Compounds spell their scoped name in `<compoundname>`. Members have no such
/// node: prefer `<qualifiedname>`, then the trailing token of `<definition>`
/// (which otherwise starts with the return type), then `<name>`.
fn read_name(
    elem: &XmlElement,
    document: &Path,
) -> Result<QualifiedName> {
    if elem.name() != "memberdef" {
        return Ok(QualifiedName::parse(&elem.require_child_text("compoundname", document)?));
    }
    if let Some(qualified) = elem.child_text("qualifiedname") {
        return Ok(QualifiedName::parse(&qualified));
    }
    if let Some(definition) = elem.child_text("definition")
        && let Some(last) = definition.split_whitespace().last()
    {
        return Ok(QualifiedName::parse(last));
    }
    Ok(QualifiedName::parse(&elem.require_child_text("name", document)?))
}

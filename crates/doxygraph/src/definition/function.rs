use std::path::Path;

use serde::Serialize;

use crate::{
    definition::{CompoundDefinition, Definition},
    error::Result,
    ident::RefId,
    model::SymbolModel,
    xml::XmlElement,
};

/// The text of a `<type>` node.
///
/// Doxygen wraps documented types in `<ref>`, e.g.
/// `<type>const <ref refid="class_foo">Foo</ref> &amp;</type>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeText {
    /// The referenced symbol's name when the type links to one, otherwise the
    /// literal type text (`Foo` in the example above).
    pub display: Option<String>,
    /// The whole type as written (`const Foo &`).
    pub full: Option<String>,
    /// The `refid` of the first `<ref>` in the type, if any.
    pub target: Option<RefId>,
}

impl TypeText {
    fn from_owner(
        owner: &XmlElement,
        tag: &str,
    ) -> Self {
        let Some(elem) = owner.child(tag) else {
            return Self::default();
        };
        let full = elem.full_text();
        match elem.child("ref") {
            Some(reference) => Self {
                display: reference.full_text().or_else(|| full.clone()),
                full,
                target: reference.attr("refid").map(RefId::new),
            },
            None => Self {
                display: full.clone(),
                full,
                target: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: TypeText,
    /// `None` for unnamed parameters.
    pub name: Option<String>,
}

impl Parameter {
    fn from_element(elem: &XmlElement) -> Self {
        Self {
            ty: TypeText::from_owner(elem, "type"),
            name: elem.child_text("declname"),
        }
    }

    pub fn type_text(&self) -> Option<&str> {
        self.ty.display.as_deref()
    }
}

/// A function and its signature, taken straight from its own node.
#[derive(Debug, Clone)]
pub struct FunctionDefinition {
    compound: CompoundDefinition,
    simple_name: String,
    return_type: TypeText,
    params: Vec<Parameter>,
}

impl FunctionDefinition {
    pub(crate) fn new(
        compound: CompoundDefinition,
        elem: &XmlElement,
        document: &Path,
    ) -> Result<Self> {
        Ok(Self {
            simple_name: elem.require_child_text("name", document)?,
            return_type: TypeText::from_owner(elem, "type"),
            params: elem.children_named("param").map(Parameter::from_element).collect(),
            compound,
        })
    }

    pub fn compound(&self) -> &CompoundDefinition {
        &self.compound
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// `None` when the node has no type text, as for constructors.
    pub fn return_type(&self) -> Option<&str> {
        self.return_type.display.as_deref()
    }

    pub fn return_type_text(&self) -> &TypeText {
        &self.return_type
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// The definition the return type links to, when the model knows it.
    ///
    /// Type links may point at members that the root index does not list, so
    /// a miss is not an error here.
    pub fn return_type_target<'m>(
        &self,
        model: &'m SymbolModel,
    ) -> Option<&'m Definition> {
        self.return_type.target.as_ref().and_then(|id| model.get(id))
    }
}

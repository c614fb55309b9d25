//! Fully parsed, canonical definitions and the factory that builds them.

mod class;
mod compound;
mod factory;
mod function;
mod namespace;

use std::path::Path;

pub use class::ClassDefinition;
pub use compound::CompoundDefinition;
pub use factory::DefinitionFactory;
pub use function::{FunctionDefinition, Parameter, TypeText};
pub use namespace::NamespaceDefinition;

use crate::{
    catalog::CompoundKind,
    ident::{QualifiedName, RefId},
    location::SourceLocation,
};

/// One documented entity. The variant is fixed by the `kind` attribute when
/// the [`DefinitionFactory`] builds it and never changes afterwards.
#[derive(Debug)]
pub enum Definition {
    Namespace(NamespaceDefinition),
    Class(ClassDefinition),
    Function(FunctionDefinition),
    /// Any kind without a dedicated variant (files, groups, pages, ...).
    Generic(CompoundDefinition),
}

impl Definition {
    pub fn compound(&self) -> &CompoundDefinition {
        match self {
            Self::Namespace(def) => def.compound(),
            Self::Class(def) => def.compound(),
            Self::Function(def) => def.compound(),
            Self::Generic(def) => def,
        }
    }

    pub fn id(&self) -> &RefId {
        self.compound().id()
    }

    pub fn kind(&self) -> &CompoundKind {
        self.compound().kind()
    }

    pub fn name(&self) -> &QualifiedName {
        self.compound().name()
    }

    pub fn location(&self) -> &SourceLocation {
        self.compound().location()
    }

    pub fn language(&self) -> Option<&str> {
        self.compound().language()
    }

    pub fn document(&self) -> &Path {
        self.compound().document()
    }

    pub fn as_namespace(&self) -> Option<&NamespaceDefinition> {
        match self {
            Self::Namespace(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassDefinition> {
        match self {
            Self::Class(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDefinition> {
        match self {
            Self::Function(def) => Some(def),
            _ => None,
        }
    }
}

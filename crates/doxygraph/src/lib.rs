pub mod catalog;
pub mod config;
pub mod definition;
pub mod error;
pub mod ident;
pub mod location;
pub mod model;
pub mod outline;
pub mod xml;

pub use catalog::{CompoundKind, Reference, ReferenceCatalog};
pub use config::{ExportSettings, Settings};
pub use definition::{
    ClassDefinition, CompoundDefinition, Definition, DefinitionFactory, FunctionDefinition, NamespaceDefinition,
    Parameter, TypeText,
};
pub use error::{Error, Result};
pub use ident::{QualifiedName, RefId};
pub use location::SourceLocation;
pub use model::SymbolModel;
pub use xml::{DocumentLoader, XmlDocument, XmlElement};

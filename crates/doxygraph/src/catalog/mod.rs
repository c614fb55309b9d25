//! The root index (`index.xml`) and the references it lists.

mod kind;
mod reference;

pub use kind::CompoundKind;
pub use reference::{Reference, ReferenceCatalog};

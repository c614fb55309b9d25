//! Owned XML trees and the stateless document loader.

mod loader;
mod node;

pub use loader::{DocumentLoader, XmlDocument};
pub use node::{XmlElement, XmlNode};

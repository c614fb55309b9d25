//! Identifier value types shared by references and definitions.

use std::fmt::{self, Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SCOPE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"::|/").expect("valid separator pattern"));

/// Doxygen's locally unique id (`refid` / `id` attributes).
///
/// Only ever compared, hashed, and used to name satellite documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RefId(String);

impl RefId {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the satellite document holding this entity.
    pub fn document_file_name(&self) -> String {
        format!("{}.xml", self.0)
    }
}

impl Display for RefId {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RefId {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A scoped name such as `A::B::C`, stored as its segments.
///
/// `::` and `/` are both accepted as separators, even mixed in one string.
/// Empty segments are dropped, so `::A` and `/A` both yield `[A]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    pub fn parse(raw: &str) -> Self {
        let segments = SCOPE_SEPARATOR
            .split(raw.trim())
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();
        Self {
            segments,
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The leaf segment, or `""` for a name with no segments.
    pub fn simple_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// Slash-joined form with a leading slash, e.g. `/A/B/C`.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            out.push_str(segment);
        }
        if out.is_empty() {
            out.push('/');
        }
        out
    }

    /// `::`-joined form, as C++ would spell it.
    pub fn scoped(&self) -> String {
        self.segments.join("::")
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Display for QualifiedName {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for QualifiedName {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

#[cfg(test)]
#[path = "../tests/src/ident_tests.rs"]
mod tests;

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// The `kind` attribute of a compound or member.
///
/// Kinds this crate has no dedicated variant for are kept verbatim in
/// [`CompoundKind::Other`] instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompoundKind {
    Namespace,
    Class,
    Struct,
    Function,
    Other(String),
}

impl CompoundKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "namespace" => Self::Namespace,
            "class" => Self::Class,
            "struct" => Self::Struct,
            "function" => Self::Function,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Namespace => "namespace",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Function => "function",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_namespace(&self) -> bool {
        matches!(self, Self::Namespace)
    }

    /// `class` and `struct` share one definition variant.
    pub fn is_class_like(&self) -> bool {
        matches!(self, Self::Class | Self::Struct)
    }
}

impl Display for CompoundKind {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CompoundKind {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

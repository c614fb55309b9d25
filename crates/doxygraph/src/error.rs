use std::{
    fmt::{Display, Formatter},
    path::PathBuf,
};

use crate::ident::RefId;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is fatal to the load pass; nothing is defaulted or skipped.
#[derive(Debug)]
pub enum Error {
    /// A document could not be read from disk.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A document is not well-formed XML.
    Parse {
        path: PathBuf,
        reason: String,
    },
    /// A document is well-formed but lacks a required attribute or node.
    Malformed {
        path: PathBuf,
        reason: String,
    },
    /// An id referenced by some document is absent from the definition table.
    UnresolvedReference {
        id: RefId,
        referrer: Option<RefId>,
    },
    /// A settings file exists but cannot be read or parsed.
    Config {
        path: PathBuf,
        reason: String,
    },
    /// The JSON outline could not be written.
    Json {
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn malformed(
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn is_unresolved_reference(&self) -> bool {
        matches!(self, Self::UnresolvedReference { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
        }
    }
}

impl Display for Error {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Io {
                path,
                source,
            } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse {
                path,
                reason,
            } => write!(f, "{} is not well-formed XML: {reason}", path.display()),
            Self::Malformed {
                path,
                reason,
            } => write!(f, "malformed document {}: {reason}", path.display()),
            Self::UnresolvedReference {
                id,
                referrer: Some(referrer),
            } => write!(f, "{referrer} references unknown id {id}"),
            Self::UnresolvedReference {
                id,
                referrer: None,
            } => write!(f, "unknown id {id}"),
            Self::Config {
                path,
                reason,
            } => write!(f, "invalid settings file {}: {reason}", path.display()),
            Self::Json {
                source,
            } => write!(f, "failed to write JSON outline: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io {
                source, ..
            } => Some(source),
            Self::Json {
                source,
            } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src/error_tests.rs"]
mod tests;

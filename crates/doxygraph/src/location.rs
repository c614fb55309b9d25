use std::{
    fmt::{self, Display, Formatter},
    path::Path,
};

use serde::Serialize;

use crate::{
    error::{Error, Result},
    xml::XmlElement,
};

/// Where a definition was declared. Every field is optional: synthesized or
/// external entities carry no `<location>` at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl SourceLocation {
    /// Read the `<location>` child of `owner`, if any.
    pub(crate) fn from_owner(
        owner: &XmlElement,
        document: &Path,
    ) -> Result<Self> {
        let Some(elem) = owner.child("location") else {
            return Ok(Self::default());
        };
        Ok(Self {
            file: elem.attr("file").map(str::to_owned),
            line: parse_number(elem, "line", document)?,
            column: parse_number(elem, "column", document)?,
        })
    }

    pub fn is_known(&self) -> bool {
        self.file.is_some()
    }
}

fn parse_number(
    elem: &XmlElement,
    key: &str,
    document: &Path,
) -> Result<Option<u32>> {
    let Some(raw) = elem.attr(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|_| Error::malformed(document, format!("location {key} `{raw}` is not a number")))
}

impl Display for SourceLocation {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.file.as_deref().unwrap_or("?"))?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
            if let Some(column) = self.column {
                write!(f, ":{column}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/src/location_tests.rs"]
mod tests;

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutlineFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineSettings {
    /// List member functions under each class.
    pub functions: bool,
    /// Append `file:line:column` to every entry.
    pub locations: bool,
    pub format: OutlineFormat,
}

impl Default for OutlineSettings {
    fn default() -> Self {
        Self {
            functions: true,
            locations: false,
            format: OutlineFormat::Text,
        }
    }
}

impl OutlineSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: OutlineSettingsPatch,
    ) {
        if let Some(v) = patch.functions {
            self.functions = v;
        }
        if let Some(v) = patch.locations {
            self.locations = v;
        }
        if let Some(v) = patch.format {
            self.format = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct OutlineSettingsPatch {
    pub(crate) functions: Option<bool>,
    pub(crate) locations: Option<bool>,
    pub(crate) format: Option<OutlineFormat>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, toml::Value>,
}

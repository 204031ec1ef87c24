//! Data model for the guide collection.
//!
//! A collection is an ordered list of [`Category`] records, each holding an
//! ordered list of [`Guide`] records. Guides have a handful of known fields;
//! everything else in the JSON is kept as schemaless extra data that still
//! contributes searchable text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A group of guides sharing a topic, e.g. "guides-pvp-builds".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Human-facing name. Falls back to a cleaned-up `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webname: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub guides: Vec<Guide>,
}

impl Category {
    /// Display name: `webname` when present, otherwise `name` with the
    /// `"guides-"` prefix dropped and dashes turned into spaces.
    pub fn display_name(&self) -> String {
        match &self.webname {
            Some(webname) => webname.clone(),
            None => self
                .name
                .replace("guides-", "")
                .replace('-', " ")
                .trim()
                .to_string(),
        }
    }
}

/// One guide document.
///
/// The optional collections treat absent and empty identically: neither
/// renders anything and neither contributes tokens to the search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub name: String,
    /// Obsolescence note. A non-empty value renders a warning banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obsolete: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fams: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub builds: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Fields with no fixed schema. Scalar leaves anywhere in these trees
    /// are still indexed.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Supplementary material attached to a guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "attachmenttype", rename_all = "lowercase")]
pub enum Attachment {
    File { filename: String, contenttype: String },
    Markdown { filename: String },
    Link { link: String },
}

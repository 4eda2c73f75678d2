//! Host manifest describing a directory-backed repository
//!
//! ```toml
//! link_prefix = "/opencms/opencms"
//! encoding = "UTF-8"
//! default_locale = "en"
//!
//! [properties.Title]
//! "/data/obs/42" = "Arctic Report"
//!
//! [properties.locale]
//! "/data" = "no"
//!
//! # Defined, but without any values
//! [properties.Description]
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// File name of the manifest at the root of an [`crate::FsHost`] tree.
pub const MANIFEST_FILE_NAME: &str = ".widget-host.toml";

/// Settings and property data for a directory-backed host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostManifest {
    /// Prefix added by link substitution, e.g. `/opencms/opencms`
    pub link_prefix: String,

    /// System default text encoding
    pub encoding: String,

    /// Locale used when no `locale` property applies
    pub default_locale: String,

    /// File extensions treated as plain-text resources (case-insensitive)
    pub plain_extensions: Vec<String>,

    /// Property definitions, each mapping resource paths to values
    pub properties: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for HostManifest {
    fn default() -> Self {
        Self {
            link_prefix: String::new(),
            encoding: "UTF-8".to_string(),
            default_locale: "en".to_string(),
            plain_extensions: [
                "txt", "tpl", "json", "conf", "html", "htm", "xml", "css", "js", "properties",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            properties: BTreeMap::new(),
        }
    }
}

impl HostManifest {
    /// Parse a manifest from TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the manifest at `path`, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            tracing::debug!(?path, "No host manifest found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content).map_err(|e| Error::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// True if files with this extension are plain text.
    pub fn is_plain_extension(&self, extension: &str) -> bool {
        self.plain_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}

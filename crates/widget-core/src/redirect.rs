//! Config-file redirection
//!
//! A configuration of the form `{"conf_uri": "conf/stations.json"}` is a
//! pointer: the document at that path becomes the whole configuration.
//! The path may be absolute or relative to the module resources folder and
//! must name a plain-text resource.

use crate::document::keys;
use crate::{ConfigDocument, Error, PathResolver, Result};
use widget_host::ContentHost;

/// Replace the document with the referenced config file, if it has one.
///
/// Without a `conf_uri` key the document is returned as is. When the
/// reference is broken (wrong value type, missing or non-text resource,
/// unparseable content) the failure is logged and the original document
/// is returned, so resolution continues with what the author supplied.
pub fn resolve_config_file(
    doc: ConfigDocument,
    host: &dyn ContentHost,
    paths: &PathResolver,
) -> ConfigDocument {
    if !doc.contains_key(keys::CONFIG_FILE_URI) {
        return doc;
    }
    match try_resolve_config_file(&doc, host, paths) {
        Ok(replacement) => replacement,
        Err(e) => {
            tracing::error!(error = %e, "Unable to read widget configuration from file");
            doc
        }
    }
}

fn try_resolve_config_file(
    doc: &ConfigDocument,
    host: &dyn ContentHost,
    paths: &PathResolver,
) -> Result<ConfigDocument> {
    let uri = doc
        .get_str(keys::CONFIG_FILE_URI)
        .ok_or_else(|| Error::InvalidValue {
            key: keys::CONFIG_FILE_URI.to_string(),
            expected: "a string".to_string(),
        })?;
    let (path, content) = paths.read_plain_text(host, uri, "config file")?;
    tracing::debug!(%path, "Replacing widget configuration with config file");
    ConfigDocument::parse(&content)
}

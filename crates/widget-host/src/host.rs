//! The capability interface widgets consume from the host

use crate::{ContentLocale, Error, Result, VfsPath};

/// The kind of a repository resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Folder,
    /// A plain-text file (templates, JSON configuration files)
    Plain,
    /// Any other file
    Binary,
}

/// Read-only capabilities of the host content repository.
///
/// All calls are synchronous and idempotent. Paths passed in are root paths
/// inside the repository unless stated otherwise.
pub trait ContentHost {
    /// True if a resource exists at the given path.
    fn exists_resource(&self, path: &str) -> bool;

    /// The kind of the resource at the given path.
    fn resource_kind(&self, path: &str) -> Result<ResourceKind>;

    /// Raw bytes of the file at the given path.
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;

    /// Value of a property on a resource.
    ///
    /// With `search_ancestors`, folders above the resource are consulted
    /// when the resource itself carries no value. `Ok(None)` means the
    /// property is defined but has no value anywhere on that chain.
    fn read_property(
        &self,
        resource: &str,
        name: &str,
        search_ancestors: bool,
    ) -> Result<Option<String>>;

    /// True if the property is defined in the repository at all.
    fn property_defined(&self, name: &str) -> Result<bool>;

    /// The locale the host assigns to a resource when none is configured on it.
    fn default_locale(&self, resource: &str) -> Result<ContentLocale>;

    /// Rewrite a root path into a link usable from the current request.
    fn substitute_link(&self, path: &str) -> String;

    /// Turn a link produced by [`ContentHost::substitute_link`] back into a root path.
    fn root_path(&self, link: &str) -> String;

    /// Name of the system default text encoding, e.g. `UTF-8`.
    fn default_encoding(&self) -> String;

    /// Read a file and decode it with the system default encoding.
    fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self.read_file(path)?;
        decode_text(path, &bytes, &self.default_encoding())
    }
}

/// Decode file content using a named text encoding.
///
/// Supports UTF-8, ISO-8859-1 (Latin-1) and US-ASCII.
pub fn decode_text(path: &str, bytes: &[u8], encoding: &str) -> Result<String> {
    let decode_error = || Error::Decode {
        path: path.to_string(),
        encoding: encoding.to_string(),
    };
    match encoding.to_ascii_lowercase().replace('_', "-").as_str() {
        "utf-8" | "utf8" => String::from_utf8(bytes.to_vec()).map_err(|_| decode_error()),
        "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => {
            Ok(bytes.iter().map(|&b| char::from(b)).collect())
        }
        "us-ascii" | "ascii" => {
            if bytes.is_ascii() {
                Ok(bytes.iter().map(|&b| char::from(b)).collect())
            } else {
                Err(decode_error())
            }
        }
        _ => Err(Error::UnsupportedEncoding {
            encoding: encoding.to_string(),
        }),
    }
}

/// Prefix a root path with the host's link prefix.
pub(crate) fn prefix_link(prefix: &str, path: &str) -> String {
    if prefix.is_empty() || !path.starts_with('/') {
        return path.to_string();
    }
    format!("{}{}", prefix.trim_end_matches('/'), path)
}

/// Strip the host's link prefix again; links without it pass through.
pub(crate) fn strip_link_prefix(prefix: &str, link: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return link.to_string();
    }
    match link.strip_prefix(prefix) {
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => link.to_string(),
    }
}

/// The content item being edited, plus its locale.
///
/// Supplied by the host for each render and never modified by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceContext {
    root_path: VfsPath,
    locale: ContentLocale,
}

impl ResourceContext {
    pub fn new(root_path: impl Into<VfsPath>, locale: ContentLocale) -> Self {
        Self {
            root_path: root_path.into(),
            locale,
        }
    }

    /// Root path of the edited resource, e.g. `/data/obs/42`.
    pub fn root_path(&self) -> &str {
        self.root_path.as_str()
    }

    /// The active content locale.
    pub fn locale(&self) -> &ContentLocale {
        &self.locale
    }
}

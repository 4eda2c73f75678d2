//! In-memory content repository

use crate::host::{prefix_link, strip_link_prefix};
use crate::{ContentHost, ContentLocale, Error, Result, ResourceKind, VfsPath};
use std::collections::{BTreeMap, BTreeSet};

const LOCALE_PROPERTY: &str = "locale";

#[derive(Debug, Clone)]
struct MemoryFile {
    kind: ResourceKind,
    content: Vec<u8>,
}

/// A content repository held entirely in memory.
///
/// Folders are implied by the files placed below them and can also be
/// created explicitly.
///
/// # Example
///
/// ```
/// use widget_host::{ContentHost, MemoryHost};
///
/// let host = MemoryHost::new()
///     .with_plain_file("/tpl/info.tpl", "<b>%(title)</b>")
///     .with_property("/data/obs/42", "Title", "Arctic Report");
///
/// assert!(host.exists_resource("/tpl"));
/// assert_eq!(
///     host.read_property("/data/obs/42", "Title", true).unwrap().as_deref(),
///     Some("Arctic Report")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHost {
    files: BTreeMap<VfsPath, MemoryFile>,
    folders: BTreeSet<VfsPath>,
    property_definitions: BTreeSet<String>,
    properties: BTreeMap<VfsPath, BTreeMap<String, String>>,
    link_prefix: String,
    encoding: String,
    default_locale: ContentLocale,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// An empty repository with UTF-8 encoding and `en` as default locale.
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            folders: BTreeSet::new(),
            property_definitions: BTreeSet::new(),
            properties: BTreeMap::new(),
            link_prefix: String::new(),
            encoding: "UTF-8".to_string(),
            default_locale: ContentLocale::default(),
        }
    }

    /// Add a plain-text file.
    pub fn with_plain_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert_file(path, ResourceKind::Plain, content.into());
        self
    }

    /// Add a non-text file.
    pub fn with_binary_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert_file(path, ResourceKind::Binary, content.into());
        self
    }

    /// Add an (empty) folder.
    pub fn with_folder(mut self, path: &str) -> Self {
        self.folders.insert(VfsPath::new(path));
        self
    }

    /// Define a property without giving it any value.
    pub fn with_property_definition(mut self, name: &str) -> Self {
        self.property_definitions.insert(name.to_string());
        self
    }

    /// Set a property value on a resource, defining the property if needed.
    pub fn with_property(mut self, resource: &str, name: &str, value: &str) -> Self {
        self.property_definitions.insert(name.to_string());
        self.properties
            .entry(VfsPath::new(resource))
            .or_default()
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Prefix added by link substitution, e.g. `/opencms/opencms`.
    pub fn with_link_prefix(mut self, prefix: &str) -> Self {
        self.link_prefix = prefix.to_string();
        self
    }

    /// System default text encoding.
    pub fn with_encoding(mut self, encoding: &str) -> Self {
        self.encoding = encoding.to_string();
        self
    }

    /// Locale used when no `locale` property applies.
    pub fn with_default_locale(mut self, locale: ContentLocale) -> Self {
        self.default_locale = locale;
        self
    }

    fn insert_file(&mut self, path: &str, kind: ResourceKind, content: Vec<u8>) {
        self.files
            .insert(VfsPath::new(path), MemoryFile { kind, content });
    }

    fn is_folder(&self, path: &VfsPath) -> bool {
        path.is_root()
            || self.folders.contains(path)
            || self
                .folders
                .iter()
                .chain(self.files.keys())
                .any(|p| path.is_ancestor_of(p))
    }
}

impl ContentHost for MemoryHost {
    fn exists_resource(&self, path: &str) -> bool {
        let path = VfsPath::new(path);
        self.files.contains_key(&path) || self.is_folder(&path)
    }

    fn resource_kind(&self, path: &str) -> Result<ResourceKind> {
        let vfs = VfsPath::new(path);
        if let Some(file) = self.files.get(&vfs) {
            return Ok(file.kind);
        }
        if self.is_folder(&vfs) {
            return Ok(ResourceKind::Folder);
        }
        Err(Error::not_found(path))
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let vfs = VfsPath::new(path);
        match self.files.get(&vfs) {
            Some(file) => Ok(file.content.clone()),
            None if self.is_folder(&vfs) => Err(Error::NotAFile {
                path: path.to_string(),
            }),
            None => Err(Error::not_found(path)),
        }
    }

    fn read_property(
        &self,
        resource: &str,
        name: &str,
        search_ancestors: bool,
    ) -> Result<Option<String>> {
        let resource = VfsPath::new(resource);
        let chain = if search_ancestors {
            resource.ancestors()
        } else {
            vec![resource]
        };
        Ok(chain.iter().find_map(|path| {
            self.properties
                .get(path)
                .and_then(|props| props.get(name))
                .cloned()
        }))
    }

    fn property_defined(&self, name: &str) -> Result<bool> {
        Ok(self.property_definitions.contains(name))
    }

    fn default_locale(&self, resource: &str) -> Result<ContentLocale> {
        match self.read_property(resource, LOCALE_PROPERTY, true)? {
            Some(value) => value.parse(),
            None => Ok(self.default_locale.clone()),
        }
    }

    fn substitute_link(&self, path: &str) -> String {
        prefix_link(&self.link_prefix, path)
    }

    fn root_path(&self, link: &str) -> String {
        strip_link_prefix(&self.link_prefix, link)
    }

    fn default_encoding(&self) -> String {
        self.encoding.clone()
    }
}

//! Directory-backed content repository
//!
//! A directory on disk stands in for the repository: `/` maps to the
//! directory itself. Property data and host settings come from the
//! [`HostManifest`] stored at its root.

use crate::host::{prefix_link, strip_link_prefix};
use crate::manifest::MANIFEST_FILE_NAME;
use crate::{ContentHost, ContentLocale, Error, HostManifest, Result, ResourceKind, VfsPath};
use std::path::{Path, PathBuf};

const LOCALE_PROPERTY: &str = "locale";

/// A content repository rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsHost {
    root: PathBuf,
    manifest: HostManifest,
}

impl FsHost {
    /// Open a directory, reading `.widget-host.toml` if present.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let manifest = HostManifest::load(&root.join(MANIFEST_FILE_NAME))?;
        tracing::debug!(root = %root.display(), "Opened directory host");
        Ok(Self { root, manifest })
    }

    /// Use an explicit manifest instead of reading one from disk.
    pub fn with_manifest(root: impl Into<PathBuf>, manifest: HostManifest) -> Self {
        Self {
            root: root.into(),
            manifest,
        }
    }

    /// The directory acting as repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The active manifest.
    pub fn manifest(&self) -> &HostManifest {
        &self.manifest
    }

    /// Map a repository path onto the filesystem.
    ///
    /// Normalization clamps `..` at the root, so the result never leaves it.
    fn native_path(&self, path: &str) -> PathBuf {
        let vfs = VfsPath::new(path);
        let relative = vfs.as_str().trim_start_matches('/');
        if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }
}

impl ContentHost for FsHost {
    fn exists_resource(&self, path: &str) -> bool {
        self.native_path(path).exists()
    }

    fn resource_kind(&self, path: &str) -> Result<ResourceKind> {
        let native = self.native_path(path);
        let metadata = std::fs::metadata(&native).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::not_found(path),
            _ => Error::io(&native, e),
        })?;
        if metadata.is_dir() {
            return Ok(ResourceKind::Folder);
        }
        let plain = VfsPath::new(path)
            .extension()
            .is_some_and(|ext| self.manifest.is_plain_extension(ext));
        Ok(if plain {
            ResourceKind::Plain
        } else {
            ResourceKind::Binary
        })
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let native = self.native_path(path);
        if native.is_dir() {
            return Err(Error::NotAFile {
                path: path.to_string(),
            });
        }
        std::fs::read(&native).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::not_found(path),
            _ => Error::io(&native, e),
        })
    }

    fn read_property(
        &self,
        resource: &str,
        name: &str,
        search_ancestors: bool,
    ) -> Result<Option<String>> {
        let Some(values) = self.manifest.properties.get(name) else {
            return Ok(None);
        };
        let resource = VfsPath::new(resource);
        let chain = if search_ancestors {
            resource.ancestors()
        } else {
            vec![resource]
        };
        Ok(chain.iter().find_map(|path| {
            values
                .iter()
                .find(|(key, _)| VfsPath::new(key) == *path)
                .map(|(_, value)| value.clone())
        }))
    }

    fn property_defined(&self, name: &str) -> Result<bool> {
        Ok(self.manifest.properties.contains_key(name))
    }

    fn default_locale(&self, resource: &str) -> Result<ContentLocale> {
        match self.read_property(resource, LOCALE_PROPERTY, true)? {
            Some(value) => value.parse(),
            None => self.manifest.default_locale.parse(),
        }
    }

    fn substitute_link(&self, path: &str) -> String {
        prefix_link(&self.manifest.link_prefix, path)
    }

    fn root_path(&self, link: &str) -> String {
        strip_link_prefix(&self.manifest.link_prefix, link)
    }

    fn default_encoding(&self) -> String {
        self.manifest.encoding.clone()
    }
}

//! [`TestTree`] builder for directory-backed hosts.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use widget_host::{FsHost, MANIFEST_FILE_NAME};

use crate::arctic;

/// A temporary repository directory.
///
/// # Example
///
/// ```rust
/// use widget_host::ContentHost;
/// use widget_test_utils::TestTree;
///
/// let tree = TestTree::arctic();
/// let host = tree.host();
/// assert!(host.exists_resource("/system/modules/no.npolar.opencms.widgets/resources/tpl/info.tpl"));
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A tree holding the "Arctic Report" content and manifest.
    pub fn arctic() -> Self {
        let tree = Self::new();
        for (path, content) in arctic::FILES {
            tree.write_file(path, content);
        }
        tree.write_file("/shared/images/logo.png", [0x89, 0x50, 0x4e, 0x47]);
        fs::create_dir_all(tree.root().join(arctic::RESOURCE_PATH.trim_start_matches('/')))
            .unwrap();
        tree.write_manifest(&arctic::arctic_manifest());
        tree
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file at a repository root path, creating parent folders.
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) {
        let full_path = self.root().join(path.trim_start_matches('/'));
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    /// Replace the host manifest.
    pub fn write_manifest(&self, toml: &str) {
        fs::write(self.root().join(MANIFEST_FILE_NAME), toml).unwrap();
    }

    /// Open a host over the tree.
    ///
    /// # Panics
    /// Panics if the manifest cannot be parsed.
    pub fn host(&self) -> FsHost {
        FsHost::open(self.root())
            .unwrap_or_else(|e| panic!("Could not open host at {}: {e}", self.root().display()))
    }
}

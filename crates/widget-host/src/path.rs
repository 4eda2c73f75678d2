//! Normalized repository paths

/// An absolute path inside the host content repository.
///
/// Always starts with `/`, uses forward slashes, and has `.` and `..`
/// segments folded away. Traversal above the root is clamped at `/`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VfsPath {
    /// Internal representation, e.g. `/data/obs/42`
    inner: String,
}

impl VfsPath {
    /// Create a new VfsPath from any string.
    ///
    /// Backslashes are treated as separators and a missing leading slash
    /// is added.
    pub fn new(path: &str) -> Self {
        let unified = path.replace('\\', "/");
        let mut segments: Vec<&str> = Vec::new();
        for segment in unified.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other),
            }
        }
        Self {
            inner: format!("/{}", segments.join("/")),
        }
    }

    /// The repository root, `/`.
    pub fn root() -> Self {
        Self {
            inner: "/".to_string(),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// True for the repository root.
    pub fn is_root(&self) -> bool {
        self.inner == "/"
    }

    /// Get the parent folder, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.inner.rfind('/') {
            Some(0) => Some(Self::root()),
            Some(idx) => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            None => None,
        }
    }

    /// Get the last path segment, or `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        self.inner.rsplit('/').next()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// This path followed by each of its ancestors, ending with `/`.
    pub fn ancestors(&self) -> Vec<VfsPath> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent();
        while let Some(path) = current {
            current = path.parent();
            chain.push(path);
        }
        chain
    }

    /// True if `other` lies strictly below this path.
    pub fn is_ancestor_of(&self, other: &VfsPath) -> bool {
        if self.is_root() {
            return !other.is_root();
        }
        other
            .inner
            .strip_prefix(&self.inner)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl std::fmt::Display for VfsPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl AsRef<str> for VfsPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for VfsPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VfsPath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

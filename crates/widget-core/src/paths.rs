//! Path classification and resolution
//!
//! Paths in a configuration (and the widget's asset lists) come in three
//! forms:
//!
//! - **External** - `http://cdn.example.com/x.js`, `//cdn.example.com/x.js`
//! - **Absolute** - `/system/modules/other.module/resources/x.css`
//! - **Module-relative** - `js/local.js`, resolved against the module
//!   resources folder

use crate::{EngineSettings, Error, Result};
use widget_host::{ContentHost, ResourceKind};

/// The addressing scheme of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    External,
    Absolute,
    ModuleRelative,
}

impl PathKind {
    /// Classify a path. Every input falls into exactly one kind.
    pub fn of(path: &str) -> Self {
        if path.starts_with("http") || path.starts_with("//") {
            PathKind::External
        } else if path.starts_with('/') {
            PathKind::Absolute
        } else {
            PathKind::ModuleRelative
        }
    }
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PathKind::External => "external",
            PathKind::Absolute => "absolute",
            PathKind::ModuleRelative => "module-relative",
        };
        write!(f, "{}", name)
    }
}

/// Turns configuration paths into links and readable repository paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    module_resources: String,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::from_settings(&EngineSettings::default())
    }
}

impl PathResolver {
    /// Create a resolver for the given module resources folder.
    pub fn new(module_resources: impl Into<String>) -> Self {
        let mut module_resources = module_resources.into();
        if !module_resources.ends_with('/') {
            module_resources.push('/');
        }
        Self { module_resources }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(settings.module_resources.clone())
    }

    /// The folder module-relative paths resolve against.
    pub fn module_resources(&self) -> &str {
        &self.module_resources
    }

    /// A link for the path, suitable for the rendered page.
    ///
    /// External paths come back verbatim; the others go through the host's
    /// link substitution.
    pub fn resource_link(&self, host: &dyn ContentHost, path: &str) -> String {
        match PathKind::of(path) {
            PathKind::External => path.to_string(),
            PathKind::Absolute => host.substitute_link(path),
            PathKind::ModuleRelative => {
                host.substitute_link(&format!("{}{}", self.module_resources, path))
            }
        }
    }

    /// A root path the host can read from.
    ///
    /// The link from [`PathResolver::resource_link`] is normalized back
    /// through the host, so any request prefix is removed again. External
    /// paths are returned unmodified.
    pub fn readable_path(&self, host: &dyn ContentHost, path: &str) -> String {
        if PathKind::of(path) == PathKind::External {
            return path.to_string();
        }
        host.root_path(&self.resource_link(host, path))
    }

    /// Read the text of a plain-text resource referenced from the configuration.
    ///
    /// `purpose` names the reference in the error ("template file", ...).
    /// Returns the resolved root path together with the decoded content.
    pub fn read_plain_text(
        &self,
        host: &dyn ContentHost,
        path: &str,
        purpose: &str,
    ) -> Result<(String, String)> {
        let readable = self.readable_path(host, path);
        if !host.exists_resource(&readable)
            || host.resource_kind(&readable)? != ResourceKind::Plain
        {
            return Err(Error::file_not_found(purpose, readable));
        }
        let content = host.read_text(&readable)?;
        Ok((readable, content))
    }
}

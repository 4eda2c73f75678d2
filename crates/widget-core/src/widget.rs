//! Widget front end

use crate::pipeline::{Pipeline, RenderContext};
use crate::{ConfigDocument, Error, Result};
use std::fmt;
use widget_host::ContentHost;

/// How the host lays the widget out in the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
    Single,
    Wide,
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayType::Single => write!(f, "singleline"),
            DisplayType::Wide => write!(f, "wide"),
        }
    }
}

/// Identity and client-side assets of a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetProfile {
    name: String,
    init_call: String,
    css_paths: Vec<String>,
    js_paths: Vec<String>,
}

impl WidgetProfile {
    pub fn new(name: impl Into<String>, init_call: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            init_call: init_call.into(),
            css_paths: Vec::new(),
            js_paths: Vec::new(),
        }
    }

    /// Append a style sheet path (external, absolute or module-relative).
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_paths.push(path.into());
        self
    }

    /// Append a script path (external, absolute or module-relative).
    pub fn with_js(mut self, path: impl Into<String>) -> Self {
        self.js_paths.push(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn init_call(&self) -> &str {
        &self.init_call
    }

    pub fn css_paths(&self) -> &[String] {
        &self.css_paths
    }

    pub fn js_paths(&self) -> &[String] {
        &self.js_paths
    }
}

/// A widget instance bound to one raw configuration string.
///
/// The configuration is parsed once on construction. A missing or broken
/// configuration is logged there and reported again on every render.
#[derive(Debug, Clone)]
pub struct ConfigurableWidget {
    profile: WidgetProfile,
    raw: Option<String>,
    document: Option<ConfigDocument>,
    pipeline: Pipeline,
}

impl ConfigurableWidget {
    pub fn new(profile: WidgetProfile, raw: Option<&str>, pipeline: Pipeline) -> Self {
        let document = match raw {
            None => {
                tracing::warn!(widget = profile.name(), "Widget has no configuration");
                None
            }
            Some(source) => match ConfigDocument::parse(source) {
                Ok(doc) => {
                    tracing::trace!(widget = profile.name(), keys = doc.len(), "Created widget");
                    Some(doc)
                }
                Err(e) => {
                    tracing::error!(widget = profile.name(), error = %e, "Unable to parse widget configuration");
                    None
                }
            },
        };
        Self {
            profile,
            raw: raw.map(str::to_string),
            document,
            pipeline,
        }
    }

    /// The resolved configuration, or a short error message in its place.
    pub fn configuration(&self, ctx: &RenderContext<'_>) -> String {
        match self.try_configuration(ctx) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(widget = self.widget_name(), error = %e, "Widget configuration failed");
                format!("Configuration error: {}", e)
            }
        }
    }

    /// The resolved configuration.
    pub fn try_configuration(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let doc = self.document.clone().ok_or(Error::ConfigMissing)?;
        self.pipeline.resolve(doc, ctx)
    }

    /// Style sheet links, in declaration order.
    pub fn css_resource_links(&self, host: &dyn ContentHost) -> Vec<String> {
        self.links(host, self.profile.css_paths())
    }

    /// Script links, in declaration order.
    pub fn js_resource_links(&self, host: &dyn ContentHost) -> Vec<String> {
        self.links(host, self.profile.js_paths())
    }

    fn links(&self, host: &dyn ContentHost, paths: &[String]) -> Vec<String> {
        paths
            .iter()
            .map(|path| self.pipeline.paths().resource_link(host, path))
            .collect()
    }

    pub fn widget_name(&self) -> &str {
        self.profile.name()
    }

    /// Name of the client-side initialization function.
    pub fn init_call(&self) -> &str {
        self.profile.init_call()
    }

    pub fn display_type(&self) -> DisplayType {
        DisplayType::Wide
    }

    pub fn is_internal(&self) -> bool {
        false
    }

    /// A fresh widget over the same raw configuration.
    pub fn new_instance(&self) -> Self {
        Self::new(
            self.profile.clone(),
            self.raw.as_deref(),
            self.pipeline.clone(),
        )
    }

    pub fn raw_configuration(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The parsed, unresolved document.
    pub fn document(&self) -> Option<&ConfigDocument> {
        self.document.as_ref()
    }

    pub fn profile(&self) -> &WidgetProfile {
        &self.profile
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

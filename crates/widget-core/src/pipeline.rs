//! The resolution pipeline
//!
//! Stages run in a fixed order: config-file redirect, mandatory fields,
//! the injected steps in insertion order, then dynamic values on the
//! serialized text. Each stage takes a document and returns a new one.

use crate::dynamic::DynamicValueResolver;
use crate::mandatory::{FieldSchema, add_mandatory_fields};
use crate::redirect::resolve_config_file;
use crate::{ConfigDocument, EngineSettings, PathResolver, Result};
use std::fmt;
use std::sync::Arc;
use widget_host::{ContentHost, ResourceContext};

/// Per-render inputs supplied by the host.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub host: &'a dyn ContentHost,
    pub field: &'a FieldSchema,
    pub resource: &'a ResourceContext,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        host: &'a dyn ContentHost,
        field: &'a FieldSchema,
        resource: &'a ResourceContext,
    ) -> Self {
        Self {
            host,
            field,
            resource,
        }
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("field", self.field)
            .field("resource", self.resource)
            .finish_non_exhaustive()
    }
}

/// A document transformation injected between mandatory fields and
/// dynamic values.
///
/// Steps handle their own failures: a step that cannot do its work logs
/// the problem and returns the document it was given.
pub trait ResolutionStep: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    fn apply(
        &self,
        doc: ConfigDocument,
        ctx: &RenderContext<'_>,
        paths: &PathResolver,
    ) -> ConfigDocument;
}

/// Ordered composition of the resolution stages.
#[derive(Clone, Default)]
pub struct Pipeline {
    settings: EngineSettings,
    paths: PathResolver,
    dynamic: DynamicValueResolver,
    steps: Vec<Arc<dyn ResolutionStep>>,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("settings", &self.settings)
            .field("dynamic", &self.dynamic)
            .field("steps", &self.step_names())
            .finish()
    }
}

impl Pipeline {
    /// A pipeline without injected steps.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            paths: PathResolver::from_settings(&settings),
            settings,
            dynamic: DynamicValueResolver::default(),
            steps: Vec::new(),
        }
    }

    /// Append an injected step.
    pub fn with_step(mut self, step: impl ResolutionStep + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// Replace the dynamic-value stage, e.g. to fix the clock.
    pub fn with_dynamic(mut self, dynamic: DynamicValueResolver) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn paths(&self) -> &PathResolver {
        &self.paths
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run the document stages: redirect, mandatory fields, injected steps.
    pub fn resolve_document(&self, doc: ConfigDocument, ctx: &RenderContext<'_>) -> ConfigDocument {
        let doc = resolve_config_file(doc, ctx.host, &self.paths);
        let mut doc = add_mandatory_fields(doc, ctx.field, ctx.resource.locale());
        for step in &self.steps {
            tracing::debug!(step = step.name(), "Applying resolution step");
            doc = step.apply(doc, ctx, &self.paths);
        }
        doc
    }

    /// Run every stage and return the final configuration text.
    pub fn resolve(&self, doc: ConfigDocument, ctx: &RenderContext<'_>) -> Result<String> {
        let doc = self.resolve_document(doc, ctx);
        let text = doc.to_json_string()?;
        Ok(self
            .dynamic
            .resolve(&text, ctx.host, ctx.resource, &self.settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use widget_host::{ContentLocale, MemoryHost};

    struct Uppercase(&'static str);

    impl ResolutionStep for Uppercase {
        fn name(&self) -> &str {
            "uppercase"
        }

        fn apply(
            &self,
            mut doc: ConfigDocument,
            _ctx: &RenderContext<'_>,
            _paths: &PathResolver,
        ) -> ConfigDocument {
            if let Some(value) = doc.get_str(self.0).map(str::to_uppercase) {
                doc.insert(self.0, value);
            }
            doc
        }
    }

    fn fixtures() -> (MemoryHost, FieldSchema, ResourceContext) {
        (
            MemoryHost::new(),
            FieldSchema::new("Observation", "Station"),
            ResourceContext::new("/data/obs/42", ContentLocale::new("en")),
        )
    }

    #[test]
    fn test_steps_run_in_order_before_dynamic_values() {
        let (host, field, resource) = fixtures();
        let ctx = RenderContext::new(&host, &field, &resource);
        let pipeline = Pipeline::default()
            .with_step(Uppercase("a"))
            .with_step(Uppercase("name"));
        let doc = ConfigDocument::parse(r#"{"a": "x __SELF"}"#).unwrap();

        // __SELF is uppercased to itself, then resolved
        assert_eq!(
            pipeline.resolve(doc, &ctx).unwrap(),
            r#"{"a":"X /data/obs/42","name":"OBSERVATION:STATION","locale":"en"}"#
        );
        assert_eq!(pipeline.step_names(), vec!["uppercase", "uppercase"]);
    }

    #[test]
    fn test_resolve_document_leaves_notations() {
        let (host, field, resource) = fixtures();
        let ctx = RenderContext::new(&host, &field, &resource);
        let doc = ConfigDocument::parse(r#"{"name": "n", "p": "__CONTENT_LOCALE"}"#).unwrap();
        let resolved = Pipeline::default().resolve_document(doc.clone(), &ctx);
        assert_eq!(resolved, doc);
    }

    #[test]
    fn test_settings_drive_path_resolution() {
        let pipeline = Pipeline::new(EngineSettings::default().with_module_resources("/mod/res"));
        assert_eq!(pipeline.paths().module_resources(), "/mod/res/");
        assert_eq!(pipeline.settings().module_resources, "/mod/res/");
    }
}

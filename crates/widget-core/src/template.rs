//! Template slot resolution
//!
//! A template slot holds either the template body itself or a reference to
//! a file containing it:
//!
//! ```json
//! {"tpl_info": "&lt;b&gt;%(title)&lt;/b&gt;"}
//! {"tpl_info": {"uri": "tpl/station-info.tpl"}}
//! ```
//!
//! References are replaced by the escaped file content. Literal bodies are
//! left alone.

use crate::document::keys;
use crate::escape::xml_attribute_escape;
use crate::pipeline::{RenderContext, ResolutionStep};
use crate::{ConfigDocument, Error, PathResolver, Result};
use serde_json::Value;
use widget_host::ContentHost;

/// Pipeline step resolving a fixed set of template slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStep {
    slots: Vec<String>,
}

impl TemplateStep {
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: slots.into_iter().map(Into::into).collect(),
        }
    }

    /// The slot keys this step inspects, in order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }
}

impl ResolutionStep for TemplateStep {
    fn name(&self) -> &str {
        "templates"
    }

    fn apply(
        &self,
        doc: ConfigDocument,
        ctx: &RenderContext<'_>,
        paths: &PathResolver,
    ) -> ConfigDocument {
        resolve_templates(doc, &self.slots, ctx.host, paths)
    }
}

/// Resolve every listed slot. A broken slot does not affect the others.
pub fn resolve_templates<S: AsRef<str>>(
    mut doc: ConfigDocument,
    slots: &[S],
    host: &dyn ContentHost,
    paths: &PathResolver,
) -> ConfigDocument {
    for slot in slots {
        doc = substitute_template_uri(doc, slot.as_ref(), host, paths);
    }
    doc
}

/// Replace a `{"uri": ...}` template object with the escaped file content.
///
/// Slots that are absent or hold anything other than an object are
/// returned untouched. On a broken reference the error is logged and the
/// object form stays in place.
pub fn substitute_template_uri(
    mut doc: ConfigDocument,
    slot: &str,
    host: &dyn ContentHost,
    paths: &PathResolver,
) -> ConfigDocument {
    let uri = match doc.get(slot) {
        Some(Value::Object(template)) => template.get(keys::TEMPLATE_URI).cloned(),
        _ => return doc,
    };
    match read_template(slot, uri, host, paths) {
        Ok(body) => {
            doc.insert(slot, body);
        }
        Err(e) => {
            tracing::error!(%slot, error = %e, "Unable to insert template from URI found in widget configuration");
        }
    }
    doc
}

fn read_template(
    slot: &str,
    uri: Option<Value>,
    host: &dyn ContentHost,
    paths: &PathResolver,
) -> Result<String> {
    let Some(Value::String(uri)) = uri else {
        return Err(Error::InvalidValue {
            key: format!("{}.{}", slot, keys::TEMPLATE_URI),
            expected: "a string".to_string(),
        });
    };
    let (path, content) = paths.read_plain_text(host, &uri, "template file")?;
    tracing::debug!(%slot, %path, "Substituting template file content");
    Ok(xml_attribute_escape(&content))
}

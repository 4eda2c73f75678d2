//! Dynamic-value notations
//!
//! Notations are placeholders embedded anywhere in the configuration's
//! string values and resolved at render time:
//!
//! | Notation | Replaced by |
//! |---|---|
//! | `__NOW[d MMM yyyy]` | current time in that pattern |
//! | `__NOW[numeric]` | current time as epoch milliseconds |
//! | `__PROP[Title]` | property value of the edited resource |
//! | `__SELF` | root path of the edited resource |
//! | `__CONTENT_LOCALE` | content locale, e.g. `en` |
//!
//! Resolution works on the serialized text. For each kind in
//! [`NotationKind::EVALUATION_ORDER`] every match is computed first and
//! then each matched span is replaced throughout the text. Because spans
//! are replaced literally, notations must not overlap; two `__NOW[...]`
//! notations joined only by grammar characters are matched as one span.

mod datefmt;
mod notation;

pub use datefmt::format_date;
pub use notation::NotationKind;

use crate::EngineSettings;
use crate::escape::json_string_escape;
use chrono::{DateTime, FixedOffset, Local};
use widget_host::{ContentHost, ResourceContext};

/// Source of the current time.
pub type Clock = fn() -> DateTime<FixedOffset>;

/// The local system time.
pub fn system_clock() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Everything a notation handler may consult.
pub struct NotationContext<'a> {
    pub host: &'a dyn ContentHost,
    pub resource: &'a ResourceContext,
    pub settings: &'a EngineSettings,
    pub clock: Clock,
}

/// Substitutes dynamic-value notations in configuration text.
#[derive(Debug, Clone)]
pub struct DynamicValueResolver {
    kinds: Vec<NotationKind>,
    clock: Clock,
}

impl Default for DynamicValueResolver {
    fn default() -> Self {
        Self {
            kinds: NotationKind::EVALUATION_ORDER.to_vec(),
            clock: system_clock,
        }
    }
}

impl DynamicValueResolver {
    /// Resolve only the given kinds, in the given order.
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = NotationKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    /// Use another time source for `__NOW`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn kinds(&self) -> &[NotationKind] {
        &self.kinds
    }

    /// Replace every resolvable notation in `text`.
    ///
    /// An occurrence whose handler fails is logged and left as written.
    /// Replacement values are escaped for a JSON string context.
    pub fn resolve(
        &self,
        text: &str,
        host: &dyn ContentHost,
        resource: &ResourceContext,
        settings: &EngineSettings,
    ) -> String {
        let ctx = NotationContext {
            host,
            resource,
            settings,
            clock: self.clock,
        };
        let mut resolved = text.to_string();
        for &kind in &self.kinds {
            let replacements = collect_replacements(kind, &resolved, &ctx);
            for (notation, value) in replacements {
                resolved = resolved.replace(&notation, &value);
            }
        }
        resolved
    }
}

/// Matched notation text paired with its escaped replacement, in order of
/// first occurrence.
fn collect_replacements(
    kind: NotationKind,
    text: &str,
    ctx: &NotationContext<'_>,
) -> Vec<(String, String)> {
    let mut replacements: Vec<(String, String)> = Vec::new();
    for caps in kind.regex().captures_iter(text) {
        let notation = &caps[0];
        if replacements.iter().any(|(seen, _)| seen == notation) {
            continue;
        }
        let argument = caps.name("arg").map(|m| m.as_str());
        match kind.evaluate(argument, ctx) {
            Ok(value) => {
                tracing::debug!(%notation, %value, "Resolved dynamic value");
                replacements.push((notation.to_string(), json_string_escape(&value)));
            }
            Err(e) => {
                tracing::error!(%notation, error = %e, "Error resolving dynamic value");
            }
        }
    }
    replacements
}

//! String-suggestion widget
//!
//! A text input that suggests values from a remote service while the editor
//! types. Its configuration carries two template slots, `tpl_suggestion` for
//! each suggestion row and `tpl_info` for the details box, which may point
//! at template files instead of holding the markup inline.

use std::ops::Deref;
use widget_core::{ConfigurableWidget, EngineSettings, Pipeline, TemplateStep, WidgetProfile};

/// Widget name reported to the host.
pub const WIDGET_NAME: &str = "StringSuggestWidget";

/// Client-side initialization function.
pub const INIT_CALL: &str = "initStringSuggestWidget";

/// Template slot for a single suggestion.
pub const TEMPLATE_SUGGESTION: &str = "tpl_suggestion";

/// Template slot for the details box.
pub const TEMPLATE_INFO: &str = "tpl_info";

/// Style sheets, in page order.
pub const CSS_PATHS: &[&str] = &[
    "/system/modules/no.npolar.common.jquery/resources/jquery.jqueryui.autocomplete.css",
    "css/string-suggest-widget.css",
];

/// Scripts, in page order.
pub const JS_PATHS: &[&str] = &[
    "//ajax.googleapis.com/ajax/libs/jquery/1.8.3/jquery.min.js",
    "//ajax.googleapis.com/ajax/libs/jqueryui/1.9.1/jquery-ui.min.js",
    "js/underscore-min.js",
    "js/custom-functions.js",
    "js/string-suggest-widget-helpers.js",
    "js/string-suggest-widget.js",
];

/// Name, init call and assets of the widget.
pub fn profile() -> WidgetProfile {
    let profile = WidgetProfile::new(WIDGET_NAME, INIT_CALL);
    let profile = CSS_PATHS.iter().fold(profile, |p, path| p.with_css(*path));
    JS_PATHS.iter().fold(profile, |p, path| p.with_js(*path))
}

/// Template resolution for both slots.
pub fn template_step() -> TemplateStep {
    TemplateStep::new([TEMPLATE_SUGGESTION, TEMPLATE_INFO])
}

/// The standard pipeline plus template resolution.
pub fn pipeline(settings: EngineSettings) -> Pipeline {
    Pipeline::new(settings).with_step(template_step())
}

/// A string-suggestion widget instance.
#[derive(Debug, Clone)]
pub struct StringSuggestWidget {
    inner: ConfigurableWidget,
}

impl StringSuggestWidget {
    /// A widget with default engine settings.
    pub fn new(raw: Option<&str>) -> Self {
        Self::with_pipeline(raw, pipeline(EngineSettings::default()))
    }

    /// A widget over a custom pipeline, e.g. with a fixed clock.
    ///
    /// The pipeline should include [`template_step`].
    pub fn with_pipeline(raw: Option<&str>, pipeline: Pipeline) -> Self {
        tracing::trace!("Creating string suggest widget");
        Self {
            inner: ConfigurableWidget::new(profile(), raw, pipeline),
        }
    }

    /// A fresh widget over the same raw configuration.
    pub fn new_instance(&self) -> Self {
        Self {
            inner: self.inner.new_instance(),
        }
    }
}

impl Deref for StringSuggestWidget {
    type Target = ConfigurableWidget;

    fn deref(&self) -> &ConfigurableWidget {
        &self.inner
    }
}

impl From<StringSuggestWidget> for ConfigurableWidget {
    fn from(widget: StringSuggestWidget) -> Self {
        widget.inner
    }
}

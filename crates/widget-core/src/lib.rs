//! Configuration resolution engine for configurable editor widgets.
//!
//! A widget is configured by a small JSON document. Before the document is
//! handed to client-side code it passes through a fixed pipeline:
//!
//! 1. **Redirect** - a `conf_uri` key replaces the whole document with the
//!    contents of the referenced file ([`redirect`])
//! 2. **Mandatory fields** - `name` and `locale` are added unless a name is
//!    already present ([`mandatory`])
//! 3. **Injected steps** - e.g. template resolution ([`template`]), supplied
//!    by the concrete widget
//! 4. **Dynamic values** - notations such as `__NOW[yyyy]` or `__PROP[Title]`
//!    are substituted in the serialized text ([`dynamic`])
//!
//! Every stage degrades instead of failing: a broken reference is logged and
//! the stage's input is passed on unchanged.
//!
//! # Example
//!
//! ```
//! use widget_core::{ConfigurableWidget, FieldSchema, Pipeline, RenderContext, WidgetProfile};
//! use widget_host::{ContentLocale, MemoryHost, ResourceContext};
//!
//! let host = MemoryHost::new();
//! let field = FieldSchema::new("Observation", "Station");
//! let resource = ResourceContext::new("/data/obs/42", ContentLocale::new("en"));
//!
//! let widget = ConfigurableWidget::new(
//!     WidgetProfile::new("Demo", "initDemo"),
//!     Some(r#"{"path": "__SELF"}"#),
//!     Pipeline::default(),
//! );
//! let ctx = RenderContext::new(&host, &field, &resource);
//! assert_eq!(
//!     widget.configuration(&ctx),
//!     r#"{"path":"/data/obs/42","name":"Observation:Station","locale":"en"}"#
//! );
//! ```

pub mod document;
pub mod dynamic;
pub mod error;
pub mod escape;
pub mod mandatory;
pub mod paths;
pub mod pipeline;
pub mod redirect;
pub mod settings;
pub mod template;
pub mod widget;

pub use document::{ConfigDocument, keys};
pub use dynamic::{DynamicValueResolver, NotationContext, NotationKind};
pub use error::{Error, Result};
pub use mandatory::FieldSchema;
pub use paths::{PathKind, PathResolver};
pub use pipeline::{Pipeline, RenderContext, ResolutionStep};
pub use settings::EngineSettings;
pub use template::TemplateStep;
pub use widget::{ConfigurableWidget, DisplayType, WidgetProfile};

//! Resolve command

use crate::cli::HostArgs;
use crate::commands::{build_widget, engine_settings, open_host};
use crate::error::Result;
use widget_core::{FieldSchema, RenderContext};
use widget_host::{ContentLocale, ResourceContext};

/// Resolve `raw` for the given field and resource and return the output text.
///
/// Unless `strict` is set, failures are reported the way the widget reports
/// them to an editor: as `Configuration error: ...` in place of the output.
pub fn run_resolve(
    args: &HostArgs,
    raw: &str,
    field: &FieldSchema,
    resource: &str,
    locale: &str,
    strict: bool,
) -> Result<String> {
    let host = open_host(args)?;
    let locale: ContentLocale = locale.parse()?;
    let resource = ResourceContext::new(resource, locale);
    let widget = build_widget(
        args.kind,
        Some(raw),
        engine_settings(args.module_base.as_deref()),
    );
    let ctx = RenderContext::new(&host, field, &resource);
    if strict {
        Ok(widget.try_configuration(&ctx)?)
    } else {
        Ok(widget.configuration(&ctx))
    }
}

//! Command implementations for widget-cli

pub mod assets;
pub mod classify;
pub mod resolve;

pub use assets::run_assets;
pub use classify::run_classify;
pub use resolve::run_resolve;

use crate::cli::{HostArgs, WidgetKind};
use crate::error::Result;
use widget_core::{ConfigurableWidget, EngineSettings, Pipeline, WidgetProfile};
use widget_host::FsHost;

/// Engine settings with an optional module resources override.
pub fn engine_settings(module_base: Option<&str>) -> EngineSettings {
    match module_base {
        Some(base) => EngineSettings::default().with_module_resources(base),
        None => EngineSettings::default(),
    }
}

/// Build the widget selected on the command line.
pub fn build_widget(
    kind: WidgetKind,
    raw: Option<&str>,
    settings: EngineSettings,
) -> ConfigurableWidget {
    match kind {
        WidgetKind::Suggest => {
            ConfigurableWidget::new(widget_suggest::profile(), raw, widget_suggest::pipeline(settings))
        }
        WidgetKind::Generic => ConfigurableWidget::new(
            WidgetProfile::new("ConfigurableWidget", "initConfigurableWidget"),
            raw,
            Pipeline::new(settings),
        ),
    }
}

/// Open the directory host named by the arguments.
pub fn open_host(args: &HostArgs) -> Result<FsHost> {
    tracing::debug!(root = %args.root.display(), "Opening content tree");
    Ok(FsHost::open(&args.root)?)
}

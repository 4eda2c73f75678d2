//! Assets command

use colored::Colorize;
use serde_json::json;

use crate::cli::HostArgs;
use crate::commands::{build_widget, engine_settings, open_host};
use crate::error::Result;

/// Style sheet and script links of a widget, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLinks {
    pub widget: String,
    pub css: Vec<String>,
    pub js: Vec<String>,
}

/// Compute the asset links for the widget kind in `args`.
pub fn collect_assets(args: &HostArgs) -> Result<AssetLinks> {
    let host = open_host(args)?;
    let widget = build_widget(args.kind, None, engine_settings(args.module_base.as_deref()));
    Ok(AssetLinks {
        widget: widget.widget_name().to_string(),
        css: widget.css_resource_links(&host),
        js: widget.js_resource_links(&host),
    })
}

/// Run the assets command
pub fn run_assets(args: &HostArgs, as_json: bool) -> Result<()> {
    let assets = collect_assets(args)?;

    if as_json {
        let output = json!({
            "widget": assets.widget,
            "css": assets.css,
            "js": assets.js,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Assets for".bold(), assets.widget.green().bold());
    for (label, links) in [("Style sheets", &assets.css), ("Scripts", &assets.js)] {
        println!();
        println!("{}:", label.cyan().bold());
        if links.is_empty() {
            println!("  {}", "(none)".dimmed());
        }
        for link in links {
            println!("  {}", link);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::WidgetKind;
    use widget_test_utils::TestTree;

    #[test]
    fn test_suggest_assets_use_link_prefix() {
        let tree = TestTree::arctic();
        let assets = collect_assets(&HostArgs {
            root: tree.root().to_path_buf(),
            kind: WidgetKind::Suggest,
            module_base: Some("/system/modules/custom/resources".to_string()),
        })
        .unwrap();

        assert_eq!(assets.widget, "StringSuggestWidget");
        assert_eq!(
            assets.css[1],
            "/opencms/opencms/system/modules/custom/resources/css/string-suggest-widget.css"
        );
        assert_eq!(assets.js[0], "//ajax.googleapis.com/ajax/libs/jquery/1.8.3/jquery.min.js");
        assert_eq!(assets.js.len(), 6);
    }

    #[test]
    fn test_generic_widget_has_no_assets() {
        let tree = TestTree::new();
        let args = HostArgs {
            root: tree.root().to_path_buf(),
            kind: WidgetKind::Generic,
            module_base: None,
        };
        let assets = collect_assets(&args).unwrap();
        assert!(assets.css.is_empty() && assets.js.is_empty());
        assert!(run_assets(&args, true).is_ok());
    }
}

//! Classify command

use colored::Colorize;
use widget_core::{PathKind, PathResolver};
use widget_host::MemoryHost;

use crate::commands::engine_settings;
use crate::error::Result;

/// Classify each path and compute the link it resolves to.
///
/// Links are computed without a link prefix.
pub fn classify(paths: &[String], module_base: Option<&str>) -> Vec<(PathKind, String, String)> {
    let resolver = PathResolver::from_settings(&engine_settings(module_base));
    let host = MemoryHost::new();
    paths
        .iter()
        .map(|path| {
            (
                PathKind::of(path),
                path.clone(),
                resolver.resource_link(&host, path),
            )
        })
        .collect()
}

/// Run the classify command
pub fn run_classify(paths: &[String], module_base: Option<&str>) -> Result<()> {
    for (kind, path, link) in classify(paths, module_base) {
        let label = format!("{:<16}", kind.to_string());
        let label = match kind {
            PathKind::External => label.yellow(),
            PathKind::Absolute => label.cyan(),
            PathKind::ModuleRelative => label.green(),
        };
        if path == link {
            println!("{} {}", label, path);
        } else {
            println!("{} {} {} {}", label, path, "->".dimmed(), link);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mixed_paths() {
        let paths = vec![
            "http://cdn.example.com/x.js".to_string(),
            "js/local.js".to_string(),
        ];
        let result = classify(&paths, Some("/mod/res"));
        assert_eq!(
            result,
            vec![
                (
                    PathKind::External,
                    "http://cdn.example.com/x.js".to_string(),
                    "http://cdn.example.com/x.js".to_string()
                ),
                (
                    PathKind::ModuleRelative,
                    "js/local.js".to_string(),
                    "/mod/res/js/local.js".to_string()
                ),
            ]
        );
    }
}

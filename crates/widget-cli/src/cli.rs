//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Widget - Resolve configurable-widget configurations against a content tree
#[derive(Parser, Debug)]
#[command(name = "widget")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Which widget to build
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetKind {
    /// String-suggestion widget with template slots
    #[default]
    Suggest,
    /// Core pipeline only, no injected steps or assets
    Generic,
}

/// Options shared by commands that read a content tree
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct HostArgs {
    /// Directory acting as repository root
    #[arg(long, env = "WIDGET_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Widget kind
    #[arg(long, value_enum, default_value_t = WidgetKind::Suggest)]
    pub kind: WidgetKind,

    /// Module resources folder for relative paths
    #[arg(long)]
    pub module_base: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a widget configuration and print the result
    ///
    /// Examples:
    ///   widget resolve --config '{"q": "__SELF"}' --resource /data/obs/42
    ///   widget resolve --config-file conf.json --type Observation --field Station
    Resolve {
        #[command(flatten)]
        host: HostArgs,

        /// Raw configuration text
        #[arg(long, conflicts_with = "config_file", required_unless_present = "config_file")]
        config: Option<String>,

        /// File holding the raw configuration
        #[arg(long)]
        config_file: Option<PathBuf>,

        /// Content type name of the edited field
        #[arg(long = "type", default_value = "Content")]
        type_name: String,

        /// Element name of the edited field
        #[arg(long, default_value = "Field")]
        field: String,

        /// Root path of the edited resource
        #[arg(long, default_value = "/")]
        resource: String,

        /// Content locale, e.g. en or en_GB
        #[arg(long, default_value = "en")]
        locale: String,

        /// Exit with an error instead of printing "Configuration error: ..."
        #[arg(long)]
        strict: bool,
    },

    /// List the style sheet and script links of a widget
    Assets {
        #[command(flatten)]
        host: HostArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Classify paths as external, absolute or module-relative
    Classify {
        /// Paths to classify
        #[arg(required = true)]
        paths: Vec<String>,

        /// Module resources folder for relative paths
        #[arg(long)]
        module_base: Option<String>,
    },
}

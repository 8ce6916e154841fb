//! CLI argument parsing for gpkgkit

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gk")]
#[command(author, version, about = "Default GeoPackage discovery and template rendering", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the default .gpkg file (searches ., data/, test_data/)
    Locate {
        /// Base directory to search (default: config base_dir, then working directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Render a Handlebars template to stdout
    Render {
        /// Template file
        #[arg(required = true)]
        template: PathBuf,

        /// YAML or JSON file holding a mapping of template data
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Set a value (KEY=VALUE), overriding the data file
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Do not HTML-escape substituted values
        #[arg(long)]
        raw: bool,
    },
}

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use gpkgkit::cli::{Cli, Command};
use gpkgkit::config::Config;
use gpkgkit::{RenderError, RenderOptions, TemplateRenderer, load_data, locate_gpkg, locate_gpkg_in, parse_assignment};

fn parse_level(level: &str) -> tracing::Level {
    match level.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", level);
            tracing::Level::WARN
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN (stdout is the tool's output)
    let level = cli_log_level
        .or(config_log_level)
        .map(parse_level)
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre!("{}", e))?;

    debug!(?level, "Logging initialized");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("gpkgkit starting");
    debug!(command = ?cli.command, "main: dispatching command");

    match cli.command {
        Command::Locate { dir } => cmd_locate(&config, dir),
        Command::Render {
            template,
            data,
            set,
            raw,
        } => cmd_render(&config, template, data, &set, raw),
    }
}

fn cmd_locate(config: &Config, dir: Option<PathBuf>) -> Result<()> {
    let base = dir.or_else(|| config.base_dir.clone());
    debug!(?base, "cmd_locate: called");

    let found = match &base {
        Some(base) => locate_gpkg_in(base)?,
        None => locate_gpkg()?,
    };

    match found {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(eyre!("No .gpkg file found")),
    }
}

fn cmd_render(config: &Config, template: PathBuf, data: Option<PathBuf>, set: &[String], raw: bool) -> Result<()> {
    debug!(?template, ?data, set_count = set.len(), %raw, "cmd_render: called");

    let source = std::fs::read_to_string(&template)
        .context(format!("Failed to read template {}", template.display()))?;

    let mut values = match &data {
        Some(path) => load_data(path)?,
        None => Default::default(),
    };
    for assignment in set {
        let (key, value) = parse_assignment(assignment)?;
        values.insert(key, value);
    }

    let options = if raw {
        RenderOptions { escape_html: false }
    } else {
        config.render_options()
    };
    let renderer = TemplateRenderer::new(options);

    let mut stdout = std::io::stdout().lock();
    match renderer.render(&source, &values) {
        Ok(bytes) => {
            stdout.write_all(&bytes)?;
            stdout.flush()?;
            Ok(())
        }
        Err(e @ RenderError::Execute { .. }) => {
            let partial = e.partial_output();
            stdout.write_all(partial)?;
            stdout.flush()?;
            eprintln!("{} partial output written ({} bytes)", "!".yellow(), partial.len());
            Err(eyre::Report::new(e).wrap_err(format!("Failed to render {}", template.display())))
        }
        Err(e) => Err(eyre::Report::new(e).wrap_err(format!("Failed to render {}", template.display()))),
    }
}

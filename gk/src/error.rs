//! Error types for locating data files and rendering templates

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating the default GeoPackage
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("Unable to get working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("Base directory {path} is not valid UTF-8")]
    NonUtf8Base { path: PathBuf },
}

/// Errors that can occur while rendering a template
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template source could not be parsed; nothing was rendered
    #[error("Failed to parse template: {0}")]
    Parse(#[from] handlebars::TemplateError),

    /// Rendering failed part way; `partial` holds the output written so far
    #[error("Failed to render template: {source}")]
    Execute {
        partial: Vec<u8>,
        #[source]
        source: handlebars::RenderError,
    },
}

impl RenderError {
    /// Output produced before the failure (always empty for parse errors)
    pub fn partial_output(&self) -> &[u8] {
        match self {
            Self::Parse(_) => &[],
            Self::Execute { partial, .. } => partial,
        }
    }
}

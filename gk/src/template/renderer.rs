//! Handlebars-backed template renderer
//!
//! Rendering happens in two stages. The source is compiled first; a template
//! that fails to compile is never executed. Execution then writes into an
//! in-memory buffer, and if it fails part way the bytes written so far are
//! returned inside [`RenderError::Execute`].
//!
//! Strict mode is always on. A bare expression naming a key that is not in
//! the data (`{{key}}`, `{{a.b}}`) is an execution error, not an empty
//! substitution. The condition of `{{#if missing}}` and `{{#unless missing}}`
//! is not checked and a missing key is simply falsy.

use handlebars::{Handlebars, Template};
use tracing::debug;

use super::value::TemplateData;
use crate::error::RenderError;

const TEMPLATE_NAME: &str = "template";

/// Options controlling how values are substituted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// HTML-escape substituted values (`{{{raw}}}` still bypasses escaping)
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { escape_html: true }
    }
}

/// Renders template sources against [`TemplateData`]
///
/// Holds no per-call state, so one renderer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    options: RenderOptions,
}

impl TemplateRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render `source` against `data` into bytes
    pub fn render(&self, source: &str, data: &TemplateData) -> Result<Vec<u8>, RenderError> {
        debug!(
            source_len = source.len(),
            keys = data.len(),
            escape_html = self.options.escape_html,
            "TemplateRenderer::render: called"
        );

        let template = Template::compile(source).map_err(|e| {
            debug!(%e, "TemplateRenderer::render: compile failed");
            RenderError::Parse(e)
        })?;
        let registry = self.registry(template);

        let mut buf = Vec::new();
        match registry.render_to_write(TEMPLATE_NAME, data, &mut buf) {
            Ok(()) => {
                debug!(bytes = buf.len(), "TemplateRenderer::render: complete");
                Ok(buf)
            }
            Err(source) => {
                debug!(%source, partial_bytes = buf.len(), "TemplateRenderer::render: execution failed");
                Err(RenderError::Execute { partial: buf, source })
            }
        }
    }

    fn registry(&self, template: Template) -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        if !self.options.escape_html {
            hbs.register_escape_fn(handlebars::no_escape);
        }
        hbs.register_template(TEMPLATE_NAME, template);
        hbs
    }
}

/// Render `source` against `data` with default options
pub fn render_template(source: &str, data: &TemplateData) -> Result<Vec<u8>, RenderError> {
    TemplateRenderer::default().render(source, data)
}

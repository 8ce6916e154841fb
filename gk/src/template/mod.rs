//! Template rendering against typed key-value data
//!
//! Templates use Handlebars syntax (`{{Name}}`, `{{#if}}`, `{{#each}}`, ...).

mod data;
mod renderer;
mod value;

pub use data::{load_data, parse_assignment};
pub use renderer::{RenderOptions, TemplateRenderer, render_template};
pub use value::{TemplateData, TemplateValue};

//! GpkgKit - default GeoPackage discovery and template rendering
//!
//! Two small, stateless building blocks for services that serve geospatial
//! data out of a GeoPackage file:
//!
//! - [`locator`] picks a default `.gpkg` data file when none is configured
//! - [`template`] renders Handlebars templates against typed key-value data
//!
//! # Example
//!
//! ```ignore
//! use gpkgkit::{TemplateData, TemplateValue, locate_gpkg_in, render_template};
//!
//! let gpkg = locate_gpkg_in("/srv/features")?;
//!
//! let mut data = TemplateData::new();
//! data.insert("Name".to_string(), TemplateValue::from("World"));
//! let bytes = render_template("Hello, {{Name}}!", &data)?;
//! assert_eq!(bytes, b"Hello, World!");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod locator;
pub mod template;

pub use config::Config;
pub use error::{LocateError, RenderError};
pub use locator::{CANDIDATE_DIRS, GPKG_PATTERN, clean_path, default_gpkg, locate_gpkg, locate_gpkg_in};
pub use template::{
    RenderOptions, TemplateData, TemplateRenderer, TemplateValue, load_data, parse_assignment, render_template,
};

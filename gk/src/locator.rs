//! Default GeoPackage discovery
//!
//! Used when a data source isn't provided. Candidate directories are scanned
//! in decreasing order of priority:
//!
//! 1. the base directory itself
//! 2. `<base>/data`
//! 3. `<base>/test_data`
//!
//! The first directory holding at least one `*.gpkg` match wins, and the
//! lexicographically first match in it is returned as an absolute, cleaned
//! path. Missing directories count as empty.

use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use tracing::{debug, info, warn};

use crate::error::LocateError;

/// Directories to check, relative to the base directory, in priority order
pub const CANDIDATE_DIRS: [&str; 3] = ["", "data", "test_data"];

/// File pattern matched inside each candidate directory
pub const GPKG_PATTERN: &str = "*.gpkg";

/// Resolve the default GeoPackage relative to the process working directory
///
/// Returns the absolute path, or an empty string when no file was found or
/// the working directory could not be determined (the latter is logged).
pub fn default_gpkg() -> String {
    debug!("default_gpkg: called");
    match locate_gpkg() {
        Ok(Some(path)) => path.to_string_lossy().into_owned(),
        Ok(None) => String::new(),
        Err(e) => {
            warn!("{}", e);
            String::new()
        }
    }
}

/// Locate the default GeoPackage under the process working directory
pub fn locate_gpkg() -> Result<Option<PathBuf>, LocateError> {
    let wd = std::env::current_dir().map_err(LocateError::WorkingDir)?;
    locate_gpkg_in(wd)
}

/// Locate the default GeoPackage under `base`
///
/// A relative `base` is resolved against the process working directory.
/// `Ok(None)` means no candidate directory held a match.
pub fn locate_gpkg_in(base: impl AsRef<Path>) -> Result<Option<PathBuf>, LocateError> {
    let base = base.as_ref();
    debug!(?base, "locate_gpkg_in: called");

    let base = if base.is_absolute() {
        clean_path(base)
    } else {
        let wd = std::env::current_dir().map_err(LocateError::WorkingDir)?;
        clean_path(&wd.join(base))
    };

    // Escaped so that metacharacters in the base path match literally
    let escaped_base = match base.to_str() {
        Some(s) => Pattern::escape(s),
        None => return Err(LocateError::NonUtf8Base { path: base }),
    };

    for dir in CANDIDATE_DIRS {
        let mut matches = scan_dir(&escaped_base, dir);
        if matches.is_empty() {
            debug!(%dir, "locate_gpkg_in: no matches, trying next directory");
            continue;
        }

        matches.sort();
        let path = clean_path(&matches[0]);
        info!("Using default gpkg {}", path.display());
        return Ok(Some(path));
    }

    debug!(?base, "locate_gpkg_in: no gpkg found in any candidate directory");
    Ok(None)
}

/// List `*.gpkg` entries of one candidate directory
fn scan_dir(escaped_base: &str, dir: &str) -> Vec<PathBuf> {
    let pattern = Path::new(escaped_base).join(dir).join(GPKG_PATTERN);
    let pattern = pattern.to_string_lossy();
    debug!(%pattern, "scan_dir: executing glob");

    let paths = match glob::glob(&pattern) {
        Ok(paths) => paths,
        // The base is escaped and the rest is constant, so this is a bug
        Err(e) => panic!("Invalid glob pattern hardcoded: {}: {}", pattern, e),
    };

    paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(%e, "scan_dir: skipping unreadable entry");
                None
            }
        })
        .collect()
}

/// Lexically normalize a path
///
/// Drops `.` components, folds `..` into the preceding component and never
/// climbs above the root of an absolute path. The filesystem is not
/// consulted, so symlinks are not resolved. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => cleaned.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    cleaned.pop();
                    depth -= 1;
                } else if !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            Component::Normal(name) => {
                cleaned.push(name);
                depth += 1;
            }
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

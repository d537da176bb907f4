//! # Config Files
//!
//! Slab configurations are stored as human-readable JSON. Missing fields
//! take the reference defaults, so a config file can be as small as `{}`.
//!
//! - **Atomic saves**: write to `.tmp`, sync, rename
//! - **Version validation**: the `version` field must be schema compatible
//!
//! ## Example
//!
//! ```rust,no_run
//! use slab_core::config::SlabConfig;
//! use slab_core::file_io::{load_config, save_config};
//! use std::path::Path;
//!
//! let path = Path::new("slab.json");
//! save_config(&SlabConfig::default(), path)?;
//! let config = load_config(path)?;
//! assert_eq!(config.stations, 20);
//! # Ok::<(), slab_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::config::{SlabConfig, SCHEMA_VERSION};
use crate::errors::{CalcError, CalcResult};

/// Save a config to a file using an atomic write.
pub fn save_config(config: &SlabConfig, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(config).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.write_all(b"\n").map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!("Wrote config to {}", path.display());
    Ok(())
}

/// Load a config from a file.
///
/// # Returns
///
/// * `Ok(SlabConfig)` - Parsed config (not yet validated physically)
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_config(path: &Path) -> CalcResult<SlabConfig> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let config: SlabConfig =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&config.version)?;

    debug!("Loaded config '{}' from {}", config.label, path.display());
    Ok(config)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x, a newer minor may carry fields we don't understand
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

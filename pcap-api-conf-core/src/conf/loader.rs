use crate::conf::parse::{PropertyFormat, parse_properties};
use crate::conf::resolve::{ResolveOptions, ValidatedConfig, resolve};
use crate::conf::types::{InstanceSpec, PropertyFile};
use crate::conf::ConfigError;

use std::fs;
use std::path::Path;

/// Load a property file and resolve it.
///
/// `instance_id` overrides the instance metadata carried by the file.
pub fn load_config(
    path: &Path,
    instance_id: Option<String>,
    options: &ResolveOptions,
) -> Result<ValidatedConfig, ConfigError> {
    let file = load_property_file(path)?;

    let instance = InstanceSpec {
        id: instance_id.or(file.spec.id),
    };

    resolve(file.pcap_api, &instance, options)
}

pub fn load_property_file(path: &Path) -> Result<PropertyFile, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let format = PropertyFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let file = parse_properties(&s, format, path)?;
    tracing::debug!(path = %path.display(), ?format, "loaded property file");

    Ok(file)
}

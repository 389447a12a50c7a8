use crate::conf::ConfigError;
use crate::conf::types::PropertyFile;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyFormat {
    Yaml,
    Json,
    Hcl,
}

impl PropertyFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "hcl" => Some(Self::Hcl),
            _ => None,
        }
    }
}

/// Parse a render-context document. `origin` only labels errors.
pub fn parse_properties(
    s: &str,
    format: PropertyFormat,
    origin: &Path,
) -> Result<PropertyFile, ConfigError> {
    match format {
        PropertyFormat::Yaml => serde_yaml::from_str(s).map_err(|e| ConfigError::parse(origin, e)),
        PropertyFormat::Json => serde_json::from_str(s).map_err(|e| ConfigError::parse(origin, e)),
        PropertyFormat::Hcl => hcl::from_str(s).map_err(|e| ConfigError::parse(origin, e)),
    }
}

use crate::conf::ConfigError;
use crate::conf::types::ResolvedConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Name of the document inside the config root.
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Yaml => "pcap-api.yml",
            OutputFormat::Json => "pcap-api.json",
        }
    }
}

/// Serialize the resolved document. Key order follows the struct layout, so
/// equal configs always produce identical bytes.
pub fn serialize_config(
    config: &ResolvedConfig,
    format: OutputFormat,
) -> Result<String, ConfigError> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(config).map_err(|e| ConfigError::Serialize {
            reason: e.to_string(),
        }),
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
                reason: e.to_string(),
            })
        }
    }
}

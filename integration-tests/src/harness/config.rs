use pcap_api_conf_core::conf::{
    ConfigError, OutputFormat, ResolveOptions, ValidatedConfig, load_config,
};
use std::path::PathBuf;

/// Instance uuid used by every fixture render.
pub const INSTANCE_ID: &str = "f9281cda-1234-bbcd-ef12-1337cafe0048";

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Resolve a fixture with the default config root.
pub fn render_fixture(file: &str) -> Result<ValidatedConfig, ConfigError> {
    load_config(
        &fixture_path(file),
        Some(INSTANCE_ID.to_string()),
        &ResolveOptions::default(),
    )
}

/// Resolve a fixture and read the YAML document back as a generic tree.
pub fn render_fixture_document(file: &str) -> serde_yaml::Value {
    let validated =
        render_fixture(file).unwrap_or_else(|e| panic!("fixture {file} must resolve: {e}"));
    let rendered = validated
        .to_document(OutputFormat::Yaml)
        .expect("failed to serialize document");
    serde_yaml::from_str(&rendered).expect("rendered document is not valid YAML")
}

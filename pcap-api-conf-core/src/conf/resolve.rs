use crate::conf::defaults::apply_defaults;
use crate::conf::lower::lower_spec;
use crate::conf::paths::{DEFAULT_CONFIG_ROOT, MaterialPaths};
use crate::conf::serialize::{OutputFormat, serialize_config};
use crate::conf::types::{InstanceSpec, MaterialPlan, PropertySpec, ResolvedConfig};
use crate::conf::validation::{ValidationReport, validate_spec};
use crate::conf::ConfigError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Directory the material paths are rooted at.
    pub config_root: PathBuf,
}

impl ResolveOptions {
    pub fn with_config_root(config_root: impl Into<PathBuf>) -> Self {
        Self {
            config_root: config_root.into(),
        }
    }

    pub fn paths(&self) -> MaterialPaths {
        MaterialPaths::new(&self.config_root)
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::with_config_root(DEFAULT_CONFIG_ROOT)
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub config: ResolvedConfig,
    pub materials: MaterialPlan,
    pub validation: ValidationReport,
}

impl ValidatedConfig {
    pub fn to_document(&self, format: OutputFormat) -> Result<String, ConfigError> {
        serialize_config(&self.config, format)
    }
}

/// Resolve `pcap-api` properties into the runtime configuration.
///
/// Pure and synchronous: defaults, then validation, then materialization.
/// Nothing is written to disk.
pub fn resolve(
    properties: PropertySpec,
    instance: &InstanceSpec,
    options: &ResolveOptions,
) -> Result<ValidatedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Defaults
    //--------------------------------------------------------------------------
    let defaulted = apply_defaults(properties);
    tracing::debug!(
        log_level = %defaulted.log_level,
        port = defaulted.listen.port,
        enable_ip_restriction = defaulted.enable_ip_restriction,
        "applied property defaults"
    );

    //--------------------------------------------------------------------------
    // Validation (fail fast on the first violated rule)
    //--------------------------------------------------------------------------
    let (validated, validation) = validate_spec(defaulted).inspect_err(|e| {
        tracing::debug!(kind = ?e.kind(), error = %e, "property validation failed");
    })?;

    //--------------------------------------------------------------------------
    // Materialization
    //--------------------------------------------------------------------------
    let (config, materials) = lower_spec(validated, instance, &options.paths())?;
    tracing::debug!(
        id = %config.id,
        tls = config.listen.tls.is_some(),
        material_files = materials.len(),
        warnings = validation.warnings.len(),
        "resolved pcap-api configuration"
    );

    Ok(ValidatedConfig {
        config,
        materials,
        validation,
    })
}

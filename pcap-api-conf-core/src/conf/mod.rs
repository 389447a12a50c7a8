mod defaults;
mod error;
mod loader;
mod lower;
mod parse;
mod paths;
mod resolve;
mod serialize;
#[cfg(test)]
mod tests;
pub mod types;
pub(crate) mod validation;

pub use defaults::{
    DEFAULT_ENABLE_IP_RESTRICTION, DEFAULT_LISTEN_PORT, DEFAULT_LOG_LEVEL, apply_defaults,
};
pub use error::{ConfigError, ErrorKind};
pub use loader::{load_config, load_property_file};
pub use lower::{ID_PREFIX, lower_spec};
pub use parse::{PropertyFormat, parse_properties};
pub use paths::{DEFAULT_CONFIG_ROOT, MaterialPaths};
pub use resolve::{ResolveOptions, ValidatedConfig, resolve};
pub use serialize::{OutputFormat, serialize_config};
pub use types::ResolvedConfig;
pub use validation::{
    TlsMaterial, ValidatedBosh, ValidatedSpec, ValidationIssue, ValidationReport, validate_spec,
};

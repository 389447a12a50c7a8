use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidIdentifier,
    ConflictingConfiguration,
    InvalidBufferBounds,
    IncompleteTlsMaterial,
    IncompleteMtlsMaterial,
    InvalidConcurrentCaptures,
    Load,
    Serialize,
    Io,
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Loading
    //-------------------------------------------------------------------------
    #[error("failed to read property file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported property file format: {path} (expected .yml, .yaml, .json or .hcl)")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid property file: {path}\n\n{reason}")]
    Parse { path: PathBuf, reason: String },

    //-------------------------------------------------------------------------
    // Resolution
    //-------------------------------------------------------------------------
    #[error("invalid instance identifier: {reason}")]
    #[diagnostic(code(pcap_api::invalid_identifier))]
    InvalidIdentifier { reason: String },

    #[error(
        "Conflicting configuration: pcap-api.enable_ip_restriction is true, please provide a non-empty cidr allowlist"
    )]
    #[diagnostic(code(pcap_api::conflicting_configuration))]
    ConflictingConfiguration,

    #[error(
        "invalid buffer bounds: lower_limit ({lower_limit}) < upper_limit ({upper_limit}) <= size ({size}) does not hold"
    )]
    #[diagnostic(code(pcap_api::invalid_buffer_bounds))]
    InvalidBufferBounds {
        size: u64,
        upper_limit: u64,
        lower_limit: u64,
    },

    #[error("incomplete TLS material for pcap-api.listen.tls, missing: {}", missing.join(", "))]
    #[diagnostic(code(pcap_api::incomplete_tls_material))]
    IncompleteTlsMaterial { missing: Vec<&'static str> },

    #[error("incomplete mTLS material for pcap-api.bosh.mtls, missing: {}", missing.join(", "))]
    #[diagnostic(code(pcap_api::incomplete_mtls_material))]
    IncompleteMtlsMaterial { missing: Vec<&'static str> },

    #[error("invalid pcap-api.concurrent_captures: {value} (must be greater than zero)")]
    #[diagnostic(code(pcap_api::invalid_concurrent_captures))]
    InvalidConcurrentCaptures { value: u32 },

    //-------------------------------------------------------------------------
    // Output
    //-------------------------------------------------------------------------
    #[error("failed to serialize resolved configuration: {reason}")]
    Serialize { reason: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            reason: source.to_string(),
        }
    }

    pub fn invalid_identifier(reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::ReadFile { .. }
            | ConfigError::UnsupportedFormat { .. }
            | ConfigError::Parse { .. } => ErrorKind::Load,
            ConfigError::WriteFile { .. } => ErrorKind::Io,
            ConfigError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            ConfigError::ConflictingConfiguration => ErrorKind::ConflictingConfiguration,
            ConfigError::InvalidBufferBounds { .. } => ErrorKind::InvalidBufferBounds,
            ConfigError::IncompleteTlsMaterial { .. } => ErrorKind::IncompleteTlsMaterial,
            ConfigError::IncompleteMtlsMaterial { .. } => ErrorKind::IncompleteMtlsMaterial,
            ConfigError::InvalidConcurrentCaptures { .. } => ErrorKind::InvalidConcurrentCaptures,
            ConfigError::Serialize { .. } => ErrorKind::Serialize,
        }
    }
}

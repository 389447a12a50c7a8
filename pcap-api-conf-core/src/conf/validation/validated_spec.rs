use crate::conf::types::{BufferSpec, MtlsConfig};
use std::fmt;

/// A property tree that passed every cross-field rule. Optional blocks are
/// narrowed to their complete forms.
#[derive(Debug, Clone)]
pub struct ValidatedSpec {
    pub id: Option<String>,
    pub log_level: String,
    pub concurrent_captures: Option<u32>,
    pub buffer: Option<BufferSpec>,
    pub port: u16,
    pub tls: Option<TlsMaterial>,
    pub bosh: Option<ValidatedBosh>,

    /// Non-empty whenever IP restriction is enabled, `None` otherwise.
    pub cidr_allowlist: Option<Vec<String>>,
}

impl ValidatedSpec {
    pub fn enable_ip_restriction(&self) -> bool {
        self.cidr_allowlist.is_some()
    }
}

/// Complete TLS material for the API listener.
#[derive(Clone, PartialEq, Eq)]
pub struct TlsMaterial {
    pub certificate: String,
    pub private_key: String,
    pub ca: String,
}

impl fmt::Debug for TlsMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsMaterial").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBosh {
    pub agent_port: u16,
    pub director_url: String,
    pub token_scope: String,
    pub mtls: Option<MtlsConfig>,
}

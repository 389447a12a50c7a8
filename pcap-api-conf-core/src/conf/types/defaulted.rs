use crate::conf::types::{BoshSpec, BufferSpec, TlsSpec};
use std::collections::BTreeMap;

/// Property tree after defaulting: every recognized optional key that has a
/// default is populated, optional blocks stay optional.
#[derive(Debug, Clone)]
pub struct DefaultedSpec {
    pub id: Option<String>,
    pub log_level: String,
    pub concurrent_captures: Option<u32>,
    pub buffer: Option<BufferSpec>,
    pub listen: DefaultedListen,
    pub bosh: Option<BoshSpec>,
    pub enable_ip_restriction: bool,
    pub cidr_allowlist: Option<Vec<String>>,
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone)]
pub struct DefaultedListen {
    pub port: u16,

    /// `None` when TLS was disabled or no material was supplied.
    pub tls: Option<TlsSpec>,
}

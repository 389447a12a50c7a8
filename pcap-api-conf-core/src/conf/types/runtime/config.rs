use crate::conf::types::{BoshConfig, ListenConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The configuration document consumed by pcap-api at startup.
///
/// Field order is the serialized key order. Optional blocks are skipped,
/// never written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolvedConfig {
    /// `pcap-api/<instance uuid>`
    pub id: String,

    pub log_level: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrent_captures: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<BufferConfig>,

    pub listen: ListenConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bosh: Option<BoshConfig>,

    pub enable_ip_restriction: bool,

    /// Path of the file holding the allowlisted CIDRs, one per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_allowlist: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BufferConfig {
    pub size: u64,
    pub upper_limit: u64,
    pub lower_limit: u64,
}

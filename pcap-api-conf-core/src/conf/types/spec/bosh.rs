use crate::conf::types::spec::flag::lenient_bool;
use serde::Deserialize;

/// How pcap-api reaches the BOSH director and agents.
#[derive(Debug, Clone, Deserialize)]
pub struct BoshSpec {
    pub agent_port: u16,
    pub director_url: String,
    pub token_scope: String,
    pub mtls: Option<MtlsSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MtlsSpec {
    pub common_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub skip_verify: Option<bool>,
}

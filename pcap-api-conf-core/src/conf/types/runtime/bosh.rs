use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoshConfig {
    pub agent_port: u16,
    pub director_url: String,
    pub token_scope: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtls: Option<MtlsConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MtlsConfig {
    pub common_name: String,
    pub skip_verify: bool,
}

use crate::conf::types::spec::flag::lenient_bool;
use crate::conf::types::{BoshSpec, BufferSpec, ListenSpec};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A render-context document: the `pcap-api` property block plus the
/// metadata of the instance being rendered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyFile {
    #[serde(rename = "pcap-api", default)]
    pub pcap_api: PropertySpec,

    #[serde(default)]
    pub spec: InstanceSpec,
}

/// Instance metadata supplied by the deployment tooling.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct InstanceSpec {
    pub id: Option<String>,
}

impl InstanceSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// The operator-facing `pcap-api` properties, as written in the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySpec {
    /// Instance id, used when the render context carries no instance metadata.
    pub id: Option<String>,

    pub log_level: Option<String>,

    pub concurrent_captures: Option<u32>,

    pub buffer: Option<BufferSpec>,

    pub listen: Option<ListenSpec>,

    pub bosh: Option<BoshSpec>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub enable_ip_restriction: Option<bool>,

    /// Literal CIDR ranges allowed to use the API.
    pub cidr_allowlist: Option<Vec<String>>,

    /// Keys this version does not know about.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

use std::path::PathBuf;

/// Where the job's rendered configuration lives on a deployed instance.
pub const DEFAULT_CONFIG_ROOT: &str = "/var/vcap/jobs/pcap-api/config";

const CERTS_DIR: &str = "certs";
const CERTIFICATE_FILE: &str = "pcap-api.crt";
const PRIVATE_KEY_FILE: &str = "pcap-api.key";
const CLIENT_CAS_FILE: &str = "pcap-api-ca.crt";
const CIDR_ALLOWLIST_FILE: &str = "allowlist_cidrs.txt";

/// Canonical locations of the material files under a config root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialPaths {
    root: PathBuf,
}

impl MaterialPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn certificate(&self) -> PathBuf {
        self.root.join(CERTS_DIR).join(CERTIFICATE_FILE)
    }

    pub fn private_key(&self) -> PathBuf {
        self.root.join(CERTS_DIR).join(PRIVATE_KEY_FILE)
    }

    pub fn client_cas(&self) -> PathBuf {
        self.root.join(CERTS_DIR).join(CLIENT_CAS_FILE)
    }

    pub fn cidr_allowlist(&self) -> PathBuf {
        self.root.join(CIDR_ALLOWLIST_FILE)
    }
}

impl Default for MaterialPaths {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_ROOT)
    }
}

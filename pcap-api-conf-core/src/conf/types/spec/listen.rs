use crate::conf::types::spec::flag::lenient_bool;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListenSpec {
    pub port: Option<u16>,
    pub tls: Option<TlsSpec>,
}

/// Inline TLS material for the API listener.
#[derive(Clone, Default, Deserialize)]
pub struct TlsSpec {
    /// Explicit switch. `false` disables TLS even when material is present.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub enabled: Option<bool>,

    /// PEM encoded server certificate.
    pub certificate: Option<String>,

    /// PEM encoded private key.
    pub private_key: Option<String>,

    /// PEM encoded CA bundle used to verify clients.
    pub ca: Option<String>,
}

impl TlsSpec {
    pub fn is_disabled(&self) -> bool {
        self.enabled == Some(false)
    }

    pub fn has_material(&self) -> bool {
        [&self.certificate, &self.private_key, &self.ca]
            .iter()
            .any(|m| m.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

impl fmt::Debug for TlsSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |m: &Option<String>| m.as_ref().map(|_| "<redacted>");
        f.debug_struct("TlsSpec")
            .field("enabled", &self.enabled)
            .field("certificate", &redact(&self.certificate))
            .field("private_key", &redact(&self.private_key))
            .field("ca", &redact(&self.ca))
            .finish()
    }
}

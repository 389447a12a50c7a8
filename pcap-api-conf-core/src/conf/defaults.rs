use crate::conf::types::{DefaultedListen, DefaultedSpec, PropertySpec, TlsSpec};

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LISTEN_PORT: u16 = 8080;
pub const DEFAULT_ENABLE_IP_RESTRICTION: bool = false;

/// Fill every omitted optional property with its default.
///
/// Pure: unknown keys are carried over untouched in `extra`.
pub fn apply_defaults(spec: PropertySpec) -> DefaultedSpec {
    let listen = spec.listen.unwrap_or_default();

    DefaultedSpec {
        id: spec.id,
        log_level: spec
            .log_level
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        concurrent_captures: spec.concurrent_captures,
        buffer: spec.buffer,
        listen: DefaultedListen {
            port: listen.port.unwrap_or(DEFAULT_LISTEN_PORT),
            tls: listen.tls.filter(tls_requested),
        },
        bosh: spec.bosh,
        enable_ip_restriction: spec
            .enable_ip_restriction
            .unwrap_or(DEFAULT_ENABLE_IP_RESTRICTION),
        cidr_allowlist: spec.cidr_allowlist,
        extra: spec.extra,
    }
}

/// A TLS block survives defaulting when it is not switched off and either
/// carries material or explicitly asks for TLS.
fn tls_requested(tls: &TlsSpec) -> bool {
    !tls.is_disabled() && (tls.has_material() || tls.enabled == Some(true))
}

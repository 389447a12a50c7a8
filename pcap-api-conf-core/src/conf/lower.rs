use crate::conf::ConfigError;
use crate::conf::paths::MaterialPaths;
use crate::conf::types::{
    BoshConfig, BufferConfig, InstanceSpec, ListenConfig, MaterialKind, MaterialPlan,
    ResolvedConfig, TlsConfig,
};
use crate::conf::validation::{TlsMaterial, ValidatedSpec};
use uuid::Uuid;

pub const ID_PREFIX: &str = "pcap-api/";

/// Transform a validated property tree into the runtime configuration.
///
/// Material (certificates, allowlist) is replaced by its canonical path and
/// moved into the returned plan, which a collaborator writes to disk.
pub fn lower_spec(
    spec: ValidatedSpec,
    instance: &InstanceSpec,
    paths: &MaterialPaths,
) -> Result<(ResolvedConfig, MaterialPlan), ConfigError> {
    let id = materialize_id(instance.id.as_deref().or(spec.id.as_deref()))?;
    let enable_ip_restriction = spec.enable_ip_restriction();

    let mut plan = MaterialPlan::default();

    let tls = spec
        .tls
        .map(|material| materialize_tls(material, paths, &mut plan));

    let cidr_allowlist = spec.cidr_allowlist.map(|cidrs| {
        let path = paths.cidr_allowlist();
        plan.push(MaterialKind::CidrAllowlist, path.clone(), allowlist_contents(&cidrs));
        path
    });

    let config = ResolvedConfig {
        id,
        log_level: spec.log_level,
        concurrent_captures: spec.concurrent_captures,
        buffer: spec.buffer.map(|b| BufferConfig {
            size: b.size,
            upper_limit: b.upper_limit,
            lower_limit: b.lower_limit,
        }),
        listen: ListenConfig {
            port: spec.port,
            tls,
        },
        bosh: spec.bosh.map(|bosh| BoshConfig {
            agent_port: bosh.agent_port,
            director_url: bosh.director_url,
            token_scope: bosh.token_scope,
            mtls: bosh.mtls,
        }),
        enable_ip_restriction,
        cidr_allowlist,
    };

    Ok((config, plan))
}

/// `pcap-api/<uuid>`, keeping the uuid as spelled by the deployment.
fn materialize_id(id: Option<&str>) -> Result<String, ConfigError> {
    let id = id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ConfigError::invalid_identifier("instance id is missing"))?;

    // Only the hyphenated 8-4-4-4-12 form is accepted.
    let parsed = Uuid::try_parse(id)
        .map_err(|e| ConfigError::invalid_identifier(format!("'{id}' is not a uuid: {e}")))?;
    if parsed.hyphenated().to_string() != id.to_ascii_lowercase() {
        return Err(ConfigError::invalid_identifier(format!(
            "'{id}' is not a hyphenated uuid"
        )));
    }

    Ok(format!("{ID_PREFIX}{id}"))
}

fn materialize_tls(
    material: TlsMaterial,
    paths: &MaterialPaths,
    plan: &mut MaterialPlan,
) -> TlsConfig {
    let tls = TlsConfig {
        certificate: paths.certificate(),
        private_key: paths.private_key(),
        client_cas: paths.client_cas(),
    };

    plan.push(MaterialKind::Certificate, tls.certificate.clone(), material.certificate);
    plan.push(MaterialKind::PrivateKey, tls.private_key.clone(), material.private_key);
    plan.push(MaterialKind::ClientCas, tls.client_cas.clone(), material.ca);

    tls
}

fn allowlist_contents(cidrs: &[String]) -> String {
    cidrs.iter().map(|c| format!("{}\n", c.trim())).collect()
}

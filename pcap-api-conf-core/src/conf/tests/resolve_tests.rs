use crate::conf::tests::test_helpers::{
    BASE_PROPERTIES, INSTANCE_ID, document, properties, resolve_yaml,
};
use crate::conf::types::{BufferConfig, InstanceSpec, MaterialKind, MtlsConfig};
use crate::conf::{ErrorKind, OutputFormat, ResolveOptions, resolve};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

const CONFLICTING_ALLOWLIST: &str = "Conflicting configuration: pcap-api.enable_ip_restriction is true, please provide a non-empty cidr allowlist";

fn with_base(extra: &str) -> String {
    format!("{BASE_PROPERTIES}{extra}")
}

//-----------------------------------------------------------------------------
// Global properties
//-----------------------------------------------------------------------------

#[test]
fn id_is_prefixed_instance_id() {
    // Act
    let validated = resolve_yaml(BASE_PROPERTIES).unwrap();

    // Assert
    assert_eq!(
        validated.config.id,
        "pcap-api/f9281cda-1234-bbcd-ef12-1337cafe0048"
    );
}

#[test]
fn log_level_defaults_to_info() {
    // Act
    let validated = resolve_yaml(BASE_PROPERTIES).unwrap();

    // Assert
    assert_eq!(validated.config.log_level, "info");
}

#[test]
fn log_level_is_passed_through_verbatim() {
    // Arrange
    let yaml = with_base("  log_level: debug\n");

    // Act
    let validated = resolve_yaml(&yaml).unwrap();

    // Assert
    assert_eq!(validated.config.log_level, "debug");
}

#[test]
fn concurrent_captures_is_passed_through() {
    // Act
    let validated = resolve_yaml(BASE_PROPERTIES).unwrap();

    // Assert
    assert_eq!(validated.config.concurrent_captures, Some(10));
}

#[test]
fn zero_concurrent_captures_is_rejected() {
    // Arrange
    let yaml = r#"
pcap-api:
  concurrent_captures: 0
"#;

    // Act
    let err = resolve_yaml(yaml).unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::InvalidConcurrentCaptures);
}

//-----------------------------------------------------------------------------
// Listen
//-----------------------------------------------------------------------------

#[test]
fn listen_port_defaults_to_8080() {
    // Act
    let validated = resolve_yaml(BASE_PROPERTIES).unwrap();

    // Assert
    assert_eq!(validated.config.listen.port, 8080);
}

#[test]
fn listen_port_is_configurable() {
    // Arrange
    let yaml = with_base("  listen:\n    port: 8082\n");

    // Act
    let validated = resolve_yaml(&yaml).unwrap();

    // Assert
    assert_eq!(validated.config.listen.port, 8082);
}

#[test]
fn disabled_platform_tls_omits_tls_key() {
    // Arrange
    let yaml = with_base(
        r#"  listen:
    tls:
      enabled: 'false'
"#,
    );

    // Act
    let doc = document(&yaml);

    // Assert
    assert!(doc["listen"].get("tls").is_none());
    assert_eq!(doc["listen"]["port"].as_u64(), Some(8080));
}

#[test]
fn tls_material_is_materialized_to_paths() {
    // Arrange
    let yaml = with_base(
        r#"  listen:
    tls:
      certificate: test-cert
      private_key: test-key
      ca: test-ca
"#,
    );

    // Act
    let validated = resolve_yaml(&yaml).unwrap();

    // Assert
    let tls = validated.config.listen.tls.as_ref().unwrap();
    assert_eq!(
        tls.certificate,
        PathBuf::from("/var/vcap/jobs/pcap-api/config/certs/pcap-api.crt")
    );
    assert_eq!(
        tls.private_key,
        PathBuf::from("/var/vcap/jobs/pcap-api/config/certs/pcap-api.key")
    );
    assert_eq!(
        tls.client_cas,
        PathBuf::from("/var/vcap/jobs/pcap-api/config/certs/pcap-api-ca.crt")
    );

    let rendered = validated.to_document(OutputFormat::Yaml).unwrap();
    assert!(!rendered.contains("test-cert"));
    assert!(!rendered.contains("test-key"));
    assert!(!rendered.contains("test-ca"));
}

#[test]
fn tls_material_lands_in_material_plan() {
    // Arrange
    let yaml = with_base(
        r#"  listen:
    tls:
      certificate: test-cert
      private_key: test-key
      ca: test-ca
"#,
    );

    // Act
    let validated = resolve_yaml(&yaml).unwrap();

    // Assert
    let key = validated.materials.get(MaterialKind::PrivateKey).unwrap();
    assert_eq!(key.contents, "test-key");
    assert_eq!(
        Some(&key.path),
        validated
            .config
            .listen
            .tls
            .as_ref()
            .map(|tls| &tls.private_key)
    );
    assert_eq!(validated.materials.len(), 3);
}

#[test]
fn partial_tls_material_is_rejected() {
    // Arrange
    let yaml = with_base(
        r#"  listen:
    tls:
      certificate: test-cert
"#,
    );

    // Act
    let err = resolve_yaml(&yaml).unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::IncompleteTlsMaterial);
    assert!(err.to_string().contains("private_key, ca"));
}

//-----------------------------------------------------------------------------
// Buffer
//-----------------------------------------------------------------------------

#[test]
fn buffer_values_are_passed_through_verbatim() {
    // Arrange
    let yaml = r#"
pcap-api:
  buffer:
    size: 500
    upper_limit: 498
    lower_limit: 450
"#;

    // Act
    let validated = resolve_yaml(yaml).unwrap();

    // Assert
    assert_eq!(
        validated.config.buffer,
        Some(BufferConfig {
            size: 500,
            upper_limit: 498,
            lower_limit: 450,
        })
    );
}

#[test]
fn buffer_upper_limit_above_size_is_rejected() {
    // Arrange
    let yaml = r#"
pcap-api:
  buffer:
    size: 100
    upper_limit: 101
    lower_limit: 90
"#;

    // Act
    let err = resolve_yaml(yaml).unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::InvalidBufferBounds);
}

//-----------------------------------------------------------------------------
// IP restriction
//-----------------------------------------------------------------------------

#[test]
fn ip_restriction_materializes_allowlist_path() {
    // Arrange
    let yaml = with_base(
        r#"  enable_ip_restriction: true
  cidr_allowlist:
    - 10.10.10.10/32
"#,
    );

    // Act
    let validated = resolve_yaml(&yaml).unwrap();

    // Assert
    assert!(validated.config.enable_ip_restriction);
    assert_eq!(
        validated.config.cidr_allowlist,
        Some(PathBuf::from(
            "/var/vcap/jobs/pcap-api/config/allowlist_cidrs.txt"
        ))
    );
    let allowlist = validated.materials.get(MaterialKind::CidrAllowlist).unwrap();
    assert_eq!(allowlist.contents, "10.10.10.10/32\n");
}

#[test]
fn ip_restriction_without_allowlist_fails() {
    // Arrange
    let yaml = with_base("  enable_ip_restriction: true\n");

    // Act
    let err = resolve_yaml(&yaml).unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::ConflictingConfiguration);
    assert_eq!(err.to_string(), CONFLICTING_ALLOWLIST);
}

#[test]
fn ip_restriction_with_empty_allowlist_fails() {
    // Arrange
    let yaml = with_base("  enable_ip_restriction: true\n  cidr_allowlist: []\n");

    // Act
    let err = resolve_yaml(&yaml).unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::ConflictingConfiguration);
    assert_eq!(err.to_string(), CONFLICTING_ALLOWLIST);
}

#[test]
fn ip_restriction_with_blank_allowlist_fails() {
    // Arrange
    let yaml = with_base("  enable_ip_restriction: true\n  cidr_allowlist: [\"\"]\n");

    // Act
    let err = resolve_yaml(&yaml).unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::ConflictingConfiguration);
    assert_eq!(err.to_string(), CONFLICTING_ALLOWLIST);
}

#[test]
fn disabled_ip_restriction_omits_allowlist_key() {
    // Arrange
    let yaml = with_base(
        r#"  enable_ip_restriction: false
  cidr_allowlist:
    - 10.10.10.10/32
"#,
    );

    // Act
    let doc = document(&yaml);

    // Assert
    assert_eq!(doc["enable_ip_restriction"].as_bool(), Some(false));
    assert!(doc.get("cidr_allowlist").is_none());
}

#[test]
fn ip_restriction_is_checked_before_buffer_bounds() {
    // Arrange
    let yaml = r#"
pcap-api:
  enable_ip_restriction: true
  buffer:
    size: 1
    upper_limit: 2
    lower_limit: 3
"#;

    // Act
    let err = resolve_yaml(yaml).unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::ConflictingConfiguration);
}

//-----------------------------------------------------------------------------
// BOSH
//-----------------------------------------------------------------------------

#[test]
fn bosh_without_mtls_omits_mtls_key() {
    // Arrange
    let yaml = r#"
pcap-api:
  id: f9281cda-1234-bbcd-ef12-1337cafe0048
  bosh:
    agent_port: 9495
    director_url: https://bosh.service.cf.internal:8080
    token_scope: bosh.admin
"#;

    // Act
    let doc = document(yaml);

    // Assert
    assert_eq!(doc["bosh"]["agent_port"].as_u64(), Some(9495));
    assert_eq!(
        doc["bosh"]["director_url"].as_str(),
        Some("https://bosh.service.cf.internal:8080")
    );
    assert_eq!(doc["bosh"]["token_scope"].as_str(), Some("bosh.admin"));
    assert!(doc["bosh"].get("mtls").is_none());
}

#[test]
fn bosh_mtls_skip_verify_is_configured() {
    // Arrange
    let yaml = r#"
pcap-api:
  bosh:
    agent_port: 9495
    director_url: https://bosh.service.cf.internal:8080
    token_scope: bosh.admin
    mtls:
      common_name: bosh.service.cf.internal
      skip_verify: true
"#;

    // Act
    let validated = resolve_yaml(yaml).unwrap();

    // Assert
    let bosh = validated.config.bosh.unwrap();
    assert_eq!(
        bosh.mtls,
        Some(MtlsConfig {
            common_name: "bosh.service.cf.internal".to_string(),
            skip_verify: true,
        })
    );
    assert!(validated.validation.has_violations());
}

#[test]
fn bosh_mtls_skip_verify_defaults_to_false() {
    // Arrange
    let yaml = r#"
pcap-api:
  bosh:
    agent_port: 9495
    director_url: https://bosh.service.cf.internal:8080
    token_scope: bosh.admin
    mtls:
      common_name: bosh.service.cf.internal
"#;

    // Act
    let validated = resolve_yaml(yaml).unwrap();

    // Assert
    assert_eq!(
        validated.config.bosh.and_then(|b| b.mtls).map(|m| m.skip_verify),
        Some(false)
    );
}

#[test]
fn bosh_mtls_without_common_name_is_rejected() {
    // Arrange
    let yaml = r#"
pcap-api:
  bosh:
    agent_port: 9495
    director_url: https://bosh.service.cf.internal:8080
    token_scope: bosh.admin
    mtls:
      skip_verify: true
"#;

    // Act
    let err = resolve_yaml(yaml).unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::IncompleteMtlsMaterial);
}

//-----------------------------------------------------------------------------
// Identifier and determinism
//-----------------------------------------------------------------------------

#[test]
fn instance_id_falls_back_to_property_id() {
    // Arrange
    let spec = properties(
        r#"
pcap-api:
  id: 0a1b2c3d-1234-bbcd-ef12-1337cafe0048
"#,
    );

    // Act
    let validated = resolve(spec, &InstanceSpec::default(), &ResolveOptions::default()).unwrap();

    // Assert
    assert_eq!(
        validated.config.id,
        "pcap-api/0a1b2c3d-1234-bbcd-ef12-1337cafe0048"
    );
}

#[test]
fn explicit_instance_id_wins_over_property_id() {
    // Arrange
    let spec = properties(
        r#"
pcap-api:
  id: 0a1b2c3d-1234-bbcd-ef12-1337cafe0048
"#,
    );

    // Act
    let validated = resolve(
        spec,
        &InstanceSpec::new(INSTANCE_ID),
        &ResolveOptions::default(),
    )
    .unwrap();

    // Assert
    assert_eq!(validated.config.id, format!("pcap-api/{INSTANCE_ID}"));
}

#[test]
fn missing_instance_id_is_rejected() {
    // Arrange
    let spec = properties(BASE_PROPERTIES);

    // Act
    let err = resolve(spec, &InstanceSpec::default(), &ResolveOptions::default()).unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
}

#[test]
fn resolving_twice_yields_identical_documents() {
    // Arrange
    let yaml = with_base(
        r#"  log_level: debug
  listen:
    port: 8443
    tls:
      certificate: cert
      private_key: key
      ca: ca
  enable_ip_restriction: true
  cidr_allowlist: [10.0.0.0/8, 192.168.0.0/16]
"#,
    );

    // Act
    let first = resolve_yaml(&yaml).unwrap().to_document(OutputFormat::Yaml).unwrap();
    let second = resolve_yaml(&yaml).unwrap().to_document(OutputFormat::Yaml).unwrap();

    // Assert
    assert_eq!(first, second);
}

#[test]
fn document_keys_follow_declared_order() {
    // Arrange
    let yaml = with_base(
        r#"  bosh:
    agent_port: 9495
    director_url: https://bosh.service.cf.internal:8080
    token_scope: bosh.admin
  enable_ip_restriction: true
  cidr_allowlist: [10.0.0.0/8]
"#,
    );

    // Act
    let doc = document(&yaml);

    // Assert
    let keys: Vec<&str> = doc
        .as_mapping()
        .unwrap()
        .keys()
        .filter_map(|k| k.as_str())
        .collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "log_level",
            "concurrent_captures",
            "buffer",
            "listen",
            "bosh",
            "enable_ip_restriction",
            "cidr_allowlist",
        ]
    );
}

use crate::conf::ConfigError;
use crate::conf::types::DefaultedSpec;
use crate::conf::validation::validator::{
    validate_bosh, validate_buffer, validate_concurrent_captures, validate_ip_restriction,
    validate_log_level, validate_tls, validate_unknown_properties,
};
use crate::conf::validation::{ValidatedSpec, ValidationReport};

/// Validate a defaulted property tree.
///
/// Fail-fast: the first violated rule aborts, in this order: IP restriction,
/// buffer bounds, TLS material, mTLS material, concurrent captures. Non-fatal
/// findings are collected in the returned report.
pub fn validate_spec(
    spec: DefaultedSpec,
) -> Result<(ValidatedSpec, ValidationReport), ConfigError> {
    let mut report = ValidationReport::default();

    let cidr_allowlist =
        validate_ip_restriction(spec.enable_ip_restriction, spec.cidr_allowlist, &mut report)?;

    validate_buffer(spec.buffer.as_ref())?;

    let tls = validate_tls(spec.listen.tls)?;

    let bosh = spec
        .bosh
        .map(|bosh| validate_bosh(bosh, &mut report))
        .transpose()?;

    validate_concurrent_captures(spec.concurrent_captures)?;

    validate_log_level(&spec.log_level, &mut report);
    validate_unknown_properties(&spec.extra, &mut report);

    Ok((
        ValidatedSpec {
            id: spec.id,
            log_level: spec.log_level,
            concurrent_captures: spec.concurrent_captures,
            buffer: spec.buffer,
            port: spec.listen.port,
            tls,
            bosh,
            cidr_allowlist,
        },
        report,
    ))
}

use crate::conf::ConfigError;
use crate::conf::types::{BoshSpec, MtlsConfig, MtlsSpec};
use crate::conf::validation::{ValidatedBosh, ValidationReport};

use super::tls::non_blank;

pub fn validate_bosh(
    bosh: BoshSpec,
    report: &mut ValidationReport,
) -> Result<ValidatedBosh, ConfigError> {
    let mtls = bosh
        .mtls
        .map(|mtls| validate_mtls(mtls, report))
        .transpose()?;

    Ok(ValidatedBosh {
        agent_port: bosh.agent_port,
        director_url: bosh.director_url,
        token_scope: bosh.token_scope,
        mtls,
    })
}

/// A present mTLS block needs a common name; `skip_verify` defaults to off.
fn validate_mtls(
    mtls: MtlsSpec,
    report: &mut ValidationReport,
) -> Result<MtlsConfig, ConfigError> {
    let common_name =
        non_blank(mtls.common_name).ok_or_else(|| ConfigError::IncompleteMtlsMaterial {
            missing: vec!["common_name"],
        })?;

    let skip_verify = mtls.skip_verify.unwrap_or(false);
    if skip_verify {
        report.mtls_skip_verify();
    }

    Ok(MtlsConfig {
        common_name,
        skip_verify,
    })
}

use crate::conf::ConfigError;
use crate::conf::types::TlsSpec;
use crate::conf::validation::TlsMaterial;

/// Certificate, key and CA travel together: either all three or none.
pub fn validate_tls(tls: Option<TlsSpec>) -> Result<Option<TlsMaterial>, ConfigError> {
    let Some(tls) = tls.filter(|t| !t.is_disabled()) else {
        return Ok(None);
    };

    match (
        non_blank(tls.certificate),
        non_blank(tls.private_key),
        non_blank(tls.ca),
    ) {
        (Some(certificate), Some(private_key), Some(ca)) => Ok(Some(TlsMaterial {
            certificate,
            private_key,
            ca,
        })),
        (certificate, private_key, ca) => {
            let missing = [
                ("certificate", certificate.is_none()),
                ("private_key", private_key.is_none()),
                ("ca", ca.is_none()),
            ]
            .into_iter()
            .filter_map(|(key, missing)| missing.then_some(key))
            .collect();

            Err(ConfigError::IncompleteTlsMaterial { missing })
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

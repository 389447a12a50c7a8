use crate::conf::ConfigError;
use crate::conf::validation::ValidationReport;
use ipnet::IpNet;

use super::tls::non_blank;

/// Validate IP restriction against the allowlist.
///
/// Returns the allowlist to materialize: `Some` (non-empty) when restriction
/// is enabled, `None` when it is disabled. Blank entries are dropped, so an
/// absent, an empty and an all-blank allowlist are the same thing.
pub fn validate_ip_restriction(
    enabled: bool,
    allowlist: Option<Vec<String>>,
    report: &mut ValidationReport,
) -> Result<Option<Vec<String>>, ConfigError> {
    let allowlist = allowlist
        .map(|l| l.into_iter().filter_map(|c| non_blank(Some(c))).collect::<Vec<_>>())
        .filter(|l| !l.is_empty());

    if !enabled {
        if allowlist.is_some() {
            report.allowlist_ignored();
        }
        return Ok(None);
    }

    let cidrs = allowlist.ok_or(ConfigError::ConflictingConfiguration)?;

    validate_cidrs(&cidrs, report);

    Ok(Some(cidrs))
}

/// The allowlist is written verbatim, so malformed entries are only flagged.
fn validate_cidrs(cidrs: &[String], report: &mut ValidationReport) {
    for (i, cidr) in cidrs.iter().enumerate() {
        match cidr.trim().parse::<IpNet>() {
            Ok(network) if network.prefix_len() == 0 => report.catch_all_cidr(i, network),
            Ok(_) => {}
            Err(_) => report.invalid_cidr(i, cidr),
        }
    }
}

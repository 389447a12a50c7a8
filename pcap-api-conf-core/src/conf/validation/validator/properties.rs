use crate::conf::validation::ValidationReport;
use std::collections::BTreeMap;

/// Levels understood by the pcap-api logger.
pub const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error", "dpanic", "panic", "fatal"];

/// The level is passed through verbatim; an unknown one is only flagged.
pub fn validate_log_level(level: &str, report: &mut ValidationReport) {
    if !LOG_LEVELS.contains(&level) {
        report.unknown_log_level(level);
    }
}

pub fn validate_unknown_properties(
    extra: &BTreeMap<String, serde_yaml::Value>,
    report: &mut ValidationReport,
) {
    for key in extra.keys() {
        tracing::debug!(property = %key, "ignoring unknown property");
        report.unknown_property(key);
    }
}

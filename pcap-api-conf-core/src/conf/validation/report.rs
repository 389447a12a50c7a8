use owo_colors::OwoColorize;
use serde::Serialize;

/// A non-fatal finding. Resolution still succeeds.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub message: String,

    /// Dotted property path the issue refers to, e.g. `pcap-api.cidr_allowlist[0]`.
    pub property: String,

    pub help: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub(crate) fn warning(
        &mut self,
        message: String,
        property: impl Into<String>,
        help: Option<String>,
    ) {
        self.warnings.push(ValidationIssue {
            message,
            property: property.into(),
            help,
        });
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ValidationReportJson {
            warnings: &self.warnings,
        })
    }

    pub fn render_plain(&self) {
        for issue in &self.warnings {
            println!("{}: warning: {}", issue.property, issue.message);

            if let Some(help) = &issue.help {
                println!("  help: {}", help);
            }
        }
    }

    pub fn render_pretty(&self) {
        if self.warnings.is_empty() {
            return;
        }

        println!("{} warnings\n", self.warnings.len());

        for issue in &self.warnings {
            println!("{}", issue.property);
            println!("  {}: {}", "warning".yellow().bold(), issue.message);
            if let Some(help) = &issue.help {
                println!("  {}: {}", "help".cyan(), help);
            }
            println!();
        }
    }
}

/// IP restriction
impl ValidationReport {
    pub fn invalid_cidr(&mut self, index: usize, cidr: &str) {
        self.warning(
            format!("not a valid CIDR network: '{}'", cidr),
            format!("pcap-api.cidr_allowlist[{}]", index),
            Some("Use address/prefix notation, e.g. 10.0.0.0/8 or 10.10.10.10/32.".to_string()),
        )
    }

    pub fn catch_all_cidr(&mut self, index: usize, network: ipnet::IpNet) {
        self.warning(
            format!("allowlist contains a catch-all network: {network}"),
            format!("pcap-api.cidr_allowlist[{}]", index),
            Some("A catch-all network makes IP restriction ineffective.".to_string()),
        )
    }

    pub fn allowlist_ignored(&mut self) {
        self.warning(
            "cidr_allowlist is ignored because enable_ip_restriction is false".to_string(),
            "pcap-api.cidr_allowlist",
            None,
        )
    }
}

/// Global properties
impl ValidationReport {
    pub fn unknown_log_level(&mut self, level: &str) {
        self.warning(
            format!("unknown log level: '{}'", level),
            "pcap-api.log_level",
            Some(format!(
                "Expected one of: {}.",
                super::validator::LOG_LEVELS.join(", ")
            )),
        )
    }

    pub fn unknown_property(&mut self, key: &str) {
        self.warning(
            format!("unknown property '{}' is ignored", key),
            format!("pcap-api.{}", key),
            None,
        )
    }
}

/// BOSH
impl ValidationReport {
    pub fn mtls_skip_verify(&mut self) {
        self.warning(
            "director certificate verification is disabled".to_string(),
            "pcap-api.bosh.mtls.skip_verify",
            None,
        )
    }
}

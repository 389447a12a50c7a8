use crate::conf::{ConfigError, ResolveOptions, load_config};
use miette::Report;
use std::path::PathBuf;

pub fn check(path: PathBuf, instance_id: Option<String>, plain: bool) -> anyhow::Result<()> {
    match load_config(&path, instance_id, &ResolveOptions::default()) {
        Ok(validated) => {
            let cfg = &validated.config;
            println!("✔ Properties resolved successfully");
            println!("✔ id {}", cfg.id);
            println!(
                "✔ listening on port {} ({})",
                cfg.listen.port,
                if cfg.listen.tls.is_some() {
                    "TLS"
                } else {
                    "plain TCP"
                }
            );
            println!(
                "✔ ip restriction {}",
                if cfg.enable_ip_restriction {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            println!("✔ {} material files", validated.materials.len());

            for issue in &validated.validation.warnings {
                tracing::warn!(property = %issue.property, "{}", issue.message);
            }
            if plain {
                validated.validation.render_plain();
            } else {
                validated.validation.render_pretty();
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ConflictingConfiguration => Some(
            "IP restriction needs at least one allowed network.\n\
             \n\
             Example:\n\
             \n\
             enable_ip_restriction: true\n\
             cidr_allowlist: [10.0.0.0/8]",
        ),

        ConfigError::InvalidBufferBounds { .. } => Some(
            "Buffer limits must satisfy lower_limit < upper_limit <= size.\n\
             \n\
             Example:\n\
             \n\
             buffer: { size: 100, upper_limit: 98, lower_limit: 90 }",
        ),

        ConfigError::IncompleteTlsMaterial { .. } => Some(
            "TLS on the API listener needs certificate, private_key and ca.\n\
             \n\
             Provide all three, or set listen.tls.enabled: false.",
        ),

        ConfigError::IncompleteMtlsMaterial { .. } => Some(
            "mTLS towards the BOSH director needs the director's common_name.\n\
             \n\
             Remove the bosh.mtls block to disable mTLS.",
        ),

        ConfigError::InvalidIdentifier { .. } => Some(
            "The instance id must be a uuid such as f9281cda-1234-bbcd-ef12-1337cafe0048.\n\
             \n\
             Pass --instance-id or set spec.id in the property file.",
        ),

        _ => None,
    }
}

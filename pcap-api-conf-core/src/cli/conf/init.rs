use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct PropertyTemplates;

/// Write an annotated sample property file.
pub fn init(path: PathBuf) -> Result<()> {
    // Refuse to overwrite anything
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(&path, template("pcap-api.yml")?)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("✔ wrote {}", path.display());
    Ok(())
}

fn template(name: &str) -> Result<String> {
    let file = PropertyTemplates::get(name).context(format!("missing template {name}"))?;
    Ok(String::from_utf8(file.data.into_owned())?)
}

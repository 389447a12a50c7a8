use crate::conf::types::MaterialPlan;
use crate::conf::{ConfigError, OutputFormat, ResolveOptions, ValidatedConfig, load_config};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub path: PathBuf,
    pub instance_id: Option<String>,
    pub config_root: PathBuf,
    pub format: OutputFormat,
    pub write: bool,
}

pub fn render(args: RenderArgs) -> anyhow::Result<()> {
    let options = ResolveOptions::with_config_root(&args.config_root);
    let validated = load_config(&args.path, args.instance_id, &options)?;

    for issue in &validated.validation.warnings {
        tracing::warn!(property = %issue.property, "{}", issue.message);
    }

    if args.write {
        let written = write_rendered(&validated, args.format, &args.config_root)?;
        tracing::info!(
            root = %args.config_root.display(),
            files = written.len(),
            "wrote pcap-api configuration"
        );
    } else {
        let document = validated.to_document(args.format)?;
        println!("{}", document.trim_end());
    }

    Ok(())
}

/// Write the document and its material files. Returns every path written,
/// document first.
pub fn write_rendered(
    validated: &ValidatedConfig,
    format: OutputFormat,
    config_root: &Path,
) -> Result<Vec<PathBuf>, ConfigError> {
    let document_path = config_root.join(format.file_name());
    let document = validated.to_document(format)?;
    write_file(&document_path, &document, false)?;

    let mut written = vec![document_path];
    written.extend(write_materials(&validated.materials)?);
    Ok(written)
}

pub fn write_materials(plan: &MaterialPlan) -> Result<Vec<PathBuf>, ConfigError> {
    plan.files()
        .iter()
        .map(|file| {
            write_file(&file.path, &file.contents, file.kind.is_secret())?;
            tracing::debug!(path = %file.path.display(), kind = ?file.kind, "wrote material file");
            Ok(file.path.clone())
        })
        .collect()
}

fn write_file(path: &Path, contents: &str, secret: bool) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::write_file(parent, e))?;
    }

    let mut file =
        create_material_file(path, secret).map_err(|e| ConfigError::write_file(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| ConfigError::write_file(path, e))?;

    Ok(())
}

/// Open `path` for writing. Secret files are created owner-only, and an
/// existing one is narrowed before anything is written to it.
#[cfg(unix)]
pub(crate) fn create_material_file(path: &Path, secret: bool) -> std::io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    if secret {
        options.mode(0o600);
    }

    let file = options.open(path)?;
    if secret {
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    Ok(file)
}

#[cfg(not(unix))]
pub(crate) fn create_material_file(path: &Path, _secret: bool) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

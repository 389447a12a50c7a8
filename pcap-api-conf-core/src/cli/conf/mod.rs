mod check;
mod init;
mod render;

pub use check::*;
use clap::{Args, Subcommand};
pub use init::*;
pub use render::*;
use std::path::PathBuf;

use crate::conf::{DEFAULT_CONFIG_ROOT, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate properties and exit
    Check {
        /// Path to the property file
        #[arg(default_value = "pcap-api.yml")]
        path: PathBuf,

        #[command(flatten)]
        instance: InstanceArgs,

        /// Print diagnostics without colors or decorations
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print resolved configuration
    Render {
        /// Path to the property file
        #[arg(default_value = "pcap-api.yml")]
        path: PathBuf,

        #[command(flatten)]
        instance: InstanceArgs,

        /// Directory material paths are rooted at
        #[arg(long, env = "PCAP_API_CONFIG_ROOT", default_value = DEFAULT_CONFIG_ROOT)]
        config_root: PathBuf,

        /// Output as JSON instead of YAML
        #[arg(long)]
        json: bool,

        /// Write the document and all material files below the config root
        #[arg(long)]
        write: bool,
    },

    /// Write a sample property file
    Init {
        /// Path of the file to create
        #[arg(default_value = "pcap-api.yml")]
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct InstanceArgs {
    /// Instance uuid, overrides `spec.id` in the property file
    #[arg(long, env = "PCAP_API_INSTANCE_ID")]
    pub instance_id: Option<String>,
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check {
            path,
            instance,
            plain,
        } => check(path, instance.instance_id, plain),
        ConfigCmd::Render {
            path,
            instance,
            config_root,
            json,
            write,
        } => render(RenderArgs {
            path,
            instance_id: instance.instance_id,
            config_root,
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Yaml
            },
            write,
        }),
        ConfigCmd::Init { path } => init(path),
    }
}

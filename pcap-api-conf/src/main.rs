use clap::Parser;
use pcap_api_conf_core::cli::conf::{self, ConfigCmd};
use pcap_api_conf_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "pcap-api-conf",
    version,
    about = "Resolve pcap-api deployment properties into the service configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: ConfigCmd,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = conf::run(cli.command) {
        tracing::error!(error = %e, "pcap-api-conf failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

//! Créditos CLI - manage loan records against the REST backend.

use clap::Parser;
use creditos_cmd::client::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(name = "creditos", version, about = "Créditos (loans) CRUD client")]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "CREDITOS_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: creditos_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using backend {}", cli.base_url);
    creditos_cmd::run(cli.command, &cli.base_url).await
}

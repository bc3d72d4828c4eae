use clap::Parser;
use serde::Deserialize;
use tokio::net::TcpListener;

use folio_cli::{init_tracing, ConfigArgs};
use folio_notify::receiver;

/// Run the `/api/notify` endpoint that lead notifications are posted to.
#[derive(Debug, Parser)]
#[command(name = "folio-notify-receiver")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Address to listen on; overrides `receiver.bind`
    #[arg(long)]
    bind: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ReceiverConfig {
    bind: String,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self { bind: "127.0.0.1:3000".to_string() }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config.load()?;
    let settings: ReceiverConfig = config.get_or_default("receiver")?;
    let bind = cli.bind.unwrap_or(settings.bind);

    let listener = TcpListener::bind(&bind).await?;
    receiver::serve(listener, None).await?;
    Ok(())
}

use clap::Parser;

use folio_cli::{build_answerer, init_tracing, ConfigArgs};
use folio_notify::is_lead_intent;

/// Answer a single question and exit.
#[derive(Debug, Parser)]
#[command(name = "folio-ask")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Also report whether the question reads as a lead
    #[arg(long)]
    lead: bool,

    /// The question
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config.load()?;
    let answerer = build_answerer(&config)?;

    let query = cli.query.join(" ");
    println!("{}", answerer.answer(&query));
    if cli.lead {
        println!("lead intent: {}", is_lead_intent(&query));
    }
    Ok(())
}

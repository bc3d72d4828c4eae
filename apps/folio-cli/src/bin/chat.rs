use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use folio_assistant::ChatSession;
use folio_cli::{build_answerer, init_tracing, ConfigArgs};
use folio_core::types::Sender;
use folio_notify::{notifier_from_config, NotifyConfig};

/// Chat with the portfolio assistant on stdin.
///
/// Every line is a question. `/open` and `/close` toggle the widget, `/log`
/// prints the transcript, `/quit` leaves.
#[derive(Debug, Parser)]
#[command(name = "folio-chat")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config.load()?;
    let answerer = build_answerer(&config)?;
    let notify: NotifyConfig = config.get_or_default("notify")?;
    let mut session = ChatSession::start(answerer, notifier_from_config(&notify));

    for message in session.log() {
        println!("bot> {}", message.text);
    }
    session.open();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/open" => {
                session.open();
                println!("(chat open)");
            }
            "/close" => {
                session.close();
                println!("(chat closed)");
            }
            "/log" => {
                for message in session.log() {
                    let who = match message.sender {
                        Sender::User => "you",
                        Sender::Bot => "bot",
                    };
                    println!("{who}> {}", message.text);
                }
            }
            _ if !session.is_open() => println!("(chat is closed; /open to continue)"),
            draft => {
                if let Some(reply) = session.submit(draft) {
                    println!("bot> {}", reply.text);
                }
            }
        }
    }
    Ok(())
}

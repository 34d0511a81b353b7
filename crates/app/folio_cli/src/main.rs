// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use folio_core::contact::{ContactClient, ContactRequest};

mod chat;
mod cli;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Chat {
            server,
            static_replies,
            delay_ms,
        } => {
            let responder = chat::responder(&server, static_replies, delay_ms)?;
            chat::run(responder).await?;
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
            server,
        } => {
            let client = ContactClient::new(&server)?;
            let resp = client
                .submit(&ContactRequest {
                    name,
                    email,
                    subject,
                    message,
                })
                .await?;
            if !resp.success {
                return Err(Error::Custom(resp.message));
            }
            println!("{}", resp.message);
        }
    }

    Ok(())
}

//! Folio chat backend server binary.
//!
//! Serves `POST /api/chat`, `POST /contact` and `GET /api/health`.

use clap::Parser;
use folio_api::config::ApiConfig;
use tracing::info;

/// CLI arguments for the API server. Flags override `BIND_ADDR` and
/// `MAX_MESSAGE_LEN` from the environment.
#[derive(Parser, Debug)]
#[command(name = "folio_api_server", about = "Folio chat backend server")]
struct Args {
    /// Address to listen on [default: 127.0.0.1:5000].
    #[arg(long)]
    bind_addr: Option<String>,

    /// Longest accepted chat message, in characters [default: 1000].
    #[arg(long)]
    max_message_len: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,folio_api=debug,folio_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = ApiConfig::from_env();
    if let Some(bind_addr) = args.bind_addr {
        config.bind_addr = bind_addr;
    }
    if let Some(max_message_len) = args.max_message_len {
        config.max_message_len = max_message_len;
    }

    info!(
        bind_addr = %config.bind_addr,
        max_message_len = config.max_message_len,
        "starting folio_api_server"
    );

    let state = folio_api::AppState::new(config.clone());
    let app = folio_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}

use clap::{Parser, Subcommand};

/// Fallback when neither `--server` nor `FOLIO_SERVER_URL` is given.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Portfolio chat in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat with the portfolio bot.
    Chat {
        /// Base URL of the chat server.
        #[arg(long, env = "FOLIO_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
        server: String,

        /// Answer locally from the keyword table instead of calling the server.
        #[arg(long = "static")]
        static_replies: bool,

        /// Artificial delay before each static reply, in milliseconds.
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },

    /// Send the contact form.
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        /// Base URL of the server.
        #[arg(long, env = "FOLIO_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
        server: String,
    },

    /// Print the version.
    Version,
}

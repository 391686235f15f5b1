//! In-memory repository tracker server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin repodex-server -- --port 3333
//! ```

use clap::Parser;
use repodex_server::ServerConfig;
use repodex_shared::logger::setup_logger;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "repodex-server", version, about = "In-memory repository tracker server")]
struct Args {
    /// Host address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3333)]
    port: u16,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    // Run the server
    if let Err(e) = repodex_server::run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

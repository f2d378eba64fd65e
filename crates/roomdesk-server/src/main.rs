use std::sync::Arc;

use clap::Parser;
use tokio::sync::RwLock;

use roomdesk_server::routes::{self, AppState};
use roomdesk_server::store::RoomStore;

/// Roomdesk Server - room-booking REST API
#[derive(Parser, Debug)]
#[command(name = "roomdesk-server", version, about)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1:4680")]
    bind: String,

    /// Start with a sample set of rooms instead of an empty store
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomdesk_server=debug,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();

    let store = if args.seed {
        RoomStore::with_sample_rooms()
    } else {
        RoomStore::new()
    };
    let state = Arc::new(AppState {
        store: RwLock::new(store),
    });

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    tracing::info!("Starting roomdesk server on {}", args.bind);
    axum::serve(listener, routes::router(state)).await?;
    Ok(())
}

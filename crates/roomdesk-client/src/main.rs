use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use roomdesk_client::api::ApiClient;
use roomdesk_client::app;

/// Roomdesk Client - browse and manage bookable rooms from the terminal
#[derive(Parser, Debug)]
#[command(name = "roomdesk-client", version, about)]
struct Args {
    /// Base URL of the room-booking service
    #[arg(short = 's', long, default_value = "http://127.0.0.1:4680")]
    server: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomdesk_client=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let api = ApiClient::new(args.server);

    // The UI is inert until the first snapshot exists, so fetch it before
    // touching the terminal at all.
    let snapshot = match api.list_rooms().await {
        Ok(rooms) => rooms,
        Err(e) => {
            eprintln!("Could not load rooms from {}: {}", api.base_url(), e);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app::run(&mut terminal, api, snapshot).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

//! Meshi — impulse meal-buddy matching server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use meshi_server::{build_router, AppState};

fn print_help() {
    println!("Meshi — meetup matching server");
    println!();
    println!("Usage: meshi [help]");
    println!();
    println!("Environment:");
    println!("  HOST             Bind address (default 0.0.0.0)");
    println!("  PORT             Listen port (default 8000)");
    println!("  MESHI_TIMEZONE   IANA timezone for timestamps (default Asia/Tokyo)");
    println!("  RUST_LOG         Log filter (default info)");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'meshi help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let config = meshi_core::MeshiConfig::from_env()?;
    let state = Arc::new(AppState::new(config));
    let addr = state.config.bind_addr();
    info!("Timestamps use timezone {}", state.config.timezone.name());

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Meshi server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! Sortvis Visualization Server
//!
//! Serve the sorting visualizer frontend and its control API.

use sortvis_vis::{VisConfig, VisServer};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortvis=info,sortvis_vis=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = VisConfig::from_env()?;

    // Optional port as first argument
    if let Some(arg) = env::args().nth(1) {
        let port: u16 = arg
            .parse()
            .map_err(|_| format!("invalid port argument: {arg}"))?;
        config = config.with_port(port);
    }

    println!("Sortvis");
    println!("=======");
    println!();
    println!(
        "Array length {} with {} ms per step",
        config.pacing.length(),
        config.pacing.delay_ms()
    );
    println!("Open http://localhost:{} in a browser.", config.addr.port());
    println!();

    let server = VisServer::new(&config);
    server.serve(config.addr).await?;

    Ok(())
}

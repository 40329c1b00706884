//! News feed gateway entry point
//!
//! Run with:
//! ```bash
//! FEED_STORE=memory API_PORT=8080 JWT_SECRET=dev cargo run -p feed-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use feed_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so the environment picks the log format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        store = config.store.as_str(),
        address = %config.api.address(),
        "Starting news feed gateway"
    );

    if let Err(e) = feed_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

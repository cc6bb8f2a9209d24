//! Demonstrates tracing integration with outcomes
//!
//! Run with: cargo run --example tracing_demo --features tracing

use outcome::prelude::*;

fn load_config(path: &str) -> Outcome<String, String> {
    if path.ends_with(".toml") {
        success(format!("loaded {}", path))
    } else {
        failure(format!("unsupported config format: {}", path))
    }
}

fn connect(config: String) -> Outcome<u32, String> {
    success(config.len() as u32)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    for path in ["app.toml", "app.ini"] {
        let result = load_config(path)
            .trace_outcome("load_config")
            .and_then(connect)
            .trace_outcome("connect");

        match result {
            Outcome::Success(id) => tracing::info!("Startup completed: connection {}", id),
            Outcome::Failure(e) => tracing::error!("Startup failed: {}", e),
        }
    }
}

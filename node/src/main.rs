// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use veridraw_node::config::NodeConfig;
use veridraw_node::engine::DrawEngine;
use veridraw_node::server::{build_router, SharedEngine};
use veridraw_node::telemetry;

#[tokio::main]
async fn main() {
    telemetry::init_telemetry();

    let cfg = NodeConfig::from_env();
    tracing::info!("Initializing veridraw node with config: {:?}", cfg);

    let engine = DrawEngine::new(&cfg);
    let shared_state: SharedEngine = Arc::new(Mutex::new(engine));
    let app = build_router(shared_state);

    let listener = TcpListener::bind(cfg.bind_addr)
        .await
        .expect("failed to bind listen address");
    tracing::info!("Listening on {}", cfg.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("server terminated unexpectedly");
}

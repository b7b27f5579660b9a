// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use crate::api::{self, DrawRequest, DrawResponse, PickRequest, PickResponse};
use crate::engine::DrawEngine;
use crate::errors::EngineError;
use crate::telemetry;
use veridraw_kernel::validate;

pub type SharedEngine = Arc<Mutex<DrawEngine>>;

pub fn build_router(state: SharedEngine) -> Router {
    Router::new()
        .route("/v1/draw", post(draw))
        .route("/v1/pick", post(pick))
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics_endpoint))
        // The reference client is a browser page; allow it from anywhere.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn draw(
    State(state): State<SharedEngine>,
    Json(req): Json<DrawRequest>,
) -> Result<Json<DrawResponse>, EngineError> {
    let participants = api::parse_participants(&req.participants)?;
    let timestamp_millis =
        validate::timestamp_millis(&req.date, &req.time).map_err(EngineError::Kernel)?;

    tracing::info!(date = %req.date, time = %req.time, participants, "Draw requested");

    let mut engine = state.lock().await;
    let response = engine.draw(timestamp_millis, participants).await?;
    Ok(Json(response))
}

async fn pick(
    State(state): State<SharedEngine>,
    Json(req): Json<PickRequest>,
) -> Result<Json<PickResponse>, EngineError> {
    let participants = api::parse_participants(&req.participants)?;

    let engine = state.lock().await;
    let outcome = engine.pick(&req.digest, participants)?;
    Ok(Json(PickResponse {
        winner_index: outcome.winner_index,
        participants,
        digest: req.digest.to_lowercase(),
        recipe: outcome.recipe,
    }))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn metrics_endpoint() -> String {
    telemetry::get_metrics()
}

use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use keam_rank::error::AppError;
use keam_rank::prediction::{CandidateScores, RankPredictionView, RankPredictor};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub(crate) fn build_router(predictor: Arc<RankPredictor>) -> Router {
    Router::new()
        .route("/predict-rank", post(predict_rank_endpoint))
        .with_state(predictor)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn predict_rank_endpoint(
    State(predictor): State<Arc<RankPredictor>>,
    payload: Result<Json<CandidateScores>, JsonRejection>,
) -> Result<Json<RankPredictionView>, AppError> {
    let Json(scores) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    let prediction = predictor.predict(&scores);
    debug!(
        index_score = prediction.index_score,
        point_rank = prediction.point_rank,
        "rank predicted"
    );

    Ok(Json(prediction.view()))
}

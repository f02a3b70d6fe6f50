use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{info, warn};

use super::report::{render_text_report, score_csv};
use super::{criteria_catalog, profiles, AnalysisRequest, AnalysisResult, DecisionEngine};
use crate::error::AppError;

/// Router builder exposing the decision engine over HTTP.
pub fn advisor_router(engine: Arc<DecisionEngine>) -> Router {
    Router::new()
        .route("/api/v1/advisor/analyze", post(analyze_handler))
        .route("/api/v1/advisor/report", post(report_handler))
        .route("/api/v1/advisor/scores.csv", post(scores_csv_handler))
        .route("/api/v1/advisor/criteria", get(criteria_handler))
        .route("/api/v1/advisor/candidates", get(candidates_handler))
        .with_state(engine)
}

/// Runs the engine and logs what a caller is expected to log about the result.
pub fn run_analysis(
    engine: &DecisionEngine,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AppError> {
    let result = engine.analyze_request(request)?;

    for criterion in &result.skipped_criteria {
        warn!(%criterion, "score matrix has no row for the selected value; criterion contributed zero");
    }
    info!(
        database = result.recommendation.database,
        confidence = result.recommendation.confidence.label(),
        "analysis complete"
    );

    Ok(result)
}

pub(crate) async fn analyze_handler(
    State(engine): State<Arc<DecisionEngine>>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    run_analysis(&engine, &request).map(Json)
}

pub(crate) async fn report_handler(
    State(engine): State<Arc<DecisionEngine>>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Response, AppError> {
    let result = run_analysis(&engine, &request)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_text_report(&result),
    )
        .into_response())
}

pub(crate) async fn scores_csv_handler(
    State(engine): State<Arc<DecisionEngine>>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Response, AppError> {
    let result = run_analysis(&engine, &request)?;
    let body = score_csv(&result)?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], body).into_response())
}

pub(crate) async fn criteria_handler() -> Json<serde_json::Value> {
    Json(json!({ "criteria": criteria_catalog() }))
}

pub(crate) async fn candidates_handler() -> Json<serde_json::Value> {
    let candidates: Vec<_> = profiles().map(|(_, profile)| profile).collect();
    Json(json!({ "candidates": candidates }))
}

//! HTTP handlers for the mortgage endpoint.
use super::params::MortgageParams;
use crate::application::service::MortgageService;
use crate::domain::calculation::CalculationResult;
use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::sync::Arc;

pub type AppState = Arc<MortgageService>;

/// `GET /api/mortgage?loan=..&interest=..&nPayments=..`
///
/// Responds 200 with the payment as a JSON number, or 400 with a plain-text
/// reason.
pub async fn mortgage(
    State(service): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    tracing::info!("mortgage calculator start");

    let request = match pairs.into_iter().collect::<MortgageParams>().into_request() {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(field = e.field(), "{}", e);
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    match service.calculate(request).await {
        CalculationResult::Succeeded { value } => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            value.to_string(),
        )
            .into_response(),
        CalculationResult::Failed(error) => {
            (StatusCode::BAD_REQUEST, error.message).into_response()
        }
    }
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })),
    )
}

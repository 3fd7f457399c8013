use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::config::Config;
use crate::questionnaire::{QuestionnaireAnswers, QuestionnaireError};
use crate::scoring::breakdown::ScoreBreakdown;
use crate::scoring::whatif::{AnswerChange, WhatIfResult};
use crate::scoring::{explain, score, score_batch, simulate_whatif, RecommendationResult};

#[derive(Clone)]
struct ApiState {
    config: Config,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

}

/// Every questionnaire error comes from the request body.
impl From<QuestionnaireError> for ApiError {
    fn from(error: QuestionnaireError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorBody {
            ok: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Deserialize)]
struct WhatIfRequest {
    #[serde(default = "empty_object")]
    answers: Value,
    #[serde(default)]
    changes: Vec<AnswerChange>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct BatchResponse {
    generated_at: DateTime<Utc>,
    results: Vec<RecommendationResult>,
}

pub fn router(config: Config) -> Router {
    let allow_any_origin = config.server.allow_any_origin;
    let app = Router::new()
        .route("/health", get(health))
        .route("/v1/score", post(score_answers))
        .route("/v1/explain", post(explain_answers))
        .route("/v1/whatif", post(whatif))
        .route("/v1/batch", post(batch))
        .route("/v1/config", get(show_config))
        .with_state(ApiState { config });

    if allow_any_origin {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(cors)
    } else {
        app
    }
}

pub async fn run_server(config: Config, bind: SocketAddr) -> Result<()> {
    let app = router(config);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("REST API listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<ApiResponse<HealthResponse>> {
    ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn show_config(State(state): State<ApiState>) -> Json<ApiResponse<Config>> {
    ok(state.config)
}

async fn score_answers(Json(body): Json<Value>) -> ApiResult<RecommendationResult> {
    let answers = QuestionnaireAnswers::from_value(body)?;
    let result = score(&answers);
    debug!(
        recommendation = %result.recommendation,
        confidence = result.confidence_score,
        "scored answer set"
    );
    Ok(ok(result))
}

async fn explain_answers(Json(body): Json<Value>) -> ApiResult<ScoreBreakdown> {
    let answers = QuestionnaireAnswers::from_value(body)?;
    Ok(ok(explain(&answers)))
}

async fn whatif(Json(request): Json<WhatIfRequest>) -> ApiResult<WhatIfResult> {
    if request.changes.is_empty() {
        return Err(ApiError::bad_request("at least one change is required"));
    }
    let answers = QuestionnaireAnswers::from_value(request.answers)?;
    let result = simulate_whatif(&answers, &request.changes)?;
    debug!(
        before = %result.before.recommendation,
        after = %result.after.recommendation,
        "simulated answer changes"
    );
    Ok(ok(result))
}

async fn batch(Json(body): Json<Vec<Value>>) -> ApiResult<BatchResponse> {
    let answer_sets = body
        .into_iter()
        .map(QuestionnaireAnswers::from_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let results = score_batch(&answer_sets);
    debug!(count = results.len(), "scored batch");
    Ok(ok(BatchResponse {
        generated_at: Utc::now(),
        results,
    }))
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { ok: true, data })
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::ApiError;
    use crate::questionnaire::QuestionnaireError;

    #[test]
    fn unknown_field_maps_to_bad_request() {
        let error = ApiError::from(QuestionnaireError::UnknownField("budget".to_string()));
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unparseable_answers_map_to_bad_request() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated");
        let error = ApiError::from(QuestionnaireError::InvalidJson(parse_error));
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }
}

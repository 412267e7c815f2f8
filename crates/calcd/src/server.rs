//! HTTP transport for the evaluator.
//!
//! One route, `/calc`. The handler decodes the body, evaluates it and maps
//! the outcome onto the wire: `200` with a JSON `{"result": n}` body, or
//! `400` with the error message as a plain-text body.

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use calc_eval::Evaluator;
use serde::{Serialize, Serializer};
use tokio::net::TcpListener;

use crate::config::ServerConfig;

pub const CALC_PATH: &str = "/calc";

/// Body returned for any method other than `POST`.
pub const USE_POST_MESSAGE: &str = "use POST, Luke";

/// Successful response body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CalcResponse {
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
}

/// Largest magnitude below which every integral `f64` is exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integral results are written without a fractional part (`5`, not `5.0`).
#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "signature fixed by serde's serialize_with"
)]
fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "integral and within the exact f64 range"
        )]
        let integer = *n as i64;
        serializer.serialize_i64(integer)
    } else {
        serializer.serialize_f64(*n)
    }
}

/// Build the service. The evaluator is the only state and is copied into
/// each request.
///
/// Request bodies are not size-capped, so every payload reaches the decoder
/// and any failure is answered with `400`.
pub fn router(evaluator: Evaluator) -> Router {
    Router::new()
        .route(CALC_PATH, any(calc_handler))
        .layer(DefaultBodyLimit::disable())
        .with_state(evaluator)
}

async fn calc_handler(
    State(evaluator): State<Evaluator>,
    method: Method,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        tracing::debug!(%method, "rejected non-POST request");
        return bad_request(USE_POST_MESSAGE.to_string());
    }

    match evaluator.evaluate_json(&body) {
        Ok(result) => (StatusCode::OK, Json(CalcResponse { result })).into_response(),
        Err(err) => {
            tracing::debug!(
                kind = err.kind.code(),
                path = %err.path().map_or_else(String::new, ToString::to_string),
                error = %err,
                "evaluation failed"
            );
            bad_request(err.to_string())
        }
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, message).into_response()
}

/// Bind `config.addr` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        max_depth = ?config.eval.max_depth,
        "calcd listening"
    );
    axum::serve(listener, router(Evaluator::new(config.eval)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::warn!(%err, "cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

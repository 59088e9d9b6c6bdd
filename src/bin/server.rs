use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rulegen::config::Params;
use rulegen::{Error, output};

/// Any `Params` field may be omitted; missing ones take `Params::default()`.
#[derive(Deserialize)]
struct GenerateRequest {
    rule: Option<i64>,
    #[serde(flatten)]
    params: Params,
}

#[derive(Serialize)]
struct GenerateResponse {
    layers: Vec<Layer>,
    timings: Vec<TimingEntry>,
    params: Params,
    width: usize,
    height: usize,
}

#[derive(Serialize)]
struct Layer {
    name: String,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

struct ApiError(Error);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            Error::OutOfRange { .. } | Error::InvalidOffset { .. } | Error::InvalidSize { .. } => {
                StatusCode::BAD_REQUEST
            }
            Error::Io(_) | Error::Image(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

fn run(rule: i64, params: Params) -> Result<GenerateResponse, Error> {
    let (frame, timings) = rulegen::generate(rule, &params)?;

    let layers = vec![Layer {
        name: "rule".into(),
        data_url: output::data_url(&frame.image)?,
    }];

    let timing_entries = timings
        .iter()
        .map(|t| TimingEntry {
            name: t.name.to_string(),
            ms: t.ms,
        })
        .collect();

    Ok(GenerateResponse {
        layers,
        timings: timing_entries,
        params,
        width: frame.image.w,
        height: frame.image.h,
    })
}

async fn generate_handler(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, Response> {
    let rule = req.rule.unwrap_or(30);
    let params = req.params;
    // Checked here so oversized requests never reach the blocking pool.
    params.validate().map_err(|e| ApiError(e).into_response())?;

    info!(rule, width = params.width, height = params.height, "generate");

    let result = tokio::task::spawn_blocking(move || run(rule, params))
        .await
        .map_err(|e| {
            error!("generate task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })?;

    result.map(Json).map_err(|e| ApiError(e).into_response())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/generate", post(generate_handler))
        .fallback_service(frontend);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("rulegen server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

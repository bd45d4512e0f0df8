use crate::{backend, AppConfig};
use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

/// Runtime values the browser bundle needs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeEnv {
    api_base: String,
    upload_url: Option<String>,
}

#[instrument(skip(config))]
pub async fn runtime_env(State(config): State<AppConfig>) -> Json<RuntimeEnv> {
    Json(RuntimeEnv {
        api_base: backend::public_base(),
        upload_url: config.upload_url,
    })
}

use crate::cookie::clear_access_token_cookie;
use axum::{http::HeaderMap, response::IntoResponse, Json};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    ok: bool,
}

#[instrument]
pub async fn logout() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    clear_access_token_cookie(&mut headers);
    tracing::debug!("cleared access token cookie");

    (headers, Json(LogoutResponse { ok: true }))
}

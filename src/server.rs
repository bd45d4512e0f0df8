use crate::{handler, AppConfig};
use anyhow::Context;
use axum::{
    extract::FromRef,
    http::Request,
    response::Response,
    routing::{get, post},
    Router,
};
use axum_extra::routing::SpaRouter;
use std::{net::SocketAddr, time::Duration};
use tower_http::trace::TraceLayer;
use tracing::Span;

pub async fn start_server(config: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address `{}`", config.bind_addr))?;

    let app = router(config);

    // run it
    tracing::debug!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

pub fn router(config: AppConfig) -> Router {
    let static_dir = config.static_dir.clone();
    let app_state = AppState { config };

    Router::new()
        .route("/", get(handler::home))
        .route("/env.json", get(handler::runtime_env))
        .route("/api/logout", post(handler::logout))
        .with_state(app_state)
        .merge(SpaRouter::new("/public", static_dir))
        .layer(
            TraceLayer::new_for_http()
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::info!("{} {}", request.method(), request.uri());
                })
                .on_response(|response: &Response, latency: Duration, _span: &Span| {
                    tracing::info!("{} in {:?}", response.status(), latency);
                }),
        )
}

#[derive(Clone)]
struct AppState {
    config: AppConfig,
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

use anyhow::Result;
use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use shared::Config;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::{error, info};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    bot_name: String,
    webapp_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting signal bot web server...");

    let config = Arc::new(Config::from_env()?);

    // Static assets live next to the binary; make sure the directory is
    // there so ServeDir does not 404 on a fresh deployment.
    if let Err(e) = std::fs::create_dir_all("public") {
        error!("Failed to create public directory: {}", e);
    }

    let app = Router::new()
        .route("/", get(landing))
        .route("/health", get(health_check))
        .route("/webhook/telegram", post(telegram_webhook))
        .nest_service("/static", ServeDir::new("public"))
        .with_state(config.clone());

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Web server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn landing(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let template = IndexTemplate {
        bot_name: config.bot_name.clone(),
        webapp_url: config.webapp_url.clone(),
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render landing page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "Signal bot service is running" }))
}

/// Placeholder for webhook delivery. Updates are logged and acknowledged;
/// the bot itself runs on long polling.
async fn telegram_webhook(Json(update): Json<Value>) -> &'static str {
    info!("Webhook update received: {}", update);
    "OK"
}

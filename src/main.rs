use anyhow::Context;

mod app;
mod auth;
mod blogs;
mod config;
mod db;
mod dto;
mod error;
mod projects;
mod resume;
mod skills;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "portfolio_backend=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = db::AppState::init().await?;

    // The unique index on users.email lives here; registration is unsound
    // without it, so a migration failure is fatal.
    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .context("run migrations")?;

    let port = state.config.port;
    let app = app::build_app(state);
    app::serve(app, port).await
}

mod api;
mod config;
mod guard;
mod routes;
mod search;
mod session;
mod slug;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let port = config.port;

    let state = match state::AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "remote API client init failed");
            std::process::exit(1);
        }
    };

    let patterns: Vec<&str> = state.guard.matcher().patterns().iter().map(|p| p.as_str()).collect();
    tracing::info!(
        api_url = %state.config.api_url,
        site_dir = %state.config.site_dir.display(),
        policy = %state.guard.policy(),
        ?patterns,
        "configuration loaded"
    );

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "inkgate listening");
    axum::serve(listener, app).await.expect("server failed");
}

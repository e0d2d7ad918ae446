use stem_lab_backend::{
    config::{Config, LogFormat},
    database::{create_pool, init_store},
    routes, AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let pool = create_pool(&config).await?;
    info!("Creating database and tables...");
    init_store(&pool).await?;

    if config.ai_configured() {
        info!(model = %config.gemini_model, "Gemini API key configured");
    } else {
        tracing::warn!("GEMINI_API_KEY not set; /image will answer with a configuration error");
    }

    let app_state = AppState::new(pool, &config)?;
    let app = routes::router(app_state);

    let addr = config.server_address;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

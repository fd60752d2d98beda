use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calhouse_api::config::ApiConfig;
use calhouse_api::router::create_router;
use calhouse_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calhouse_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env().context("Failed to read configuration")?;

    tracing::info!(
        address = %config.bind_address(),
        housing_data = %config.paths.housing_data.display(),
        geo_data = %config.paths.geo_data.display(),
        model = %config.paths.model.display(),
        "Starting calhouse dashboard"
    );

    let state = match AppState::load(&config.paths) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to load dashboard data: {}", e);
            tracing::error!(
                "Remediation:\n\
                1. Check that the housing, county and model files exist\n\
                2. Set CALHOUSE_HOUSING_DATA, CALHOUSE_GEO_DATA, CALHOUSE_MODEL or CALHOUSE_PAGE_TEXT\n\
                3. Or point to them from calhouse.toml"
            );
            std::process::exit(1);
        }
    };

    let cors = match &config.cors_origin {
        Some(origin) => CorsLayer::new().allow_origin(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CALHOUSE_CORS_ORIGIN: {}", origin))?,
        ),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(Arc::new(state)).layer(cors).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

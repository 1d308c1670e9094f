use std::fs::File;
use std::sync::Arc;

use sqlx::PgPool;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, postgres_persistence},
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

/// Builds the shared state and returns the pool alongside it so the caller
/// owns the close half of the pool lifecycle.
pub async fn init_app_state() -> anyhow::Result<(AppState, PgPool)> {
    let config = AppConfig::from_env();

    let postgres =
        postgres_persistence(&config.database_url(), config.db_max_connections).await?;
    let pool = postgres.pool().clone();
    let postgres_arc = Arc::new(postgres);

    let waitlist_use_cases = WaitlistUseCases::new(postgres_arc.clone() as Arc<dyn WaitlistRepo>);

    let app_state = AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    };

    Ok((app_state, pool))
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

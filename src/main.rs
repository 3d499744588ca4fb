use flight_roster::{
    config::Config, error::AppError, service::roster::RosterService, startup,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flight_roster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting roster backfill");

    let mut roster_service = RosterService::new(&db, config.roster);
    let outcomes = roster_service.backfill().await?;

    let committed = outcomes.iter().filter(|(_, r)| r.is_success()).count();
    for (flight_id, result) in outcomes.iter().filter(|(_, r)| !r.is_success()) {
        tracing::warn!(flight_id, "{}", result.message());
    }

    tracing::info!(
        committed,
        failed = outcomes.len() - committed,
        "Roster backfill finished"
    );

    Ok(())
}

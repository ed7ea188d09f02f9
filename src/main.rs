use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use waste_bank_buddy::{
    assistant::GeminiBackend,
    config,
    core::{BankState, content, views},
    errors::Result,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load configuration and build the in-memory state
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;
    let state = BankState::from_config(&app_config)
        .inspect_err(|e| error!("Failed to build bank state: {e}"))?;

    for member in state.directory().list_members() {
        let summary = views::summary(&state, &member.id)?;
        info!(
            "{} ({}): {} | {} pts | {} | {}",
            summary.name,
            member.id,
            views::format_rupiah(summary.balance),
            summary.points,
            views::format_weight(summary.total_waste_kg),
            summary.rank
        );
    }

    if let Some(tip) = content::tip_of_the_day(state.catalog(), chrono::Local::now().date_naive()) {
        info!("Tip of the day: {tip}");
    }

    // 4. Prepare the assistant if a key is available
    match GeminiBackend::from_env(app_config.assistant.clone()) {
        Ok(_) => info!("Assistant backend configured ({})", app_config.assistant.model),
        Err(e) => warn!("Assistant disabled: {e}"),
    }

    Ok(())
}

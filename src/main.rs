use chrono::Utc;
use corp_billing::{
    config::Config,
    error::Error,
    model::billing::GeneratedBillsDto,
    service::billing::{policy::SettingTaxPolicyProvider, BillingService},
    startup,
    util::time::previous_billing_period,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config).await {
        tracing::error!("Bill generation failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;

    let period = previous_billing_period(Utc::now());
    let billing_service = BillingService::new(&db, SettingTaxPolicyProvider::new(&db));

    tracing::info!(
        "Generating bills for {}-{:02} for {} corporations",
        period.year,
        period.month,
        config.corporation_ids.len()
    );

    let mut generated = Vec::new();

    for &corporation_id in &config.corporation_ids {
        if let Some(bills) = billing_service
            .generate_bills(corporation_id, period)
            .await?
        {
            generated.push(GeneratedBillsDto::from(bills));
        }
    }

    println!("{}", serde_json::to_string_pretty(&generated)?);

    Ok(())
}

// Bulk-write day prices through the conflict-aware flow.
//
// HOSTAL_API_URL=http://localhost:3001 HOSTAL_TOKEN=... \
//     cargo run --example bulk_rates

use chrono::NaiveDate;
use hostal_client::{
    BulkEditFlow, BulkSubmit, ClientConfig, ConflictChoice, HostalClient, StaticToken,
};
use rust_decimal::Decimal;
use shared::models::DayPricePatch;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env();
    let token = std::env::var("HOSTAL_TOKEN")?;
    let client = Arc::new(HostalClient::new(&config, Arc::new(StaticToken(token)))?);

    let rooms: Vec<i64> = client.rooms().await?.into_iter().map(|r| r.id).collect();
    let mut flow = BulkEditFlow::new(client);

    let from = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2025, 12, 14).unwrap();
    let outcome = flow
        .submit(rooms, from, to, DayPricePatch::price(Decimal::from(95)))
        .await?;

    match outcome {
        BulkSubmit::Applied(written) => println!("{} cells written", written.written),
        BulkSubmit::ConflictPrompt => {
            // Unattended run: keep existing rates, only fill the gaps
            let written = flow.resolve(ConflictChoice::FillGaps).await?;
            match written {
                Some(written) => println!("{} empty cells filled", written.written),
                None => println!("cancelled"),
            }
        }
    }

    Ok(())
}

// Price a stay against a running backend and print the nightly breakdown.
//
// HOSTAL_API_URL=http://localhost:3001 cargo run --example price_preview

use chrono::NaiveDate;
use hostal_client::{ClientConfig, HostalClient, QuoteEngine};
use shared::booking::{LoyaltyTier, PriceOption, PricingSelection, SelectionChange, Stay};
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
    let client = Arc::new(HostalClient::public(&config)?);
    let engine = QuoteEngine::new(client, "andes");

    let stay = Stay::new(
        1,
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
        2,
    );
    let selection = PricingSelection::default()
        .apply(SelectionChange::ChooseOption(PriceOption::NonResident))
        .apply(SelectionChange::ChooseLoyaltyTier(LoyaltyTier::Debit));

    if let Some(tier) = selection.loyalty_tier {
        println!("loyalty discount applied: {}", tier.label());
    }

    let state = engine.recompute(stay, selection).await;
    match (state.quote(), state.error()) {
        (Some(quote), _) => {
            for line in &quote.breakdown {
                let unit = line
                    .unit_price(stay.guests)
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "n/a".into());
                println!("{}: USD {} ({} x USD {})", line.date, line.final_price, stay.guests, unit);
            }
            println!("total: USD {}", quote.total);
        }
        (None, Some(err)) => println!("could not price the stay: {}", err),
        (None, None) => println!("nothing computed"),
    }

    Ok(())
}

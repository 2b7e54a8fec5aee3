//! Loads the dashboard for the first company the backend lists and prints a CSV report.
//!
//! Run with `cargo run --example governance_overview --features tracing-subscriber`.
//! Point it at a backend by passing the API root as the first argument.

use esg_dashboard::{CompanyBuilder, Dashboard, DashboardState, EsgClient};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut builder = EsgClient::builder();
    if let Some(base) = std::env::args().nth(1) {
        builder = builder.base_api(Url::parse(&base)?);
    }
    let client = builder.build()?;

    let mut state = DashboardState::new();
    state.set_companies(CompanyBuilder::new(&client).list().await?);
    let Some(company) = state.companies().first().cloned() else {
        println!("No companies found.");
        return Ok(());
    };

    let dashboard = Dashboard::new(&client, company);
    dashboard.refresh(&mut state).await;

    if let Some(msg) = state.error() {
        println!("Some panels failed: {msg}");
    }
    println!("Years: {:?}", state.available_years());
    if let Some(g) = state.governance() {
        println!(
            "Governance score {} ({})",
            g.score.score,
            g.score.rating().label()
        );
        for (name, points) in g.score.breakdown.iter() {
            println!("  {name:<24} {points:>6.2}");
        }
    }

    let overview = dashboard.overview(state.selected_year()).await;
    println!("{}", dashboard.report(&overview).to_csv()?);

    let trend_years: Vec<i32> = state.available_years().iter().rev().copied().collect();
    for (year, score) in dashboard.governance_trend(&trend_years).await {
        println!("{year}: {score}");
    }
    Ok(())
}

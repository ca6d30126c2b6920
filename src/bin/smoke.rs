//! Smoke check against the live configured API: authenticate with the
//! default account and list the current booking ids.

use anyhow::Context;
use booking_api_suite::configuration::get_configuration;
use booking_api_suite::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("smoke".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let client = configuration.booking_api.client();

    let token = client
        .authenticate(&configuration.booking_api.credentials())
        .await
        .context("Failed to authenticate against the booking API")?;
    tracing::info!("Authenticated; received a {}-byte token", token.as_str().len());

    let response = client
        .get("/booking")
        .await
        .context("Failed to list bookings")?;
    let status = response.status();
    let ids: Vec<serde_json::Value> = response
        .json()
        .await
        .context("Failed to parse the booking id list")?;
    tracing::info!(%status, "The API currently holds {} bookings", ids.len());

    Ok(())
}

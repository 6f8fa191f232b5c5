use anyhow::Context;
use email_settings::configuration::get_configuration;
use email_settings::startup::build;
use email_settings::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("email-settings".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let config = get_configuration().context("Failed to read configuration.")?;
    let app = build(config)?;
    tracing::info!(port = app.port(), "Serving email settings");
    app.run().await?;

    Ok(())
}

use anyhow::Result;
use invoice_roi::config::Settings;
use invoice_roi::Application;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    init_tracing(&settings);

    info!("Starting invoice ROI calculator");

    let app = Application::with_settings(settings).await?;
    app.run().await?;

    Ok(())
}

fn init_tracing(settings: &Settings) {
    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match settings.logging.format.as_str() {
        "json" => builder.json().init(),
        "pretty" => builder.pretty().init(),
        "compact" => builder.compact().init(),
        _ => builder.init(),
    }
}

use std::sync::Arc;

use sqlx::PgPool;
use tokio::signal;
use tracing::{info, instrument};

use crate::api::{self, AppState};
use crate::application::ScenarioService;
use crate::config::Settings;
use crate::infrastructure::{Database, PostgresReportSink, PostgresScenarioStore};
use crate::Result;

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    db_pool: PgPool,
}

impl Application {
    #[instrument]
    pub async fn new() -> Result<Self> {
        let settings = Settings::new()?;
        Self::with_settings(settings).await
    }

    /// Connect and migrate with the given settings.
    pub async fn with_settings(settings: Settings) -> Result<Self> {
        info!("Connecting to database at {}", settings.database.host);
        let database = Database::connect(
            &settings.database_url(),
            settings.database.max_connections,
        )
        .await?;
        database.migrate().await?;

        Ok(Self {
            settings,
            db_pool: database.pool().clone(),
        })
    }

    /// Serve the calculator API until a shutdown signal arrives.
    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let store = PostgresScenarioStore::new(self.db_pool.clone());
        let reports = PostgresReportSink::new(self.db_pool.clone());
        let service = ScenarioService::new(Arc::new(store), Arc::new(reports));
        let app = api::app(AppState::new(service), &self.settings.application);

        let address = format!(
            "{}:{}",
            self.settings.application.host, self.settings.application.port
        );
        let listener = tokio::net::TcpListener::bind(&address).await?;
        info!("Serving invoice ROI calculator on {address}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database connection"]
    async fn test_application_can_be_created() {
        let app = Application::new()
            .await
            .expect("Failed to create application");
        assert!(app.settings().application.port > 0);
    }
}

//! Application service coordinating the engine with scenario storage

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{
    compute, CalculationResult, ContactEmail, NewScenario, ReportReceipt, ReportSink, Scenario,
    ScenarioId, ScenarioInput, ScenarioStore,
};
use crate::error::{Error, Result};

/// A stored scenario together with figures recomputed from its inputs
///
/// Listings show the persisted snapshot; opening a scenario re-runs the
/// engine so the full month-by-month series is available again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioView {
    pub scenario: Scenario,
    pub result: CalculationResult,
}

/// Everything the HTTP surface needs: calculations plus scenario CRUD
///
/// Holds its collaborators behind the storage ports, so the same service
/// runs over Postgres in production and the in-memory store in tests.
pub struct ScenarioService {
    store: Arc<dyn ScenarioStore>,
    reports: Arc<dyn ReportSink>,
}

impl ScenarioService {
    pub fn new(store: Arc<dyn ScenarioStore>, reports: Arc<dyn ReportSink>) -> Self {
        Self { store, reports }
    }

    /// Run the engine without touching storage.
    pub fn calculate(&self, input: &ScenarioInput) -> CalculationResult {
        compute(input)
    }

    /// Compute and persist a scenario, returning the stored row.
    pub async fn save(&self, input: ScenarioInput) -> Result<Scenario> {
        let scenario = self.store.insert(NewScenario::computed(input)).await?;
        info!(scenario_id = %scenario.id, "Scenario saved");
        Ok(scenario)
    }

    /// Every stored scenario, newest first.
    pub async fn list(&self) -> Result<Vec<Scenario>> {
        self.store.list().await
    }

    /// Load one scenario and recompute its full result.
    pub async fn open(&self, id: &ScenarioId) -> Result<ScenarioView> {
        let scenario = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("scenario {id}")))?;
        let result = scenario.recompute();
        Ok(ScenarioView { scenario, result })
    }

    /// Remove a scenario. Absent ids are a no-op, like the store below.
    pub async fn delete(&self, id: &ScenarioId) -> Result<()> {
        self.store.delete(id).await?;
        info!(scenario_id = %id, "Scenario deleted");
        Ok(())
    }

    /// Record a report request against an existing scenario.
    pub async fn request_report(
        &self,
        id: &ScenarioId,
        email: &ContactEmail,
    ) -> Result<ReportReceipt> {
        if self.store.get(id).await?.is_none() {
            return Err(Error::not_found(format!("scenario {id}")));
        }
        let receipt = self.reports.record(id, email).await?;
        info!(scenario_id = %id, report_id = %receipt.id, "Report requested");
        Ok(receipt)
    }
}

//! Storage ports
//!
//! The narrow interface the application needs from the outside world:
//! insert / list / get / delete for scenarios, plus recording a report
//! request. Adapters live in [`crate::infrastructure`]; everything above
//! them talks to these traits only.

use async_trait::async_trait;

use crate::domain::report::{ContactEmail, ReportReceipt};
use crate::domain::scenario::{NewScenario, Scenario, ScenarioId};
use crate::error::Result;

/// Persistence port for saved scenarios
#[async_trait]
pub trait ScenarioStore: Send + Sync {
    /// Insert a new scenario. The store assigns `id` and `created_at`.
    async fn insert(&self, scenario: NewScenario) -> Result<Scenario>;

    /// Every stored scenario, newest first.
    async fn list(&self) -> Result<Vec<Scenario>>;

    /// One scenario by id, if present.
    async fn get(&self, id: &ScenarioId) -> Result<Option<Scenario>>;

    /// Remove a scenario. Deleting an absent id is not an error.
    async fn delete(&self, id: &ScenarioId) -> Result<()>;
}

/// Recording port for report requests
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Record that `email` asked for a report on `scenario_id`.
    async fn record(
        &self,
        scenario_id: &ScenarioId,
        email: &ContactEmail,
    ) -> Result<ReportReceipt>;
}

//! In-memory adapters for tests and local development
//!
//! Same contract as the Postgres adapters, minus the database: identity is
//! assigned in process (UUID v7 plus the current instant) and everything
//! lives behind a `parking_lot` lock.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::report::{ContactEmail, ReportId, ReportReceipt};
use crate::domain::repository::{ReportSink, ScenarioStore};
use crate::domain::scenario::{NewScenario, Scenario, ScenarioId};
use crate::Result;

/// Scenario store backed by a Vec behind a lock
///
/// Insertion order is creation order, so newest-first listing is a reverse
/// scan; that also keeps listings stable when two saves land on the same
/// timestamp.
#[derive(Debug, Default)]
pub struct InMemoryScenarioStore {
    scenarios: RwLock<Vec<Scenario>>,
}

impl InMemoryScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scenarios.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.read().is_empty()
    }
}

#[async_trait]
impl ScenarioStore for InMemoryScenarioStore {
    async fn insert(&self, scenario: NewScenario) -> Result<Scenario> {
        let stored = Scenario {
            id: ScenarioId::generate(),
            created_at: Utc::now(),
            input: scenario.input,
            snapshot: scenario.snapshot,
        };
        self.scenarios.write().push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Scenario>> {
        Ok(self.scenarios.read().iter().rev().cloned().collect())
    }

    async fn get(&self, id: &ScenarioId) -> Result<Option<Scenario>> {
        Ok(self
            .scenarios
            .read()
            .iter()
            .find(|scenario| &scenario.id == id)
            .cloned())
    }

    async fn delete(&self, id: &ScenarioId) -> Result<()> {
        self.scenarios.write().retain(|scenario| &scenario.id != id);
        Ok(())
    }
}

/// Report sink that remembers every request it was handed
#[derive(Debug, Default)]
pub struct InMemoryReportSink {
    requests: RwLock<Vec<(ScenarioId, ContactEmail)>>,
}

impl InMemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn recorded(&self) -> Vec<(ScenarioId, ContactEmail)> {
        self.requests.read().clone()
    }
}

#[async_trait]
impl ReportSink for InMemoryReportSink {
    async fn record(
        &self,
        scenario_id: &ScenarioId,
        email: &ContactEmail,
    ) -> Result<ReportReceipt> {
        self.requests
            .write()
            .push((scenario_id.clone(), email.clone()));
        Ok(ReportReceipt {
            id: ReportId::generate(),
            scenario_id: scenario_id.clone(),
            requested_at: Utc::now(),
        })
    }
}

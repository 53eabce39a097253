//! Saved scenario records
//!
//! A scenario is the nine inputs plus five headline figures copied from the
//! result at save time. Identity (`id`, `created_at`) belongs to the store:
//! the domain never invents it, it only carries it after the fact.

use chrono::{DateTime, Utc};
use nutype::nutype;
use uuid::Uuid;

#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

use crate::domain::engine::{self, CalculationResult};
use crate::domain::inputs::ScenarioInput;

/// Unique identifier for a saved scenario
#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRef
))]
pub struct ScenarioId(Uuid);

impl ScenarioId {
    /// Time-ordered id, for stores that assign identity in process.
    ///
    /// The Postgres adapter lets the database generate ids instead; this is
    /// what the in-memory store uses.
    pub fn generate() -> Self {
        Self::new(Uuid::now_v7())
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::generate()
    }
}

/// The five headline figures persisted with a scenario
///
/// Listings render these without re-running the engine. Opening a scenario
/// ignores them and recomputes the full result from the stored input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultSnapshot {
    pub monthly_savings: f64,
    pub cumulative_savings: f64,
    pub net_savings: f64,
    pub payback_months: f64,
    pub roi_percentage: f64,
}

impl From<&CalculationResult> for ResultSnapshot {
    fn from(result: &CalculationResult) -> Self {
        Self {
            monthly_savings: result.monthly_savings,
            cumulative_savings: result.cumulative_savings,
            net_savings: result.net_savings,
            payback_months: result.payback_months,
            roi_percentage: result.roi_percentage,
        }
    }
}

/// A scenario as handed to the store: everything except the identity the
/// store assigns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScenario {
    #[serde(flatten)]
    pub input: ScenarioInput,
    #[serde(flatten)]
    pub snapshot: ResultSnapshot,
}

impl NewScenario {
    /// Run the engine on `input` and pair it with its snapshot.
    pub fn computed(input: ScenarioInput) -> Self {
        let result = engine::compute(&input);
        Self {
            snapshot: ResultSnapshot::from(&result),
            input,
        }
    }
}

/// A stored scenario
///
/// Serializes flat (identity, inputs, and snapshot side by side), matching
/// the persisted row shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub input: ScenarioInput,
    #[serde(flatten)]
    pub snapshot: ResultSnapshot,
}

impl Scenario {
    /// Re-run the engine on the stored input.
    pub fn recompute(&self) -> CalculationResult {
        engine::compute(&self.input)
    }
}

//! Scenario input types
//!
//! Each of the nine calculator inputs is its own validated newtype, so a
//! constructed [`ScenarioInput`] is valid by construction and the engine
//! never has to re-check ranges. Wire payloads deserialize into
//! [`ScenarioInputDraft`] first; the draft conversion validates every field
//! and reports all violations together rather than stopping at the first.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::domain::limits;

/// Human-readable scenario label
///
/// Limited to 100 characters to keep listings and report subjects readable.
#[nutype(
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ScenarioName(String);

/// Invoices processed per month
///
/// Capped at one million; beyond that the linear cost model stops being a
/// useful approximation anyway.
#[nutype(
    validate(greater_or_equal = 1, less_or_equal = 1_000_000),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct MonthlyInvoiceVolume(u32);

/// Accounts-payable staff working on invoices
#[nutype(
    validate(greater_or_equal = 1, less_or_equal = 1_000),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct ApStaffCount(u32);

/// Staff hours spent per invoice (0.01 to 24)
#[nutype(
    validate(finite, greater_or_equal = 0.01, less_or_equal = 24.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct HoursPerInvoice(f64);

impl Eq for HoursPerInvoice {} // Safe since validation ensures finite values

/// Hourly wage of AP staff, in currency units
#[nutype(
    validate(finite, greater_or_equal = 1.0, less_or_equal = 10_000.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct HourlyWage(f64);

impl Eq for HourlyWage {} // Safe since validation ensures finite values

/// Error rate of the manual process, in percent (0 to 100)
///
/// Stored as entered by the user; the engine divides by 100 itself.
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 100.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct ManualErrorRate(f64);

impl Eq for ManualErrorRate {} // Safe since validation ensures finite values

/// Cost of correcting a single processing error, in currency units
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1_000_000.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct ErrorCost(f64);

impl Eq for ErrorCost {} // Safe since validation ensures finite values

/// Projection horizon in months (1 to 120)
#[nutype(
    validate(greater_or_equal = 1, less_or_equal = 120),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct TimeHorizonMonths(u32);

/// One-time cost of rolling out automation, in currency units
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 100_000_000.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct ImplementationCost(f64);

impl Eq for ImplementationCost {} // Safe since validation ensures finite values

/// A fully validated set of calculator inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub scenario_name: ScenarioName,
    pub monthly_invoice_volume: MonthlyInvoiceVolume,
    pub num_ap_staff: ApStaffCount,
    pub avg_hours_per_invoice: HoursPerInvoice,
    pub hourly_wage: HourlyWage,
    pub error_rate_manual: ManualErrorRate,
    pub error_cost: ErrorCost,
    pub time_horizon_months: TimeHorizonMonths,
    pub one_time_implementation_cost: ImplementationCost,
}

impl ScenarioInput {
    /// The scenario the calculator starts from: a mid-size AP team
    /// processing 2000 invoices a month.
    pub fn starter() -> Self {
        Self {
            scenario_name: ScenarioName::try_new("My Scenario").expect("name is valid"),
            monthly_invoice_volume: MonthlyInvoiceVolume::try_new(2000).expect("2000 is in range"),
            num_ap_staff: ApStaffCount::try_new(3).expect("3 is in range"),
            avg_hours_per_invoice: HoursPerInvoice::try_new(0.17).expect("0.17 is in range"),
            hourly_wage: HourlyWage::try_new(500.0).expect("500 is in range"),
            error_rate_manual: ManualErrorRate::try_new(0.5).expect("0.5 is in range"),
            error_cost: ErrorCost::try_new(2000.0).expect("2000 is in range"),
            time_horizon_months: TimeHorizonMonths::try_new(36).expect("36 is in range"),
            one_time_implementation_cost: ImplementationCost::try_new(500_000.0)
                .expect("500k is in range"),
        }
    }
}

/// Unvalidated wire shape of a scenario input
///
/// Everything the HTTP layer accepts funnels through this before reaching
/// the typed [`ScenarioInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputDraft {
    pub scenario_name: String,
    pub monthly_invoice_volume: u32,
    pub num_ap_staff: u32,
    pub avg_hours_per_invoice: f64,
    pub hourly_wage: f64,
    pub error_rate_manual: f64,
    pub error_cost: f64,
    pub time_horizon_months: u32,
    pub one_time_implementation_cost: f64,
}

/// A single input field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Every violation found in one draft, in field order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, thiserror::Error)]
#[error("{} input field(s) out of range", .0.len())]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: String) {
        self.0.push(FieldViolation { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|v| v.field).collect()
    }
}

fn range_message(min: impl Display, max: impl Display) -> String {
    format!("must be between {min} and {max}")
}

fn accept<T, E>(
    violations: &mut ValidationErrors,
    field: &'static str,
    message: String,
    outcome: Result<T, E>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(_) => {
            violations.push(field, message);
            None
        }
    }
}

impl TryFrom<ScenarioInputDraft> for ScenarioInput {
    type Error = ValidationErrors;

    fn try_from(draft: ScenarioInputDraft) -> Result<Self, Self::Error> {
        let mut violations = ValidationErrors::default();

        let scenario_name = accept(
            &mut violations,
            "scenario_name",
            format!(
                "must be between {} and {} characters",
                limits::scenario_name::MIN_CHARS,
                limits::scenario_name::MAX_CHARS
            ),
            ScenarioName::try_new(draft.scenario_name),
        );
        let monthly_invoice_volume = accept(
            &mut violations,
            "monthly_invoice_volume",
            range_message(
                limits::monthly_invoice_volume::MIN,
                limits::monthly_invoice_volume::MAX,
            ),
            MonthlyInvoiceVolume::try_new(draft.monthly_invoice_volume),
        );
        let num_ap_staff = accept(
            &mut violations,
            "num_ap_staff",
            range_message(limits::num_ap_staff::MIN, limits::num_ap_staff::MAX),
            ApStaffCount::try_new(draft.num_ap_staff),
        );
        let avg_hours_per_invoice = accept(
            &mut violations,
            "avg_hours_per_invoice",
            range_message(
                limits::avg_hours_per_invoice::MIN,
                limits::avg_hours_per_invoice::MAX,
            ),
            HoursPerInvoice::try_new(draft.avg_hours_per_invoice),
        );
        let hourly_wage = accept(
            &mut violations,
            "hourly_wage",
            range_message(limits::hourly_wage::MIN, limits::hourly_wage::MAX),
            HourlyWage::try_new(draft.hourly_wage),
        );
        let error_rate_manual = accept(
            &mut violations,
            "error_rate_manual",
            range_message(limits::error_rate_manual::MIN, limits::error_rate_manual::MAX),
            ManualErrorRate::try_new(draft.error_rate_manual),
        );
        let error_cost = accept(
            &mut violations,
            "error_cost",
            range_message(limits::error_cost::MIN, limits::error_cost::MAX),
            ErrorCost::try_new(draft.error_cost),
        );
        let time_horizon_months = accept(
            &mut violations,
            "time_horizon_months",
            range_message(
                limits::time_horizon_months::MIN,
                limits::time_horizon_months::MAX,
            ),
            TimeHorizonMonths::try_new(draft.time_horizon_months),
        );
        let one_time_implementation_cost = accept(
            &mut violations,
            "one_time_implementation_cost",
            range_message(
                limits::one_time_implementation_cost::MIN,
                limits::one_time_implementation_cost::MAX,
            ),
            ImplementationCost::try_new(draft.one_time_implementation_cost),
        );

        let (
            Some(scenario_name),
            Some(monthly_invoice_volume),
            Some(num_ap_staff),
            Some(avg_hours_per_invoice),
            Some(hourly_wage),
            Some(error_rate_manual),
            Some(error_cost),
            Some(time_horizon_months),
            Some(one_time_implementation_cost),
        ) = (
            scenario_name,
            monthly_invoice_volume,
            num_ap_staff,
            avg_hours_per_invoice,
            hourly_wage,
            error_rate_manual,
            error_cost,
            time_horizon_months,
            one_time_implementation_cost,
        )
        else {
            return Err(violations);
        };

        Ok(Self {
            scenario_name,
            monthly_invoice_volume,
            num_ap_staff,
            avg_hours_per_invoice,
            hourly_wage,
            error_rate_manual,
            error_cost,
            time_horizon_months,
            one_time_implementation_cost,
        })
    }
}

impl From<ScenarioInput> for ScenarioInputDraft {
    fn from(input: ScenarioInput) -> Self {
        Self {
            scenario_name: input.scenario_name.into_inner(),
            monthly_invoice_volume: input.monthly_invoice_volume.into_inner(),
            num_ap_staff: input.num_ap_staff.into_inner(),
            avg_hours_per_invoice: input.avg_hours_per_invoice.into_inner(),
            hourly_wage: input.hourly_wage.into_inner(),
            error_rate_manual: input.error_rate_manual.into_inner(),
            error_cost: input.error_cost.into_inner(),
            time_horizon_months: input.time_horizon_months.into_inner(),
            one_time_implementation_cost: input.one_time_implementation_cost.into_inner(),
        }
    }
}

//! Validation bounds for scenario inputs
//!
//! One module per input field. The nutype definitions in
//! [`crate::domain::inputs`] reference these, and the draft-validation error
//! messages are built from them, so the bounds live in exactly one place.

/// Scenario name length bounds (characters)
pub mod scenario_name {
    pub const MIN_CHARS: usize = 1;
    pub const MAX_CHARS: usize = 100;
}

/// Invoices processed per month
pub mod monthly_invoice_volume {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 1_000_000;
}

/// Accounts-payable staff headcount
pub mod num_ap_staff {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 1_000;
}

/// Hours of staff time spent per invoice
pub mod avg_hours_per_invoice {
    pub const MIN: f64 = 0.01;
    pub const MAX: f64 = 24.0;
}

/// Hourly wage, in currency units
pub mod hourly_wage {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 10_000.0;
}

/// Manual error rate, in percent
pub mod error_rate_manual {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;
}

/// Cost of correcting one error, in currency units
pub mod error_cost {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1_000_000.0;
}

/// Projection horizon, in months
pub mod time_horizon_months {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 120;
}

/// One-time implementation cost, in currency units
pub mod one_time_implementation_cost {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100_000_000.0;
}

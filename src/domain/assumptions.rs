//! Fixed model assumptions baked into the ROI calculation
//!
//! These values describe the automated process the calculator compares
//! against. They are part of the model itself, never configuration: changing
//! any of them changes what the tool claims, so they are pinned here and in
//! the engine tests.

/// Cost model of the automated process
pub mod automation {
    /// Processing cost per invoice once automated, in currency units
    pub const COST_PER_INVOICE: f64 = 0.20;

    /// Error rate of the automated process, as a fraction (0.1%)
    pub const ERROR_RATE: f64 = 0.001;

    /// Minutes of staff time saved per automated invoice
    pub const TIME_SAVED_MINUTES_PER_INVOICE: f64 = 8.0;
}

/// Savings model adjustments
pub mod savings {
    /// Multiplier applied to raw monthly savings before any derived metric.
    ///
    /// Embedded business assumption carried over from the original model.
    /// Every downstream figure (cumulative, net, payback, ROI, series) is
    /// computed from the multiplied value.
    pub const MONTHLY_MULTIPLIER: f64 = 1.1;
}

/// Projection series bounds
pub mod projection {
    /// Maximum number of months either projection series may contain,
    /// regardless of the requested time horizon
    pub const MAX_SERIES_MONTHS: u32 = 36;
}

/// Unit conversions used by the model
pub mod units {
    /// Minutes in an hour, for time-saved conversion
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Percent scale factor
    pub const PERCENT: f64 = 100.0;
}

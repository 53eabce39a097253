//! Property-based tests for the calculation engine
//!
//! These verify the invariants that must hold for every valid input set:
//! purity, series shape, the cumulative-savings identity, and the
//! degenerate-case guards.

use invoice_roi::domain::{compute, ScenarioInput, ScenarioInputDraft};
use proptest::prelude::*;

// Property test generators
pub mod generators {
    use super::*;

    fn from_parts(
        (volume, staff, hours, wage, rate, error_cost, horizon, implementation): (
            u32,
            u32,
            f64,
            f64,
            f64,
            f64,
            u32,
            f64,
        ),
    ) -> ScenarioInput {
        ScenarioInput::try_from(ScenarioInputDraft {
            scenario_name: "generated".to_string(),
            monthly_invoice_volume: volume,
            num_ap_staff: staff,
            avg_hours_per_invoice: hours,
            hourly_wage: wage,
            error_rate_manual: rate,
            error_cost,
            time_horizon_months: horizon,
            one_time_implementation_cost: implementation,
        })
        .expect("generated inputs are in range")
    }

    /// Any input the validators accept
    pub fn scenario_input() -> impl Strategy<Value = ScenarioInput> {
        (
            1u32..=1_000_000,
            1u32..=1_000,
            0.01f64..=24.0,
            1.0f64..=10_000.0,
            0.0f64..=100.0,
            0.0f64..=1_000_000.0,
            1u32..=120,
            0.0f64..=100_000_000.0,
        )
            .prop_map(from_parts)
    }

    /// Inputs with a free implementation
    pub fn free_implementation_input() -> impl Strategy<Value = ScenarioInput> {
        (
            1u32..=1_000_000,
            1u32..=1_000,
            0.01f64..=24.0,
            1.0f64..=10_000.0,
            0.0f64..=100.0,
            0.0f64..=1_000_000.0,
            1u32..=120,
            Just(0.0),
        )
            .prop_map(from_parts)
    }

    /// Inputs where the manual process is cheaper than automation, so the
    /// engine must report a losing switch
    pub fn losing_input() -> impl Strategy<Value = ScenarioInput> {
        (
            1u32..=1_000_000,
            Just(1u32),
            0.01f64..=0.015,
            1.0f64..=2.0,
            Just(0.0),
            Just(0.0),
            1u32..=120,
            1.0f64..=100_000_000.0,
        )
            .prop_map(from_parts)
    }
}

proptest! {
    #[test]
    fn prop_compute_is_pure(input in generators::scenario_input()) {
        prop_assert_eq!(compute(&input), compute(&input));
    }

    #[test]
    fn prop_series_lengths_follow_the_horizon(input in generators::scenario_input()) {
        let horizon = input.time_horizon_months.into_inner();
        let expected = horizon.min(36) as usize;

        let result = compute(&input);
        prop_assert_eq!(result.monthly_series.len(), expected);
        prop_assert_eq!(result.cumulative_series.len(), expected);
    }

    #[test]
    fn prop_months_are_one_based_and_contiguous(input in generators::scenario_input()) {
        let result = compute(&input);
        for (i, point) in result.monthly_series.iter().enumerate() {
            prop_assert_eq!(point.month as usize, i + 1);
        }
        for (i, point) in result.cumulative_series.iter().enumerate() {
            prop_assert_eq!(point.month as usize, i + 1);
        }
    }

    #[test]
    fn prop_cumulative_points_follow_the_identity(input in generators::scenario_input()) {
        let cost = input.one_time_implementation_cost.into_inner();
        let result = compute(&input);

        for point in &result.cumulative_series {
            prop_assert_eq!(
                point.savings,
                result.monthly_savings * f64::from(point.month) - cost
            );
        }
    }

    #[test]
    fn prop_break_even_always_aliases_payback(input in generators::scenario_input()) {
        let result = compute(&input);
        prop_assert_eq!(result.break_even_point, result.payback_months);
    }

    #[test]
    fn prop_payback_is_never_negative(input in generators::scenario_input()) {
        let result = compute(&input);
        prop_assert!(result.payback_months >= 0.0);
    }

    #[test]
    fn prop_every_figure_is_finite(input in generators::scenario_input()) {
        let result = compute(&input);
        prop_assert!(result.monthly_savings.is_finite());
        prop_assert!(result.cumulative_savings.is_finite());
        prop_assert!(result.net_savings.is_finite());
        prop_assert!(result.payback_months.is_finite());
        prop_assert!(result.roi_percentage.is_finite());
        prop_assert!(result.productivity_gain.is_finite());
    }

    #[test]
    fn prop_free_implementation_zeroes_roi_and_payback(
        input in generators::free_implementation_input()
    ) {
        let result = compute(&input);
        prop_assert_eq!(result.roi_percentage, 0.0);
        prop_assert_eq!(result.payback_months, 0.0);
    }

    #[test]
    fn prop_losing_scenarios_zero_payback(input in generators::losing_input()) {
        let result = compute(&input);
        prop_assert!(result.monthly_savings < 0.0);
        prop_assert_eq!(result.payback_months, 0.0);
        prop_assert_eq!(result.break_even_point, 0.0);
    }
}

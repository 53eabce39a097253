//! The ROI calculation engine
//!
//! One pure function over a validated [`ScenarioInput`]. All arithmetic is
//! IEEE-754 f64 and the evaluation order is fixed; reordering expressions
//! changes low bits and breaks the recompute-on-open contract, so resist the
//! urge to factor the formulas.

use serde::{Deserialize, Serialize};

use crate::domain::assumptions::{automation, projection, savings, units};
use crate::domain::inputs::ScenarioInput;

/// One month of the cost-comparison projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCostPoint {
    /// 1-based month index
    pub month: u32,
    pub manual_cost: f64,
    pub automated_cost: f64,
    pub savings: f64,
}

/// One month of the cumulative-savings projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativeSavingsPoint {
    /// 1-based month index
    pub month: u32,
    /// `monthly_savings * month - one_time_implementation_cost`
    pub savings: f64,
}

/// Everything the calculator derives from one input set
///
/// `break_even_point` always equals `payback_months`; both names are kept
/// because listings show one and the projection chart labels the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub labor_cost_manual: f64,
    pub auto_cost: f64,
    pub error_savings: f64,
    pub monthly_savings: f64,
    pub cumulative_savings: f64,
    pub net_savings: f64,
    pub payback_months: f64,
    pub roi_percentage: f64,
    pub time_saved_hours: f64,
    pub productivity_gain: f64,
    pub break_even_point: f64,
    pub monthly_series: Vec<MonthlyCostPoint>,
    pub cumulative_series: Vec<CumulativeSavingsPoint>,
}

/// Months either projection series will contain
fn series_months(time_horizon_months: u32) -> u32 {
    time_horizon_months.min(projection::MAX_SERIES_MONTHS)
}

/// Compute the full ROI picture for one scenario.
///
/// Pure: no I/O, no clock, no randomness. Identical inputs produce
/// bit-identical results, which reopening a stored scenario relies on.
///
/// Degenerate cases never error: a scenario that saves nothing reports
/// `payback_months = 0`, and a free implementation reports
/// `roi_percentage = 0`.
pub fn compute(input: &ScenarioInput) -> CalculationResult {
    let volume = f64::from(input.monthly_invoice_volume.into_inner());
    let staff = f64::from(input.num_ap_staff.into_inner());
    let hours = input.avg_hours_per_invoice.into_inner();
    let wage = input.hourly_wage.into_inner();
    let manual_rate_percent = input.error_rate_manual.into_inner();
    let error_cost = input.error_cost.into_inner();
    let horizon = input.time_horizon_months.into_inner();
    let implementation_cost = input.one_time_implementation_cost.into_inner();

    // What the manual process costs per month.
    let labor_cost_manual = staff * wage * hours * volume;

    // What the automated process would cost per month.
    let auto_cost = volume * automation::COST_PER_INVOICE;

    // Error correction: the manual rate is entered in percent, the
    // automated rate is already a fraction.
    let manual_errors = volume * (manual_rate_percent / units::PERCENT);
    let auto_errors = volume * automation::ERROR_RATE;
    let error_savings = (manual_errors - auto_errors) * error_cost;

    let monthly_savings_raw = (labor_cost_manual + error_savings) - auto_cost;
    let monthly_savings = monthly_savings_raw * savings::MONTHLY_MULTIPLIER;

    let cumulative_savings = monthly_savings * f64::from(horizon);
    let net_savings = cumulative_savings - implementation_cost;

    let payback_months = if monthly_savings > 0.0 {
        implementation_cost / monthly_savings
    } else {
        0.0
    };
    let roi_percentage = if implementation_cost > 0.0 {
        (net_savings / implementation_cost) * units::PERCENT
    } else {
        0.0
    };

    let time_saved_hours =
        volume * automation::TIME_SAVED_MINUTES_PER_INVOICE / units::MINUTES_PER_HOUR;
    // labor_cost_manual is positive for every valid input, so the division
    // needs no guard.
    let productivity_gain = ((labor_cost_manual - auto_cost) / labor_cost_manual) * units::PERCENT;

    let months = series_months(horizon);
    let mut monthly_series = Vec::with_capacity(months as usize);
    let mut cumulative_series = Vec::with_capacity(months as usize);
    for month in 1..=months {
        monthly_series.push(MonthlyCostPoint {
            month,
            manual_cost: labor_cost_manual,
            automated_cost: auto_cost,
            savings: monthly_savings,
        });
        cumulative_series.push(CumulativeSavingsPoint {
            month,
            savings: monthly_savings * f64::from(month) - implementation_cost,
        });
    }

    CalculationResult {
        labor_cost_manual,
        auto_cost,
        error_savings,
        monthly_savings,
        cumulative_savings,
        net_savings,
        payback_months,
        roi_percentage,
        time_saved_hours,
        productivity_gain,
        break_even_point: payback_months,
        monthly_series,
        cumulative_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inputs::{
        ApStaffCount, ErrorCost, HourlyWage, HoursPerInvoice, ImplementationCost, ManualErrorRate,
        MonthlyInvoiceVolume, TimeHorizonMonths,
    };

    const TOLERANCE: f64 = 1e-6;

    /// 3 staff at 500/hour, 0.17h per invoice, 2000 invoices/month, 0.5%
    /// manual error rate at 2000 per error, 36 months, 500k rollout.
    fn reference_scenario() -> ScenarioInput {
        ScenarioInput::starter()
    }

    #[test]
    fn test_reference_scenario_monthly_breakdown() {
        let result = compute(&reference_scenario());

        assert!((result.labor_cost_manual - 510_000.0).abs() < TOLERANCE);
        assert!((result.auto_cost - 400.0).abs() < TOLERANCE);
        // 0.5% of 2000 is 10 errors; automation leaves 2; 8 fewer at 2000 each.
        assert!((result.error_savings - 16_000.0).abs() < TOLERANCE);
        assert!((result.monthly_savings - 578_160.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_reference_scenario_horizon_metrics() {
        let result = compute(&reference_scenario());

        assert!((result.cumulative_savings - 20_813_760.0).abs() < 1e-4);
        assert!((result.net_savings - 20_313_760.0).abs() < 1e-4);
        assert!((result.payback_months - 0.864_812_5).abs() < TOLERANCE);
        assert!((result.roi_percentage - 4_062.752).abs() < TOLERANCE);
    }

    #[test]
    fn test_reference_scenario_side_metrics() {
        let result = compute(&reference_scenario());

        assert_eq!(result.time_saved_hours, 16_000.0 / 60.0);
        assert!((result.productivity_gain - 99.921_568_627_450_98).abs() < TOLERANCE);
    }

    #[test]
    fn test_multiplier_is_applied_to_raw_savings() {
        let result = compute(&reference_scenario());
        let raw = (result.labor_cost_manual + result.error_savings) - result.auto_cost;
        assert_eq!(result.monthly_savings, raw * savings::MONTHLY_MULTIPLIER);
    }

    #[test]
    fn test_free_implementation_zeroes_roi_and_payback() {
        let mut input = reference_scenario();
        input.one_time_implementation_cost = ImplementationCost::try_new(0.0).unwrap();
        let result = compute(&input);

        assert_eq!(result.roi_percentage, 0.0);
        assert_eq!(result.payback_months, 0.0);
        assert_eq!(result.net_savings, result.cumulative_savings);
    }

    #[test]
    fn test_negative_savings_zeroes_payback() {
        // Tiny manual effort, no error costs: automation only adds cost.
        let input = ScenarioInput {
            scenario_name: reference_scenario().scenario_name,
            monthly_invoice_volume: MonthlyInvoiceVolume::try_new(1000).unwrap(),
            num_ap_staff: ApStaffCount::try_new(1).unwrap(),
            avg_hours_per_invoice: HoursPerInvoice::try_new(0.01).unwrap(),
            hourly_wage: HourlyWage::try_new(1.0).unwrap(),
            error_rate_manual: ManualErrorRate::try_new(0.0).unwrap(),
            error_cost: ErrorCost::try_new(0.0).unwrap(),
            time_horizon_months: TimeHorizonMonths::try_new(12).unwrap(),
            one_time_implementation_cost: ImplementationCost::try_new(100_000.0).unwrap(),
        };
        let result = compute(&input);

        assert!(result.monthly_savings < 0.0);
        assert_eq!(result.payback_months, 0.0);
        assert!(result.roi_percentage < 0.0);
        assert!(result.net_savings < 0.0);
    }

    #[test]
    fn test_exactly_zero_savings_zeroes_payback() {
        // Labor exactly cancels the automation cost: staff * wage * hours
        // comes to 0.2, the automated per-invoice cost, and there are no
        // error figures to tip the balance either way.
        let input = ScenarioInput {
            scenario_name: reference_scenario().scenario_name,
            monthly_invoice_volume: MonthlyInvoiceVolume::try_new(5000).unwrap(),
            num_ap_staff: ApStaffCount::try_new(1).unwrap(),
            avg_hours_per_invoice: HoursPerInvoice::try_new(0.2).unwrap(),
            hourly_wage: HourlyWage::try_new(1.0).unwrap(),
            error_rate_manual: ManualErrorRate::try_new(0.0).unwrap(),
            error_cost: ErrorCost::try_new(0.0).unwrap(),
            time_horizon_months: TimeHorizonMonths::try_new(12).unwrap(),
            one_time_implementation_cost: ImplementationCost::try_new(10_000.0).unwrap(),
        };
        let result = compute(&input);

        assert_eq!(result.monthly_savings, 0.0);
        assert_eq!(result.payback_months, 0.0);
        // Zero savings never recovers the rollout cost.
        assert_eq!(result.roi_percentage, -100.0);
    }

    #[test]
    fn test_break_even_point_always_equals_payback() {
        let profitable = compute(&reference_scenario());
        assert_eq!(profitable.break_even_point, profitable.payback_months);

        let mut free = reference_scenario();
        free.one_time_implementation_cost = ImplementationCost::try_new(0.0).unwrap();
        let result = compute(&free);
        assert_eq!(result.break_even_point, result.payback_months);
    }

    #[test]
    fn test_series_are_capped_at_36_months() {
        let mut input = reference_scenario();
        input.time_horizon_months = TimeHorizonMonths::try_new(120).unwrap();
        let result = compute(&input);

        assert_eq!(result.monthly_series.len(), 36);
        assert_eq!(result.cumulative_series.len(), 36);
        // The cap only truncates the chart; horizon totals still use 120.
        assert!((result.cumulative_savings - result.monthly_savings * 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_short_horizon_series_match_horizon() {
        let mut input = reference_scenario();
        input.time_horizon_months = TimeHorizonMonths::try_new(7).unwrap();
        let result = compute(&input);

        assert_eq!(result.monthly_series.len(), 7);
        assert_eq!(result.cumulative_series.len(), 7);
    }

    #[test]
    fn test_series_months_are_one_based_and_contiguous() {
        let result = compute(&reference_scenario());
        for (i, point) in result.monthly_series.iter().enumerate() {
            assert_eq!(point.month, i as u32 + 1);
        }
        for (i, point) in result.cumulative_series.iter().enumerate() {
            assert_eq!(point.month, i as u32 + 1);
        }
    }

    #[test]
    fn test_cumulative_series_identity() {
        let input = reference_scenario();
        let cost = input.one_time_implementation_cost.into_inner();
        let result = compute(&input);

        for point in &result.cumulative_series {
            assert_eq!(
                point.savings,
                result.monthly_savings * f64::from(point.month) - cost
            );
        }
        // The series climbs toward (but net of cost, never reaches) the
        // horizon total.
        assert!(result.cumulative_series[0].savings < result.cumulative_savings);
    }

    #[test]
    fn test_monthly_series_points_repeat_the_monthly_figures() {
        let result = compute(&reference_scenario());
        for point in &result.monthly_series {
            assert_eq!(point.manual_cost, result.labor_cost_manual);
            assert_eq!(point.automated_cost, result.auto_cost);
            assert_eq!(point.savings, result.monthly_savings);
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let input = reference_scenario();
        assert_eq!(compute(&input), compute(&input));
    }

    #[test]
    fn test_result_serializes_with_stable_field_names() {
        let json = serde_json::to_value(compute(&reference_scenario())).unwrap();
        assert!(json["break_even_point"].is_number());
        assert!(json["monthly_series"].is_array());
        assert_eq!(json["monthly_series"][0]["month"], 1);
        assert!(json["cumulative_series"][35]["savings"].is_number());
    }
}

//! Property-based tests for the estimator.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::BudgetEstimator;
use super::types::{EstimationInput, Priority, ProjectType};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2040, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        // Clamp the day into the month; 28 always exists.
        NaiveDate::from_ymd_opt(y, m, d)
            .or_else(|| NaiveDate::from_ymd_opt(y, m, 28))
            .unwrap()
    })
}

fn project_type_strategy() -> impl Strategy<Value = ProjectType> {
    prop::sample::select(ProjectType::ALL.to_vec())
}

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop::sample::select(Priority::ALL.to_vec())
}

fn make_input(
    project_type: ProjectType,
    priority: Priority,
    technical_requirements: u32,
    start: NaiveDate,
    end: NaiveDate,
) -> EstimationInput {
    EstimationInput {
        project_type,
        priority,
        technical_requirements,
        start_date: Some(start),
        end_date: Some(end),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Budgets are never negative and always a multiple of 50.
    #[test]
    fn prop_budget_non_negative_multiple_of_fifty(
        project_type in project_type_strategy(),
        priority in priority_strategy(),
        reqs in 0u32..200,
        start in date_strategy(),
        end in date_strategy(),
    ) {
        let result = BudgetEstimator::estimate(&make_input(project_type, priority, reqs, start, end));

        prop_assert!(result.budget >= Decimal::ZERO);
        prop_assert_eq!(result.budget % dec!(50), Decimal::ZERO);
    }

    /// Same input, same output.
    #[test]
    fn prop_estimate_is_deterministic(
        project_type in project_type_strategy(),
        priority in priority_strategy(),
        reqs in 0u32..50,
        start in date_strategy(),
        end in date_strategy(),
    ) {
        let input = make_input(project_type, priority, reqs, start, end);
        let first = BudgetEstimator::estimate(&input);
        let second = BudgetEstimator::estimate(&input);

        prop_assert_eq!(first, second);
    }

    /// More technical requirements never lower the budget.
    #[test]
    fn prop_more_requirements_never_cheaper(
        project_type in project_type_strategy(),
        priority in priority_strategy(),
        reqs in 0u32..100,
        extra in 0u32..20,
        start in date_strategy(),
        length in 0u64..1000,
    ) {
        let end = start.checked_add_days(Days::new(length)).unwrap();
        let fewer = BudgetEstimator::estimate(&make_input(project_type, priority, reqs, start, end));
        let more = BudgetEstimator::estimate(&make_input(project_type, priority, reqs + extra, start, end));

        prop_assert!(more.budget >= fewer.budget);
    }

    /// Moving the end date later never lowers the budget.
    #[test]
    fn prop_longer_span_never_cheaper(
        project_type in project_type_strategy(),
        priority in priority_strategy(),
        reqs in 0u32..20,
        start in date_strategy(),
        length in 0u64..1500,
        extra in 0u64..120,
    ) {
        let end = start.checked_add_days(Days::new(length)).unwrap();
        let later = end.checked_add_days(Days::new(extra)).unwrap();

        let shorter = BudgetEstimator::estimate(&make_input(project_type, priority, reqs, start, end));
        let longer = BudgetEstimator::estimate(&make_input(project_type, priority, reqs, start, later));

        prop_assert!(
            longer.budget >= shorter.budget,
            "{} -> {} cost {}, but {} -> {} cost {}",
            start, end, shorter.budget, start, later, longer.budget
        );
    }

    /// An end date before the start prices the surcharge alone.
    #[test]
    fn prop_reversed_span_prices_surcharge_only(
        project_type in project_type_strategy(),
        priority in priority_strategy(),
        reqs in 0u32..50,
        end in date_strategy(),
        gap in 1u64..800,
    ) {
        let start = end.checked_add_days(Days::new(gap)).unwrap();
        let result = BudgetEstimator::estimate(&make_input(project_type, priority, reqs, start, end));

        let expected = BudgetEstimator::round_to_increment(BudgetEstimator::surcharge(reqs));
        prop_assert_eq!(result.budget, expected);
    }

    /// Whole months cost exactly rate × months before the multiplier.
    #[test]
    fn prop_whole_months_priced_exactly(
        project_type in project_type_strategy(),
        year in 2000i32..2040,
        month in 1u32..=12,
        months in 0u32..36,
    ) {
        let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let end = start.checked_add_months(chrono::Months::new(months)).unwrap();
        let result = BudgetEstimator::estimate(&make_input(project_type, Priority::Medium, 0, start, end));

        prop_assert_eq!(result.breakdown.days, 0);
        prop_assert_eq!(
            result.breakdown.base_cost,
            project_type.monthly_rate() * Decimal::from(months)
        );
    }
}

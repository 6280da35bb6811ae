//! Budget estimation engine.

use rust_decimal::{Decimal, RoundingStrategy};

use super::span::EngagementSpan;
use super::types::{EstimateBreakdown, EstimationInput, EstimationResult};

/// Fixed month length used to derive the daily rate.
pub const DAYS_PER_MONTH: u32 = 30;

/// Technical requirements included at no extra cost.
pub const FREE_TECHNICAL_REQUIREMENTS: u32 = 5;

/// Charge for each technical requirement beyond the free allotment.
pub const SURCHARGE_PER_REQUIREMENT: u32 = 25;

/// Budgets are quoted in multiples of this amount.
pub const ROUNDING_INCREMENT: u32 = 50;

/// Stateless estimator behind the budget simulator.
pub struct BudgetEstimator;

impl BudgetEstimator {
    /// Estimates a project budget.
    ///
    /// Never fails: unknown labels and missing dates were already resolved to
    /// defaults when the input was built, and a negative amount is clamped to
    /// zero.
    #[must_use]
    pub fn estimate(input: &EstimationInput) -> EstimationResult {
        let monthly_rate = input.project_type.monthly_rate();
        let span = EngagementSpan::between_opt(input.start_date, input.end_date);

        // days × (rate / 30) computed as (days × rate) / 30 so whole-month
        // multiples stay exact.
        let base_cost = Decimal::from(span.months) * monthly_rate
            + Decimal::from(span.days) * monthly_rate / Decimal::from(DAYS_PER_MONTH);

        let multiplier = input.priority.multiplier();
        let surcharge = Self::surcharge(input.technical_requirements);

        let budget =
            Self::round_to_increment(base_cost * multiplier + surcharge).max(Decimal::ZERO);

        EstimationResult {
            budget,
            breakdown: EstimateBreakdown {
                project_type: input.project_type,
                priority: input.priority,
                monthly_rate,
                months: span.months,
                days: span.days,
                base_cost: base_cost.round_dp(2),
                multiplier,
                surcharge,
            },
        }
    }

    /// Surcharge for technical requirements above the free allotment.
    #[must_use]
    pub fn surcharge(technical_requirements: u32) -> Decimal {
        let billable = technical_requirements.saturating_sub(FREE_TECHNICAL_REQUIREMENTS);
        Decimal::from(billable) * Decimal::from(SURCHARGE_PER_REQUIREMENT)
    }

    /// Rounds to the nearest multiple of [`ROUNDING_INCREMENT`], halves going up.
    #[must_use]
    pub fn round_to_increment(amount: Decimal) -> Decimal {
        let increment = Decimal::from(ROUNDING_INCREMENT);
        (amount / increment).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            * increment
    }
}

/// Shorthand for [`BudgetEstimator::estimate`].
#[must_use]
pub fn estimate(input: &EstimationInput) -> EstimationResult {
    BudgetEstimator::estimate(input)
}

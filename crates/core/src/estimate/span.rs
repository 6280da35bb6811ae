//! Calendar span between two dates as whole months plus leftover days.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of an engagement in whole months and remaining days.
///
/// `days` can be negative for spans that start late in a long month and end
/// early in a month following a short one (e.g. Jan 31 to Mar 1 is one month
/// and -2 days). The estimator prices the span as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementSpan {
    /// Whole months.
    pub months: i64,
    /// Days beyond the whole months.
    pub days: i64,
}

impl EngagementSpan {
    /// Empty span.
    pub const ZERO: Self = Self { months: 0, days: 0 };

    /// Computes the span from `start` to `end`.
    ///
    /// When the end day-of-month precedes the start day-of-month, one month is
    /// borrowed and replaced by the length of the month before `end`'s month.
    /// An `end` earlier than `start` yields [`EngagementSpan::ZERO`].
    #[must_use]
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            return Self::ZERO;
        }

        let mut months = i64::from(end.year() - start.year()) * 12
            + (i64::from(end.month()) - i64::from(start.month()));
        let start_day = i64::from(start.day());
        let end_day = i64::from(end.day());

        let days = if end_day >= start_day {
            end_day - start_day
        } else {
            months -= 1;
            i64::from(days_in_previous_month(end)) - start_day + end_day
        };

        Self { months, days }
    }

    /// Span for optional dates; missing either side means no span.
    #[must_use]
    pub fn between_opt(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => Self::between(start, end),
            _ => Self::ZERO,
        }
    }
}

/// Number of days in the month before `date`'s month.
#[must_use]
pub fn days_in_previous_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map_or(30, |last| last.day())
}

//! Trailing trend buckets
//!
//! Partitions expenses into a fixed number of contiguous calendar weeks or
//! months, the last of which contains the reference instant.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::money::decimal;
use crate::models::{Expense, Granularity, Money, ReportMonth, WeekStart};

/// Largest trailing window a trend series may span (100 years of months)
pub const MAX_BUCKETS: usize = 1200;

/// One calendar-aligned window of the trend series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// Display label for the bucket start ("Mar 02" or "Jan 2025")
    pub period_label: String,
    /// First day of the bucket (inclusive)
    pub range_start: NaiveDate,
    /// Last day of the bucket (inclusive)
    pub range_end: NaiveDate,
    /// Sum of contained expense amounts
    #[serde(serialize_with = "decimal::serialize")]
    pub total: Money,
    /// Number of contained expenses
    pub count: usize,
}

impl Bucket {
    fn empty(period_label: String, range_start: NaiveDate, range_end: NaiveDate) -> Self {
        Self {
            period_label,
            range_start,
            range_end,
            total: Money::zero(),
            count: 0,
        }
    }

    /// Check if a calendar date falls within this bucket
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.range_start && date <= self.range_end
    }
}

/// Build `count` trailing buckets ending with the one containing `now`
///
/// Buckets come oldest first. An expense lands in the bucket whose inclusive
/// range holds its calendar date; expenses outside the window are skipped.
///
/// Fails when `count` exceeds [`MAX_BUCKETS`] or the window would reach
/// outside the representable calendar.
pub fn trailing_buckets(
    expenses: &[Expense],
    now: DateTime<Utc>,
    granularity: Granularity,
    count: usize,
    week_start: WeekStart,
) -> ExpenseResult<Vec<Bucket>> {
    if count > MAX_BUCKETS {
        return Err(ExpenseError::Validation(format!(
            "Bucket count {} exceeds the maximum of {}",
            count, MAX_BUCKETS
        )));
    }

    let mut buckets = empty_buckets(now.date_naive(), granularity, count, week_start)
        .ok_or_else(|| {
            ExpenseError::Validation(format!(
                "A trailing window of {} {}s from {} reaches past the supported calendar range",
                count,
                granularity,
                now.date_naive()
            ))
        })?;

    let (Some(window_start), Some(window_end)) = (
        buckets.first().map(|b| b.range_start),
        buckets.last().map(|b| b.range_end),
    ) else {
        return Ok(buckets);
    };

    let mut outside = 0usize;
    for expense in expenses {
        let date = expense.calendar_date();
        if date < window_start || date > window_end {
            outside += 1;
            continue;
        }
        // Ranges are sorted and contiguous
        let index = buckets.partition_point(|b| b.range_end < date);
        if let Some(bucket) = buckets.get_mut(index) {
            bucket.total += expense.amount;
            bucket.count += 1;
        }
    }

    tracing::debug!(
        %granularity,
        buckets = count,
        expenses = expenses.len(),
        outside_window = outside,
        "aggregated trailing buckets"
    );

    Ok(buckets)
}

/// Empty buckets oldest first, or `None` if any falls outside the calendar
fn empty_buckets(
    today: NaiveDate,
    granularity: Granularity,
    count: usize,
    week_start: WeekStart,
) -> Option<Vec<Bucket>> {
    match granularity {
        Granularity::Week => {
            let current = week_start.week_start(today)?;
            (0..count as u64)
                .rev()
                .map(|weeks_back| {
                    let start = current.checked_sub_days(Days::new(weeks_back * 7))?;
                    let end = start.checked_add_days(Days::new(6))?;
                    Some(Bucket::empty(start.format("%b %d").to_string(), start, end))
                })
                .collect()
        }
        Granularity::Month => {
            let current = ReportMonth::containing(today);
            (0..u32::try_from(count).ok()?)
                .rev()
                .map(|months_back| {
                    let month = current.months_back(months_back)?;
                    Some(Bucket::empty(
                        month.short_label(),
                        month.first_day(),
                        month.last_day(),
                    ))
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime, TimeZone};
    use crate::reports::test_support::{at, date, expense};

    #[test]
    fn test_zero_count_is_empty() {
        let expenses = vec![expense("Tea", 1000, "Food & Dining", date(2025, 3, 5))];
        let buckets = trailing_buckets(
            &expenses,
            at(2025, 3, 5, 12),
            Granularity::Month,
            0,
            WeekStart::Sunday,
        )
        .unwrap();
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_empty_collection_gives_zero_buckets() {
        let buckets = trailing_buckets(
            &[],
            at(2025, 3, 5, 12),
            Granularity::Week,
            4,
            WeekStart::Sunday,
        )
        .unwrap();
        assert_eq!(buckets.len(), 4);
        assert!(buckets.iter().all(|b| b.total.is_zero() && b.count == 0));
    }

    #[test]
    fn test_monthly_current_month_only() {
        let expenses = vec![
            expense("Rent", 1_500_000, "Bills & Utilities", date(2025, 3, 1)),
            expense("Fuel", 250_000, "Transportation", date(2025, 3, 10)),
            expense("Movie", 60_000, "Entertainment", date(2025, 3, 31)),
        ];
        let buckets = trailing_buckets(
            &expenses,
            at(2025, 3, 15, 9),
            Granularity::Month,
            6,
            WeekStart::Sunday,
        )
        .unwrap();

        assert_eq!(buckets.len(), 6);
        for bucket in &buckets[..5] {
            assert_eq!(bucket.total, Money::zero());
            assert_eq!(bucket.count, 0);
        }
        assert_eq!(buckets[5].total.cents(), 1_810_000);
        assert_eq!(buckets[5].count, 3);
        assert_eq!(buckets[5].period_label, "Mar 2025");
        assert_eq!(buckets[0].period_label, "Oct 2024");
    }

    #[test]
    fn test_monthly_buckets_roll_over_year() {
        let buckets = trailing_buckets(
            &[],
            at(2025, 2, 10, 0),
            Granularity::Month,
            3,
            WeekStart::Sunday,
        )
        .unwrap();
        let ranges: Vec<_> = buckets.iter().map(|b| (b.range_start, b.range_end)).collect();
        assert_eq!(
            ranges,
            vec![
                (date(2024, 12, 1), date(2024, 12, 31)),
                (date(2025, 1, 1), date(2025, 1, 31)),
                (date(2025, 2, 1), date(2025, 2, 28)),
            ]
        );
    }

    #[test]
    fn test_weekly_buckets_sunday_start() {
        // Wednesday 2025-03-05
        let buckets = trailing_buckets(
            &[],
            at(2025, 3, 5, 18),
            Granularity::Week,
            4,
            WeekStart::Sunday,
        )
        .unwrap();
        assert_eq!(buckets[3].range_start, date(2025, 3, 2));
        assert_eq!(buckets[3].range_end, date(2025, 3, 8));
        assert_eq!(buckets[0].range_start, date(2025, 2, 9));
        assert_eq!(buckets[0].period_label, "Feb 09");
        for pair in buckets.windows(2) {
            assert_eq!(pair[1].range_start - pair[0].range_start, Duration::days(7));
            assert_eq!(pair[0].range_end + Duration::days(1), pair[1].range_start);
        }
    }

    #[test]
    fn test_weekly_buckets_monday_start() {
        let buckets = trailing_buckets(
            &[],
            at(2025, 3, 9, 18),
            Granularity::Week,
            2,
            WeekStart::Monday,
        )
        .unwrap();
        assert_eq!(buckets[1].range_start, date(2025, 3, 3));
        assert_eq!(buckets[1].range_end, date(2025, 3, 9));
        assert_eq!(buckets[0].range_start, date(2025, 2, 24));
    }

    #[test]
    fn test_week_boundaries_are_inclusive() {
        let expenses = vec![
            expense("Saturday", 100, "Others", date(2025, 3, 1)),
            expense("Sunday", 200, "Others", date(2025, 3, 2)),
            expense("Next Saturday", 400, "Others", date(2025, 3, 8)),
            expense("Too old", 800, "Others", date(2025, 2, 15)),
            expense("Future week", 1600, "Others", date(2025, 3, 9)),
        ];
        let buckets = trailing_buckets(
            &expenses,
            at(2025, 3, 5, 0),
            Granularity::Week,
            2,
            WeekStart::Sunday,
        )
        .unwrap();

        assert_eq!(buckets[0].total.cents(), 100);
        assert_eq!(buckets[1].total.cents(), 600);
        assert_eq!(buckets[1].count, 2);
    }

    #[test]
    fn test_window_total_bounded_by_collection_total() {
        let expenses = vec![
            expense("A", 1000, "Others", date(2024, 1, 1)),
            expense("B", 2000, "Others", date(2025, 3, 3)),
            expense("C", 3000, "Others", date(2025, 1, 20)),
        ];
        let all: Money = expenses.iter().map(|e| e.amount).sum();

        let buckets = trailing_buckets(
            &expenses,
            at(2025, 3, 5, 0),
            Granularity::Month,
            6,
            WeekStart::Sunday,
        )
        .unwrap();
        let windowed: Money = buckets.iter().map(|b| b.total).sum();
        assert!(windowed <= all);
        assert_eq!(windowed.cents(), 5000);

        let wide = trailing_buckets(
            &expenses,
            at(2025, 3, 5, 0),
            Granularity::Month,
            24,
            WeekStart::Sunday,
        )
        .unwrap();
        let wide_total: Money = wide.iter().map(|b| b.total).sum();
        assert_eq!(wide_total, all);
    }

    #[test]
    fn test_idempotent() {
        let expenses = vec![expense("A", 1000, "Others", date(2025, 3, 3))];
        let now = at(2025, 3, 5, 0);
        let build = || trailing_buckets(&expenses, now, Granularity::Week, 4, WeekStart::Monday);
        assert_eq!(build().unwrap(), build().unwrap());
    }

    #[test]
    fn test_oversized_window_is_an_error() {
        let now = at(2025, 3, 5, 0);
        for granularity in [Granularity::Week, Granularity::Month] {
            let err = trailing_buckets(&[], now, granularity, 3_200_000, WeekStart::Sunday)
                .unwrap_err();
            assert!(err.is_validation());
        }
        assert!(trailing_buckets(&[], now, Granularity::Month, MAX_BUCKETS, WeekStart::Sunday)
            .is_ok());
    }

    #[test]
    fn test_window_past_calendar_start_is_an_error() {
        let earliest = Utc.from_utc_datetime(&NaiveDate::MIN.and_time(NaiveTime::MIN));
        let week = trailing_buckets(&[], earliest, Granularity::Week, 2, WeekStart::Sunday);
        let month = trailing_buckets(&[], earliest, Granularity::Month, 2, WeekStart::Sunday);
        assert!(week.is_err());
        assert!(month.is_err());
    }

    #[test]
    fn test_bucket_total_serializes_as_decimal() {
        let expenses = vec![expense("Tea", 1250, "Food & Dining", date(2025, 3, 5))];
        let buckets =
            trailing_buckets(&expenses, at(2025, 3, 5, 0), Granularity::Month, 1, WeekStart::Sunday)
                .unwrap();
        let json = serde_json::to_value(&buckets).unwrap();
        assert_eq!(json[0]["total"], 12.5);
        assert_eq!(json[0]["count"], 1);
    }
}

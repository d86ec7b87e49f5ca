//! Calendar periods used by the reports
//!
//! `ReportMonth` is the target of a monthly statement, `Granularity` and
//! `WeekStart` describe how trailing trend buckets are cut.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bucket size for trailing trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Week,
    Month,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
        }
    }
}

/// First day of a calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Sunday through Saturday
    #[default]
    Sunday,
    /// Monday through Sunday (ISO)
    Monday,
}

impl WeekStart {
    fn weekday(&self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// The first day of the week containing `date`
    ///
    /// `None` only when that day precedes the earliest representable date.
    pub fn week_start(&self, date: NaiveDate) -> Option<NaiveDate> {
        let offset = match self {
            Self::Sunday => date.weekday().num_days_from_sunday(),
            Self::Monday => date.weekday().num_days_from_monday(),
        };
        date.checked_sub_days(Days::new(u64::from(offset)))
    }

    /// Map the settings convention (0 = Sunday, 1 = Monday)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            _ => None,
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weekday())
    }
}

/// A calendar month targeted by a monthly statement (e.g. "2025-03")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReportMonth {
    first: NaiveDate,
}

impl ReportMonth {
    /// Create a month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| PeriodParseError::InvalidFormat(format!("{:04}-{:02}", year, month)))?;
        Ok(Self { first })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        // Stays inside the same month, so it cannot leave the calendar range
        Self {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// First calendar day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last calendar day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        // Every month has at least 28 days
        [31, 30, 29]
            .into_iter()
            .find_map(|day| self.first.with_day(day))
            .unwrap_or_else(|| self.first + Days::new(27))
    }

    /// Number of calendar days in the month (28-31)
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The following month, if representable
    pub fn next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
    }

    /// The preceding month, if representable
    pub fn prev(&self) -> Option<Self> {
        self.months_back(1)
    }

    /// The month `months` before this one, if representable
    pub fn months_back(&self, months: u32) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(months))
            .map(|first| Self { first })
    }

    /// Full label, e.g. "March 2025"
    pub fn long_label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Abbreviated label, e.g. "Mar 2025"
    pub fn short_label(&self) -> String {
        self.first_day().format("%b %Y").to_string()
    }

    /// Parse a month string in `YYYY-MM` form
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        if year.len() != 4
            || month.len() != 2
            || !year.chars().all(|c| c.is_ascii_digit())
            || !month.chars().all(|c| c.is_ascii_digit())
        {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl TryFrom<String> for ReportMonth {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ReportMonth> for String {
    fn from(month: ReportMonth) -> Self {
        month.to_string()
    }
}

impl std::str::FromStr for ReportMonth {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: {} (expected YYYY-MM)", s)
            }
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let feb = ReportMonth::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), date(2024, 2, 1));
        assert_eq!(feb.last_day(), date(2024, 2, 29));
        assert_eq!(feb.days_in_month(), 29);

        assert_eq!(ReportMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(ReportMonth::new(2025, 12).unwrap().last_day(), date(2025, 12, 31));
    }

    #[test]
    fn test_month_navigation() {
        let dec = ReportMonth::new(2024, 12).unwrap();
        assert_eq!(dec.next(), Some(ReportMonth::new(2025, 1).unwrap()));
        assert_eq!(dec.next().and_then(|m| m.prev()), Some(dec));
        assert_eq!(ReportMonth::new(2025, 1).unwrap().prev(), Some(dec));
        assert_eq!(dec.months_back(12), Some(ReportMonth::new(2023, 12).unwrap()));
    }

    #[test]
    fn test_month_navigation_at_calendar_limits() {
        let earliest = ReportMonth::containing(NaiveDate::MIN);
        assert_eq!(earliest.prev(), None);
        assert_eq!(earliest.months_back(u32::MAX), None);

        let latest = ReportMonth::containing(NaiveDate::MAX);
        assert_eq!(latest.next(), None);
        assert_eq!(latest.last_day(), NaiveDate::MAX);
        assert!(ReportMonth::new(2025, 3).unwrap().months_back(4_000_000).is_none());
    }

    #[test]
    fn test_containing() {
        let month = ReportMonth::containing(date(2024, 2, 29));
        assert_eq!(month, ReportMonth::new(2024, 2).unwrap());
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 2);
    }

    #[test]
    fn test_contains() {
        let march = ReportMonth::new(2025, 3).unwrap();
        assert!(march.contains(date(2025, 3, 1)));
        assert!(march.contains(date(2025, 3, 31)));
        assert!(!march.contains(date(2025, 2, 28)));
        assert!(!march.contains(date(2024, 3, 15)));
    }

    #[test]
    fn test_labels() {
        let march = ReportMonth::new(2025, 3).unwrap();
        assert_eq!(march.long_label(), "March 2025");
        assert_eq!(march.short_label(), "Mar 2025");
        assert_eq!(march.to_string(), "2025-03");
    }

    #[test]
    fn test_parse() {
        assert_eq!(ReportMonth::parse("2025-03").unwrap(), ReportMonth::new(2025, 3).unwrap());
        assert_eq!(ReportMonth::parse("2025-13"), Err(PeriodParseError::InvalidMonth(13)));
        assert!(ReportMonth::parse("2025-3").is_err());
        assert!(ReportMonth::parse("March 2025").is_err());
        assert!(ReportMonth::parse("2025-03-01").is_err());
        assert!(ReportMonth::parse("").is_err());
    }

    #[test]
    fn test_week_start_conventions() {
        // Wednesday
        let wed = date(2025, 3, 5);
        assert_eq!(WeekStart::Sunday.week_start(wed), Some(date(2025, 3, 2)));
        assert_eq!(WeekStart::Monday.week_start(wed), Some(date(2025, 3, 3)));

        let sunday = date(2025, 3, 9);
        assert_eq!(WeekStart::Sunday.week_start(sunday), Some(sunday));
        assert_eq!(WeekStart::Monday.week_start(sunday), Some(date(2025, 3, 3)));
    }

    #[test]
    fn test_week_start_from_index() {
        assert_eq!(WeekStart::from_index(0), Some(WeekStart::Sunday));
        assert_eq!(WeekStart::from_index(1), Some(WeekStart::Monday));
        assert_eq!(WeekStart::from_index(3), None);
    }

    #[test]
    fn test_serialization() {
        let month = ReportMonth::new(2025, 1).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2025-01\"");
        let deserialized: ReportMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(month, deserialized);
        assert_eq!(serde_json::to_string(&Granularity::Week).unwrap(), "\"week\"");
    }
}

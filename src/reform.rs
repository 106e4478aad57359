use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    GREGORIAN_REFORM_FIRST_SKIPPED, GREGORIAN_REFORM_LAST_SKIPPED, GREGORIAN_REFORM_MONTH,
    GREGORIAN_REFORM_YEAR, InvalidArgument, MAX_DAY, MIN_DAY, Month, MonthYear, SPAN_SEPARATOR,
    Year, types::days_in_month,
};

/// Inclusive span of day numbers dropped from a month (`first..=last`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkippedDays {
    first: u8,
    last:  u8,
}

/// Error type for reform table configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReformError {
    /// Span is empty, reversed or outside `MIN_DAY..=MAX_DAY`.
    #[error("Invalid skipped-day span: {first}-{last}")]
    InvalidSpan { first: u8, last: u8 },

    /// Span runs past the end of the month it applies to.
    #[error("Skipped days {days} run past the end of {month_year} ({length} days)")]
    BeyondMonthEnd {
        month_year: MonthYear,
        days:       SkippedDays,
        length:     u8,
    },

    /// Two gaps for the same month.
    #[error("Duplicate reform gap for {0}")]
    Duplicate(MonthYear),

    /// Error in a year or month component.
    #[error(transparent)]
    Argument(#[from] InvalidArgument),

    /// Invalid span format.
    #[error("Invalid span format: {0}")]
    InvalidFormat(String),
}

impl SkippedDays {
    /// Creates a span with validation.
    ///
    /// # Errors
    /// Returns `ReformError::InvalidSpan` if `first > last` or either end
    /// is outside `MIN_DAY..=MAX_DAY`.
    pub fn new(first: u8, last: u8) -> Result<Self, ReformError> {
        if first < MIN_DAY || last > MAX_DAY || first > last {
            return Err(ReformError::InvalidSpan { first, last });
        }
        Ok(Self { first, last })
    }

    pub const fn first(&self) -> u8 {
        self.first
    }

    pub const fn last(&self) -> u8 {
        self.last
    }

    /// Number of days dropped
    pub const fn count(&self) -> u8 {
        self.last - self.first + 1
    }

    pub fn contains(&self, day: u8) -> bool {
        (self.first..=self.last).contains(&day)
    }
}

impl fmt::Display for SkippedDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SPAN_SEPARATOR}{}", self.first, self.last)
    }
}

impl FromStr for SkippedDays {
    type Err = ReformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (first, last) = trimmed.split_once(SPAN_SEPARATOR).ok_or_else(|| {
            ReformError::InvalidFormat(format!(
                "No span separator found (expected '{SPAN_SEPARATOR}'): {s}"
            ))
        })?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| ReformError::InvalidFormat(s.to_owned()))
        };
        Self::new(parse(first)?, parse(last)?)
    }
}

impl Serialize for SkippedDays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SkippedDays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

const GREGORIAN_1752: ReformGap = ReformGap {
    year:  Year::from_const(GREGORIAN_REFORM_YEAR),
    month: Month::from_const(GREGORIAN_REFORM_MONTH),
    days:  SkippedDays {
        first: GREGORIAN_REFORM_FIRST_SKIPPED,
        last:  GREGORIAN_REFORM_LAST_SKIPPED,
    },
};

/// One historical discontinuity: the days dropped from a given month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReformGap {
    pub year:  Year,
    pub month: Month,
    pub days:  SkippedDays,
}

impl ReformGap {
    /// The British switch of 1752: September 3 through 13 never happened.
    pub const fn gregorian_1752() -> Self {
        GREGORIAN_1752
    }

    /// Validates the gap against the length of its month.
    ///
    /// # Errors
    /// Returns `ReformError::BeyondMonthEnd` if the span ends after the
    /// month's last day.
    pub fn month_year(&self) -> Result<MonthYear, ReformError> {
        let month_year = MonthYear::new(self.year, self.month)?;
        let length = days_in_month(self.year.get(), self.month.get());
        if self.days.last() > length {
            return Err(ReformError::BeyondMonthEnd {
                month_year,
                days: self.days,
                length,
            });
        }
        Ok(month_year)
    }
}

/// Strategy table of historical calendar discontinuities, keyed by month.
///
/// Rendering consults the table for the month being drawn; an absent entry
/// means the plain proleptic Gregorian layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ReformGap>", into = "Vec<ReformGap>")]
pub struct ReformTable {
    gaps: Vec<ReformGap>,
}

impl ReformTable {
    /// Table with no gaps: every month is laid out proleptically.
    pub const fn proleptic() -> Self {
        Self { gaps: Vec::new() }
    }

    /// Adds a gap, rejecting spans past the month end and duplicate months.
    ///
    /// # Errors
    /// Returns `ReformError::BeyondMonthEnd` or `ReformError::Duplicate`.
    pub fn with_gap(mut self, gap: ReformGap) -> Result<Self, ReformError> {
        let month_year = gap.month_year()?;
        if self
            .gaps
            .iter()
            .any(|g| g.year == gap.year && g.month == gap.month)
        {
            return Err(ReformError::Duplicate(month_year));
        }
        self.gaps.push(gap);
        Ok(self)
    }

    /// Days dropped from `month_year`, if any.
    pub fn skipped_days(&self, month_year: MonthYear) -> Option<SkippedDays> {
        self.gaps
            .iter()
            .find(|g| g.year == month_year.year() && g.month == month_year.month())
            .map(|g| g.days)
    }

    pub fn gaps(&self) -> &[ReformGap] {
        &self.gaps
    }

    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }
}

impl Default for ReformTable {
    /// Holds the September 1752 gap only.
    fn default() -> Self {
        Self {
            gaps: vec![ReformGap::gregorian_1752()],
        }
    }
}

impl TryFrom<Vec<ReformGap>> for ReformTable {
    type Error = ReformError;

    fn try_from(gaps: Vec<ReformGap>) -> Result<Self, Self::Error> {
        gaps.into_iter().try_fold(Self::proleptic(), Self::with_gap)
    }
}

impl From<ReformTable> for Vec<ReformGap> {
    fn from(table: ReformTable) -> Self {
        table.gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month_year(year: u16, month: u8) -> MonthYear {
        MonthYear::new(Year::new(year).unwrap(), Month::new(month).unwrap()).unwrap()
    }

    #[test]
    fn test_new_span_cases() {
        struct TestCase {
            first:          u8,
            last:           u8,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                first:          3,
                last:           13,
                should_succeed: true,
                description:    "valid span (first < last)",
            },
            TestCase {
                first:          5,
                last:           5,
                should_succeed: true,
                description:    "single day (first == last)",
            },
            TestCase {
                first:          13,
                last:           3,
                should_succeed: false,
                description:    "reversed span (first > last)",
            },
            TestCase {
                first:          0,
                last:           3,
                should_succeed: false,
                description:    "day zero",
            },
            TestCase {
                first:          30,
                last:           32,
                should_succeed: false,
                description:    "past any month end",
            },
        ];

        for case in &cases {
            let span = SkippedDays::new(case.first, case.last);
            if case.should_succeed {
                assert!(span.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(
                    matches!(span, Err(ReformError::InvalidSpan { .. })),
                    "Expected failure for: {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_span_contains_and_count() {
        let span = SkippedDays::new(3, 13).unwrap();
        assert_eq!(span.count(), 11);
        assert!(!span.contains(2));
        assert!(span.contains(3));
        assert!(span.contains(13));
        assert!(!span.contains(14));
    }

    #[test]
    fn test_span_from_str() {
        let span: SkippedDays = "3-13".parse().unwrap();
        assert_eq!((span.first(), span.last()), (3, 13));

        let span: SkippedDays = " 3 - 13 ".parse().unwrap();
        assert_eq!(span.to_string(), "3-13");

        assert!(matches!(
            "313".parse::<SkippedDays>(),
            Err(ReformError::InvalidFormat(_))
        ));
        assert!(matches!(
            "a-13".parse::<SkippedDays>(),
            Err(ReformError::InvalidFormat(_))
        ));
        assert!(matches!(
            "13-3".parse::<SkippedDays>(),
            Err(ReformError::InvalidSpan { .. })
        ));
    }

    #[test]
    fn test_gregorian_1752_gap() {
        let gap = ReformGap::gregorian_1752();
        assert_eq!(gap.year.get(), 1752);
        assert_eq!(gap.month.get(), 9);
        assert_eq!(gap.days, SkippedDays::new(3, 13).unwrap());
        assert_eq!(gap.month_year().unwrap(), month_year(1752, 9));
    }

    #[test]
    fn test_default_table_lookup() {
        let table = ReformTable::default();
        assert_eq!(
            table.skipped_days(month_year(1752, 9)),
            Some(SkippedDays::new(3, 13).unwrap())
        );
        assert_eq!(table.skipped_days(month_year(1752, 8)), None);
        assert_eq!(table.skipped_days(month_year(1752, 10)), None);
        assert_eq!(table.skipped_days(month_year(1753, 9)), None);
    }

    #[test]
    fn test_proleptic_table_is_empty() {
        let table = ReformTable::proleptic();
        assert!(table.is_empty());
        assert_eq!(table.skipped_days(month_year(1752, 9)), None);
    }

    #[test]
    fn test_with_gap_rejects_duplicates() {
        let result = ReformTable::default().with_gap(ReformGap::gregorian_1752());
        assert!(matches!(result, Err(ReformError::Duplicate(_))));
    }

    #[test]
    fn test_with_gap_rejects_span_past_month_end() {
        let gap = ReformGap {
            year:  Year::new(1700).unwrap(),
            month: Month::new(2).unwrap(),
            days:  SkippedDays::new(19, 29).unwrap(),
        };
        let result = ReformTable::proleptic().with_gap(gap);
        assert!(matches!(
            result,
            Err(ReformError::BeyondMonthEnd { length: 28, .. })
        ));
    }

    #[test]
    fn test_with_gap_adds_second_discontinuity() {
        // Papal switch: October 5 through 14, 1582
        let gap = ReformGap {
            year:  Year::new(1582).unwrap(),
            month: Month::new(10).unwrap(),
            days:  SkippedDays::new(5, 14).unwrap(),
        };
        let table = ReformTable::default().with_gap(gap).unwrap();
        assert_eq!(table.gaps().len(), 2);
        assert_eq!(table.skipped_days(month_year(1582, 10)), Some(gap.days));
    }

    #[test]
    fn test_table_serde() {
        let table = ReformTable::default();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[{"year":1752,"month":9,"days":"3-13"}]"#);

        let parsed: ReformTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, parsed);
    }

    #[test]
    fn test_table_serde_validates() {
        let duplicate = r#"[{"year":1752,"month":9,"days":"3-13"},{"year":1752,"month":9,"days":"1-2"}]"#;
        assert!(serde_json::from_str::<ReformTable>(duplicate).is_err());

        let past_end = r#"[{"year":2023,"month":4,"days":"30-31"}]"#;
        assert!(serde_json::from_str::<ReformTable>(past_end).is_err());

        let bad_month = r#"[{"year":2023,"month":13,"days":"1-2"}]"#;
        assert!(serde_json::from_str::<ReformTable>(bad_month).is_err());
    }
}

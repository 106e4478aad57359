use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MONTH_NAMES,
};
use crate::{Field, InvalidArgument};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns an out-of-range `InvalidArgument` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, InvalidArgument> {
        let non_zero = NonZeroU16::new(value)
            .ok_or_else(|| InvalidArgument::out_of_range(Field::Year, i32::from(value)))?;
        if value > MAX_YEAR {
            return Err(InvalidArgument::out_of_range(Field::Year, i32::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Compile-time constructor for constant tables; panics during const
    /// evaluation if the value is out of range.
    pub(crate) const fn from_const(value: u16) -> Self {
        match NonZeroU16::new(value) {
            Some(non_zero) if value <= MAX_YEAR => Self(non_zero),
            _ => panic!("year out of range"),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = InvalidArgument;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

/// Parses a year token literally: `"02023"` is 2023 and `"25"` stays 25.
impl FromStr for Year {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_token(Field::Year, s)?;
        let value =
            u16::try_from(value).map_err(|_| InvalidArgument::out_of_range(Field::Year, value))?;
        Self::new(value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns an out-of-range `InvalidArgument` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, InvalidArgument> {
        let non_zero = NonZeroU8::new(value)
            .ok_or_else(|| InvalidArgument::out_of_range(Field::Month, i32::from(value)))?;
        if value > MAX_MONTH {
            return Err(InvalidArgument::out_of_range(Field::Month, i32::from(value)));
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_MONTH => Self(non_zero),
            _ => panic!("month out of range"),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full month name used in grid headers
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl FromStr for Month {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_token(Field::Month, s)?;
        let value =
            u8::try_from(value).map_err(|_| InvalidArgument::out_of_range(Field::Month, value))?;
        Self::new(value)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated month of a specific year, anchored to its first day in the
/// proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthYear {
    year:      Year,
    month:     Month,
    first_day: NaiveDate,
}

impl MonthYear {
    /// Creates a month-year pair (components are already validated)
    ///
    /// # Errors
    /// Returns an out-of-range `InvalidArgument` for the year if the date
    /// library cannot represent the first day of the month.
    pub fn new(year: Year, month: Month) -> Result<Self, InvalidArgument> {
        let first_day = NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(MIN_DAY),
        )
        .ok_or_else(|| InvalidArgument::out_of_range(Field::Year, i32::from(year.get())))?;
        Ok(Self {
            year,
            month,
            first_day,
        })
    }

    /// Month-year containing `date`.
    ///
    /// # Errors
    /// Returns an out-of-range `InvalidArgument` if `date` falls outside years `1..=MAX_YEAR`.
    pub fn from_date(date: NaiveDate) -> Result<Self, InvalidArgument> {
        let year = u16::try_from(date.year())
            .map_err(|_| InvalidArgument::out_of_range(Field::Year, date.year()))?;
        let month = Month::new(u8::try_from(date.month()).unwrap_or(u8::MAX))?;
        Self::new(Year::new(year)?, month)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Weekday of the 1st of the month
    pub fn first_weekday(&self) -> Weekday {
        self.first_day.weekday()
    }

    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }
}

/// Header line of a month grid, e.g. `Janeiro 2025`.
impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

/// Strict integer parse of a user-supplied token.
/// No whitespace trimming, grouping or decimal separators.
pub(crate) fn parse_token(field: Field, token: &str) -> Result<i32, InvalidArgument> {
    token
        .parse::<i32>()
        .map_err(|_| InvalidArgument::not_a_number(field, token))
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

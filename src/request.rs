use log::debug;

use crate::{InvalidArgument, Month, MonthYear, Year};

/// What the caller asked to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarRequest {
    /// The month containing the current date
    Today,
    /// All twelve months of a year
    Year(Year),
    /// A single month
    Month(MonthYear),
}

impl CalendarRequest {
    /// Resolves raw argument tokens.
    ///
    /// No tokens asks for the current month, one token is a year, and two
    /// or more are month then year; anything after the second is ignored.
    /// The month is validated before the year.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for the first token that is not a number
    /// or is out of range.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, InvalidArgument> {
        let request = match args {
            [] => Ok(Self::Today),
            [year] => year.as_ref().parse().map(Self::Year),
            [month, year, ..] => month.as_ref().parse::<Month>().and_then(|month| {
                let year = year.as_ref().parse::<Year>()?;
                MonthYear::new(year, month).map(Self::Month)
            }),
        };
        request.inspect_err(|err| debug!("Rejected calendar arguments: {err}"))
    }
}

impl From<Year> for CalendarRequest {
    fn from(year: Year) -> Self {
        Self::Year(year)
    }
}

impl From<MonthYear> for CalendarRequest {
    fn from(month_year: MonthYear) -> Self {
        Self::Month(month_year)
    }
}

//! Text calendars: single-month and full-year grids, Sunday first, with
//! historical reform gaps such as the eleven days dropped in September 1752.
//!
//! ```
//! let text = textcal::render_calendar(&["1", "2025"]).unwrap();
//! assert!(text.starts_with("Janeiro 2025\nDo Se Te Qa Qi Se Sa\n"));
//! ```

mod consts;
mod prelude;
mod reform;
mod render;
mod request;
mod types;

pub use consts::*;
pub use reform::{ReformError, ReformGap, ReformTable, SkippedDays};
pub use render::{Calendar, CalendarGrid, Cell, YearCalendar};
pub use request::CalendarRequest;
pub use types::{Month, MonthYear, Year, days_in_month, is_leap_year};

use crate::prelude::*;

/// Which argument failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "Mês")]
    Month,
    #[display(fmt = "Ano")]
    Year,
}

impl Field {
    /// Inclusive `(min, max)` accepted for this field
    pub const fn bounds(self) -> (u16, u16) {
        match self {
            Self::Month => (JANUARY as u16, MAX_MONTH as u16),
            Self::Year => (MIN_YEAR, MAX_YEAR),
        }
    }
}

/// Why an argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum Problem {
    #[display(fmt = "deve estar entre {min} e {max}")]
    OutOfRange { value: i32, min: u16, max: u16 },
    #[display(fmt = "deve ser um número válido")]
    NotANumber(String),
}

/// The only error raised while resolving or rendering a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{field} {problem}")]
pub struct InvalidArgument {
    pub field:   Field,
    pub problem: Problem,
}

impl InvalidArgument {
    pub const fn out_of_range(field: Field, value: i32) -> Self {
        let (min, max) = field.bounds();
        Self {
            field,
            problem: Problem::OutOfRange { value, min, max },
        }
    }

    pub fn not_a_number(field: Field, token: &str) -> Self {
        Self {
            field,
            problem: Problem::NotANumber(token.to_owned()),
        }
    }
}

/// Renders the calendar selected by `args` with the default reform table.
///
/// * no tokens: the current month
/// * one token: the whole year
/// * two or more: month and year, further tokens ignored
///
/// # Errors
/// Returns `InvalidArgument` if the month or year token is not a number or
/// is out of range; the month is checked first.
pub fn render_calendar<S: AsRef<str>>(args: &[S]) -> Result<String, InvalidArgument> {
    Calendar::default().render_args(args)
}

use std::fmt;

use chrono::{Local, NaiveDate};
use log::{debug, trace};

use crate::{
    CELL_SEPARATOR, CalendarRequest, DAYS_IN_WEEK, InvalidArgument, JANUARY, MAX_MONTH, MIN_DAY,
    Month, MonthYear, ReformTable, SkippedDays, WEEKDAY_HEADER, YEAR_TITLE, Year, prelude::*,
};

/// One slot of a week row, two characters wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Cell {
    /// Padding before the first day shown in a row
    #[display(fmt = "  ")]
    Blank,
    /// Day number, right-aligned
    #[display(fmt = "{_0:>2}")]
    Day(u8),
}

impl Cell {
    pub const fn day(self) -> Option<u8> {
        match self {
            Self::Day(day) => Some(day),
            Self::Blank => None,
        }
    }
}

/// Text grid for a single month: header, weekday line and week rows.
///
/// Rows hold leading blanks only; a partial last week simply ends after its
/// final day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    month_year: MonthYear,
    weeks:      Vec<Vec<Cell>>,
}

impl CalendarGrid {
    /// Lays out `month_year` on a Sunday-first grid.
    ///
    /// Days in `skipped` get no cell, but the weekday counter still moves
    /// past them, so the day after a gap keeps its true weekday column.
    pub fn new(month_year: MonthYear, skipped: Option<SkippedDays>) -> Self {
        let days_in_week = usize::from(DAYS_IN_WEEK);
        let offset = month_year.first_weekday().num_days_from_sunday() as usize;

        let mut weeks = Vec::new();
        let mut row: Vec<Cell> = Vec::with_capacity(days_in_week);
        for day in MIN_DAY..=month_year.days_in_month() {
            let column = (offset + usize::from(day - MIN_DAY)) % days_in_week;

            if !skipped.is_some_and(|days| days.contains(day)) {
                if row.is_empty() {
                    row.resize(column, Cell::Blank);
                }
                row.push(Cell::Day(day));
            }

            // Saturday closes the row; a row made only of skipped days is dropped.
            if column == days_in_week - 1 && !row.is_empty() {
                weeks.push(std::mem::replace(&mut row, Vec::with_capacity(days_in_week)));
            }
        }
        if !row.is_empty() {
            weeks.push(row);
        }

        Self { month_year, weeks }
    }

    pub const fn month_year(&self) -> MonthYear {
        self.month_year
    }

    pub fn weeks(&self) -> &[Vec<Cell>] {
        &self.weeks
    }

    /// Day numbers shown, in order
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.weeks.iter().flatten().filter_map(|cell| cell.day())
    }

    /// `(row, column)` of `day`, or `None` if the day is not shown.
    pub fn position(&self, day: u8) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|cell| *cell == Cell::Day(day))
                .map(|column| (row, column))
        })
    }
}

impl fmt::Display for CalendarGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.month_year)?;
        writeln!(f, "{WEEKDAY_HEADER}")?;
        for week in &self.weeks {
            for (column, cell) in week.iter().enumerate() {
                if column > 0 {
                    f.write_str(CELL_SEPARATOR)?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// All twelve month grids of a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCalendar {
    year:   Year,
    months: Vec<CalendarGrid>,
}

impl YearCalendar {
    pub const fn year(&self) -> Year {
        self.year
    }

    pub fn months(&self) -> &[CalendarGrid] {
        &self.months
    }
}

/// `Calendário <year>`, a blank line, then every month followed by a blank line.
impl fmt::Display for YearCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{YEAR_TITLE} {}", self.year)?;
        writeln!(f)?;
        for month in &self.months {
            write!(f, "{month}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Calendar formatter, configured with the historical gaps it honours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    reforms: ReformTable,
}

impl Calendar {
    pub const fn new(reforms: ReformTable) -> Self {
        Self { reforms }
    }

    /// Formatter without any historical gaps
    pub const fn proleptic() -> Self {
        Self::new(ReformTable::proleptic())
    }

    pub const fn reforms(&self) -> &ReformTable {
        &self.reforms
    }

    pub fn month(&self, month_year: MonthYear) -> CalendarGrid {
        let skipped = self.reforms.skipped_days(month_year);
        if let Some(days) = skipped {
            debug!("Omitting days {days} from {month_year}");
        }
        CalendarGrid::new(month_year, skipped)
    }

    /// # Errors
    /// Returns `InvalidArgument` only if a month of `year` cannot be
    /// represented by the date library, which does not happen for `1..=MAX_YEAR`.
    pub fn year(&self, year: Year) -> Result<YearCalendar, InvalidArgument> {
        let months = (JANUARY..=MAX_MONTH)
            .map(|month| -> Result<CalendarGrid, InvalidArgument> {
                let month_year = MonthYear::new(year, Month::new(month)?)?;
                trace!("Rendering {month_year}");
                Ok(self.month(month_year))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(YearCalendar { year, months })
    }

    /// Renders `request`, resolving `Today` against the local clock.
    ///
    /// # Errors
    /// See [`Calendar::render_on`].
    pub fn render(&self, request: CalendarRequest) -> Result<String, InvalidArgument> {
        self.render_on(request, Local::now().date_naive())
    }

    /// Renders `request`, resolving `Today` as the month containing `today`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `today` lies outside years `1..=MAX_YEAR`.
    pub fn render_on(
        &self,
        request: CalendarRequest,
        today: NaiveDate,
    ) -> Result<String, InvalidArgument> {
        let text = match request {
            CalendarRequest::Today => self.month(MonthYear::from_date(today)?).to_string(),
            CalendarRequest::Year(year) => self.year(year)?.to_string(),
            CalendarRequest::Month(month_year) => self.month(month_year).to_string(),
        };
        Ok(text)
    }

    /// Resolves raw argument tokens and renders them.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a month or year token is not a number
    /// or out of range. Nothing is rendered in that case.
    pub fn render_args<S: AsRef<str>>(&self, args: &[S]) -> Result<String, InvalidArgument> {
        let request = CalendarRequest::from_args(args)?;
        debug!("Resolved calendar request: {request:?}");
        self.render(request)
    }
}

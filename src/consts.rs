/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for September
pub const SEPTEMBER: u8 = 9;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;
/// Longest month length, upper bound for any day number
pub const MAX_DAY: u8 = 31;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month names as printed in grid headers (index 0 unused)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Two-letter weekday abbreviations, Sunday first
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Do", "Se", "Te", "Qa", "Qi", "Se", "Sa"];

/// Weekday header line, cells joined by [`CELL_SEPARATOR`]
pub const WEEKDAY_HEADER: &str = "Do Se Te Qa Qi Se Sa";

/// Title word printed before the year in a full-year render
pub const YEAR_TITLE: &str = "Calendário";

pub const DAYS_IN_WEEK: u8 = 7;
/// Width of the day-number field in a cell
pub const CELL_WIDTH: usize = 2;
/// Separator between adjacent cells of a week row
pub const CELL_SEPARATOR: &str = " ";

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Year of the British Julian-to-Gregorian switch
pub const GREGORIAN_REFORM_YEAR: u16 = 1752;
/// Month of the British Julian-to-Gregorian switch
pub const GREGORIAN_REFORM_MONTH: u8 = SEPTEMBER;
/// First day dropped by the 1752 switch
pub const GREGORIAN_REFORM_FIRST_SKIPPED: u8 = 3;
/// Last day dropped by the 1752 switch
pub const GREGORIAN_REFORM_LAST_SKIPPED: u8 = 13;

/// Separator in the textual form of a skipped-day span (`3-13`)
pub const SPAN_SEPARATOR: char = '-';

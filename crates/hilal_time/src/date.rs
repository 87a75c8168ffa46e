//! Date-only calendar values.
//!
//! `CalendarDate` is the unit every lunar formula works in: time of day is
//! implicitly 00:00 in a naive civil time scale. `CalendarMonth` is the
//! month-picker input from which a crescent report starts.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month, jd_to_calendar};

/// Earliest accepted year (the year of Julian Day 0, astronomical numbering).
pub const MIN_YEAR: i32 = -4712;
/// Latest accepted year.
pub const MAX_YEAR: i32 = 9999;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// English name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

fn check_year(year: i32) -> Result<(), TimeError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(TimeError::InvalidDate(format!(
            "year {year} out of range {MIN_YEAR}..={MAX_YEAR}"
        )));
    }
    Ok(())
}

/// Zero-padded year, with a leading '-' for negative years.
fn write_year(f: &mut Formatter<'_>, year: i32) -> std::fmt::Result {
    if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())
    } else {
        write!(f, "{year:04}")
    }
}

/// Split `[-]YYYY-MM[-DD]` into its fields, keeping the year's sign.
fn split_fields(s: &str) -> (i32, Vec<&str>) {
    let s = s.trim();
    match s.strip_prefix('-') {
        Some(rest) => (-1, rest.split('-').collect()),
        None => (1, s.split('-').collect()),
    }
}

/// A proleptic Gregorian calendar date without time of day.
///
/// Years use astronomical numbering (year 0 is 1 BCE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Create a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!(
                "month {month} out of range 1-12"
            )));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(TimeError::InvalidDate(format!(
                "day {day} out of range 1-{last} for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Date at 00:00 of this date.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// The date containing the given Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
        }
    }

    /// Shift by a whole number of days (negative moves backwards).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_jd(self.to_jd() + days as f64)
    }

    /// Whole days elapsed since "January 0" of this date's year.
    ///
    /// January 1 is day 1, December 31 is day 365 (366 in leap years).
    pub fn day_of_year(&self) -> u32 {
        let jan0 = calendar_to_jd(self.year, 1, 0.0);
        (self.to_jd() - jan0).floor() as u32
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        let jdn = (self.to_jd() + 1.5).floor() as i64;
        Weekday::ALL[jdn.rem_euclid(7) as usize]
    }

    /// English month name, or "" for a month outside 1-12.
    pub fn month_name(&self) -> &'static str {
        self.month
            .checked_sub(1)
            .and_then(|i| MONTH_NAMES.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// Long human form, e.g. "Thursday, January 11, 2024".
    pub fn format_long(&self) -> String {
        format!(
            "{}, {} {}, {}",
            self.weekday().name(),
            self.month_name(),
            self.day,
            self.year
        )
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_year(f, self.year)?;
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, with an optional leading '-' on the year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, parts) = split_fields(s);
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year = sign * parts[0].parse::<i32>()?;
        let month: u32 = parts[1].parse()?;
        let day: u32 = parts[2].parse()?;
        Self::new(year, month, day)
    }
}

/// A calendar month, as chosen in a month picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, TimeError> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!(
                "month {month} out of range 1-12"
            )));
        }
        Ok(Self { year, month })
    }

    /// The first day of the month.
    pub fn first_day(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }
}

impl Display for CalendarMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_year(f, self.year)?;
        write!(f, "-{:02}", self.month)
    }
}

impl FromStr for CalendarMonth {
    type Err = TimeError;

    /// Parse `YYYY-MM`, with an optional leading '-' on the year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, parts) = split_fields(s);
        if parts.len() != 2 {
            return Err(TimeError::Parse(format!("expected YYYY-MM, got {s}")));
        }
        let year = sign * parts[0].parse::<i32>()?;
        let month: u32 = parts[1].parse()?;
        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(2024, 13, 1).is_err());
        assert!(CalendarDate::new(2024, 4, 0).is_err());
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn jd_roundtrip() {
        let d = date(2024, 1, 11);
        assert_eq!(d.to_jd(), 2_460_320.5);
        assert_eq!(CalendarDate::from_jd(d.to_jd()), d);
    }

    #[test]
    fn add_days_crosses_month_and_year() {
        assert_eq!(date(2024, 1, 31).add_days(1), date(2024, 2, 1));
        assert_eq!(date(2024, 2, 28).add_days(1), date(2024, 2, 29));
        assert_eq!(date(2024, 1, 1).add_days(-1), date(2023, 12, 31));
        assert_eq!(date(2024, 1, 1).add_days(10), date(2024, 1, 11));
    }

    #[test]
    fn day_of_year_ordinal() {
        assert_eq!(date(2024, 1, 1).day_of_year(), 1);
        assert_eq!(date(2024, 3, 20).day_of_year(), 80);
        assert_eq!(date(2023, 3, 21).day_of_year(), 80);
        assert_eq!(date(2023, 12, 31).day_of_year(), 365);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
    }

    #[test]
    fn weekday_known_dates() {
        assert_eq!(date(2024, 1, 11).weekday(), Weekday::Thursday);
        assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    }

    #[test]
    fn long_format() {
        assert_eq!(date(2024, 1, 12).format_long(), "Friday, January 12, 2024");
    }

    #[test]
    fn display_and_parse() {
        let d: CalendarDate = "2024-03-05".parse().unwrap();
        assert_eq!(d, date(2024, 3, 5));
        assert_eq!(d.to_string(), "2024-03-05");
        assert!("2024-03".parse::<CalendarDate>().is_err());
        assert!("2024-xx-05".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn negative_years_display_and_parse() {
        let d: CalendarDate = "-0044-03-15".parse().unwrap();
        assert_eq!(d, date(-44, 3, 15));
        assert_eq!(d.to_string(), "-0044-03-15");
        let m: CalendarMonth = "-0044-03".parse().unwrap();
        assert_eq!(m.to_string(), "-0044-03");
        assert!("--44-03-15".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn year_range_is_bounded() {
        assert!(CalendarDate::new(MIN_YEAR, 1, 1).is_ok());
        assert!(CalendarDate::new(MAX_YEAR, 12, 31).is_ok());
        assert!(CalendarDate::new(MIN_YEAR - 1, 12, 31).is_err());
        assert!(CalendarMonth::new(MAX_YEAR + 1, 1).is_err());
        assert!(matches!(
            "10000-01-01".parse::<CalendarDate>(),
            Err(TimeError::InvalidDate(_))
        ));
    }

    #[test]
    fn month_name_tolerates_unvalidated_month() {
        for month in [0, 13] {
            let bad = CalendarDate {
                year: 2024,
                month,
                day: 1,
            };
            assert_eq!(bad.month_name(), "");
        }
        assert_eq!(date(2024, 12, 1).month_name(), "December");
    }

    #[test]
    fn month_parse_and_first_day() {
        let m: CalendarMonth = "2024-01".parse().unwrap();
        assert_eq!(m.first_day(), date(2024, 1, 1));
        assert_eq!(m.to_string(), "2024-01");
        assert!("2024-00".parse::<CalendarMonth>().is_err());
        assert!("".parse::<CalendarMonth>().is_err());
    }
}

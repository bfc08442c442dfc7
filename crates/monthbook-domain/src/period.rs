//! Calendar-month period identifiers used to key the store.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

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

/// Identifies a (year, month) bucket. Month is 1-12, calendar-native.
///
/// Two identifiers are equal iff both components match. Serializes as the
/// zero-padded string `"YYYY-MM"` so the store maps to a plain JSON object
/// with sortable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodId {
    pub year: i32,
    pub month: u32,
}

impl PeriodId {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {month}");
        Self { year, month }
    }

    /// Returns the bucket containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn days_in_month(self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
        (first_next - Duration::days(1)).day()
    }

    /// Human-facing label, e.g. `"January 2024"`.
    pub fn label(self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised while parsing a [`PeriodId`] from its string form.
pub enum PeriodIdParseError {
    Malformed(String),
    MonthOutOfRange(u32),
}

impl fmt::Display for PeriodIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodIdParseError::Malformed(raw) => {
                write!(f, "expected a `YYYY-MM` period key, got `{raw}`")
            }
            PeriodIdParseError::MonthOutOfRange(month) => {
                write!(f, "month must be 1-12, got {month}")
            }
        }
    }
}

impl std::error::Error for PeriodIdParseError {}

impl FromStr for PeriodId {
    type Err = PeriodIdParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || PeriodIdParseError::Malformed(raw.to_string());
        let (year_part, month_part) = raw.rsplit_once('-').ok_or_else(malformed)?;
        let year: i32 = year_part.parse().map_err(|_| malformed())?;
        let month: u32 = month_part.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(PeriodIdParseError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }
}

impl Serialize for PeriodId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_string_form() {
        let period = PeriodId::new(2024, 3);
        assert_eq!(period.to_string(), "2024-03");
        assert_eq!("2024-03".parse::<PeriodId>().unwrap(), period);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!("2024".parse::<PeriodId>().is_err());
        assert!("2024-xx".parse::<PeriodId>().is_err());
        assert_eq!(
            "2024-13".parse::<PeriodId>(),
            Err(PeriodIdParseError::MonthOutOfRange(13))
        );
    }

    #[test]
    fn orders_chronologically() {
        let mut periods = vec![
            PeriodId::new(2024, 2),
            PeriodId::new(2023, 12),
            PeriodId::new(2024, 1),
        ];
        periods.sort();
        assert_eq!(
            periods,
            vec![
                PeriodId::new(2023, 12),
                PeriodId::new(2024, 1),
                PeriodId::new(2024, 2),
            ]
        );
    }

    #[test]
    fn derives_bucket_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 31).unwrap();
        assert_eq!(PeriodId::from_date(date), PeriodId::new(2024, 7));
    }

    #[test]
    fn knows_month_lengths() {
        assert_eq!(PeriodId::new(2024, 2).days_in_month(), 29);
        assert_eq!(PeriodId::new(2023, 2).days_in_month(), 28);
        assert_eq!(PeriodId::new(2024, 12).days_in_month(), 31);
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(PeriodId::new(2024, 1).label(), "January 2024");
    }
}

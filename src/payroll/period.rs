use chrono::{Datelike, NaiveDate};
use derive_more::Display;
use std::str::FromStr;

use super::error::PayrollError;

/// A calendar-month payroll period, `YYYY-MM` on the wire.
///
/// Parsing pins the day to `01` to resolve the month; the month's first and
/// last days bound the attendance window for overtime aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}", year, month)]
pub struct PayrollPeriod {
    year: i32,
    month: u32,
}

impl PayrollPeriod {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated on parse")
    }

    pub fn last_day(&self) -> NaiveDate {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .expect("validated on parse")
    }
}

impl FromStr for PayrollPeriod {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PayrollError::InvalidPeriod(s.to_string());

        // Exactly YYYY-MM; anything longer would silently pass a full date.
        if s.len() != 7 || s.as_bytes()[4] != b'-' {
            return Err(invalid());
        }

        let first_day =
            NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").map_err(|_| invalid())?;

        Ok(Self {
            year: first_day.year(),
            month: first_day.month(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_period() {
        let period: PayrollPeriod = "2026-07".parse().unwrap();
        assert_eq!(period.year(), 2026);
        assert_eq!(period.month(), 7);
    }

    #[test]
    fn rejects_full_dates_and_garbage() {
        for bad in ["2026-07-01", "2026/07", "2026-13", "26-07", "", "abcdefg"] {
            assert!(
                bad.parse::<PayrollPeriod>().is_err(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn month_boundaries() {
        let period: PayrollPeriod = "2026-07".parse().unwrap();
        assert_eq!(
            period.first_day(),
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()
        );
        assert_eq!(
            period.last_day(),
            NaiveDate::from_ymd_opt(2026, 7, 31).unwrap()
        );
    }

    #[test]
    fn february_and_leap_years() {
        let leap: PayrollPeriod = "2024-02".parse().unwrap();
        assert_eq!(leap.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let plain: PayrollPeriod = "2026-02".parse().unwrap();
        assert_eq!(
            plain.last_day(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn december_rolls_into_next_year() {
        let period: PayrollPeriod = "2026-12".parse().unwrap();
        assert_eq!(
            period.last_day(),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
    }

    #[test]
    fn displays_back_to_wire_format() {
        let period: PayrollPeriod = "2026-03".parse().unwrap();
        assert_eq!(period.to_string(), "2026-03");
    }
}

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// One calendar month, the unit of reports and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthPeriod {
    first_day: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month {year}-{month}")]
pub struct InvalidMonth {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidMonth> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or(InvalidMonth { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The month holding `today`, with `year` and `month` overriding its parts.
    pub fn resolve(
        today: NaiveDate,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<Self, InvalidMonth> {
        let current = Self::containing(today);
        Self::new(
            year.unwrap_or(current.year()),
            month.unwrap_or(current.month()),
        )
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Human readable label, e.g. "March 2024".
    pub fn label(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

#[cfg(test)]
mod month_period_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_a_month_and_label_it() {
        let period = MonthPeriod::new(2024, 3).unwrap();
        assert_eq!(period.label(), "March 2024");
        assert_eq!(period.to_string(), "2024-03");
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn it_should_reject_out_of_range_months(#[case] month: u32) {
        assert_eq!(
            MonthPeriod::new(2024, month),
            Err(InvalidMonth { year: 2024, month })
        );
    }

    #[rstest]
    fn it_should_tell_whether_a_date_falls_inside() {
        let period = MonthPeriod::containing(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(period, MonthPeriod::new(2024, 2).unwrap());
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[rstest]
    #[case(None, None, Some((2024, 5)))]
    #[case(Some(2023), None, Some((2023, 5)))]
    #[case(None, Some(1), Some((2024, 1)))]
    #[case(Some(2022), Some(12), Some((2022, 12)))]
    #[case(None, Some(13), None)]
    fn it_should_fill_missing_parts_from_today(
        #[case] year: Option<i32>,
        #[case] month: Option<u32>,
        #[case] expected: Option<(i32, u32)>,
    ) {
        let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let resolved = MonthPeriod::resolve(today, year, month);
        assert_eq!(
            resolved.ok().map(|period| (period.year(), period.month())),
            expected
        );
    }
}

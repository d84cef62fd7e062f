//! Period filtering and month navigation
//!
//! The filtering functions are pure: they borrow the expense list and never
//! reorder it. [`PeriodService`] resolves user-supplied month references
//! ("2024-03", "March 2024", "last") against a fixed "today".

use chrono::{Datelike, NaiveDate};

use crate::error::{SpendError, SpendResult};
use crate::models::{Expense, Money, Period, YearMonth};

/// A month that has at least one expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    pub month: YearMonth,
    /// Display label, e.g. "March 2024"
    pub label: String,
}

/// Expenses falling in the same `period` as `reference`, in input order
///
/// The returned iterator is lazy and can be cloned to walk the selection
/// again.
pub fn filter_by_period<'a>(
    expenses: &'a [Expense],
    reference: NaiveDate,
    period: Period,
) -> impl Iterator<Item = &'a Expense> + Clone + 'a {
    expenses
        .iter()
        .filter(move |e| period.matches(e.date, reference))
}

/// Expenses dated within `month`, in input order
pub fn filter_by_month<'a>(
    expenses: &'a [Expense],
    month: YearMonth,
) -> impl Iterator<Item = &'a Expense> + Clone + 'a {
    filter_by_period(expenses, month.first_day(), Period::Month)
}

/// Distinct months present in `expenses`, most recent first
pub fn list_distinct_periods(expenses: &[Expense]) -> Vec<MonthSummary> {
    let mut months: Vec<YearMonth> = expenses.iter().map(|e| YearMonth::of(e.date)).collect();
    months.sort_unstable_by(|a, b| b.cmp(a));
    months.dedup();

    months
        .into_iter()
        .map(|month| MonthSummary {
            label: month.label(),
            month,
        })
        .collect()
}

/// Sum of the amounts of `expenses`
pub fn total<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Money {
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Resolves month references relative to a reference date
#[derive(Debug, Clone, Copy)]
pub struct PeriodService {
    today: NaiveDate,
}

impl PeriodService {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Service anchored at today's local date
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.today
    }

    pub fn current_month(&self) -> YearMonth {
        YearMonth::of(self.today)
    }

    /// Parse a month reference
    ///
    /// Formats supported:
    /// - "2024-03"
    /// - "March 2024", "Mar 2024", or a bare month name
    /// - "current", "this", "last", "previous", "next"
    pub fn parse_month(&self, s: &str) -> SpendResult<YearMonth> {
        let lower = s.trim().to_lowercase();

        match lower.as_str() {
            "current" | "now" | "this" => return Ok(self.current_month()),
            "last" | "previous" | "prev" => return self.step(self.current_month().prev()),
            "next" => return self.step(self.current_month().next()),
            _ => {}
        }

        if let Some(month) = self.parse_month_name(&lower) {
            return Ok(month);
        }

        YearMonth::parse(&lower)
            .map_err(|_| SpendError::InvalidInput(format!("Invalid month: {}", s.trim())))
    }

    fn step(&self, month: Option<YearMonth>) -> SpendResult<YearMonth> {
        month.ok_or_else(|| SpendError::InvalidInput("Month out of range".into()))
    }

    /// Parse a date in YYYY-MM-DD form, or "today"/"yesterday"
    pub fn parse_date(&self, s: &str) -> SpendResult<NaiveDate> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(self.today),
            "yesterday" => self
                .today
                .pred_opt()
                .ok_or_else(|| SpendError::InvalidInput("Date out of range".into())),
            other => NaiveDate::parse_from_str(other, crate::models::DATE_FORMAT)
                .map_err(|_| SpendError::InvalidInput(format!("Invalid date: {}", s.trim()))),
        }
    }

    fn parse_month_name(&self, s: &str) -> Option<YearMonth> {
        const MONTHS: [(&str, u32); 12] = [
            ("jan", 1),
            ("feb", 2),
            ("mar", 3),
            ("apr", 4),
            ("may", 5),
            ("jun", 6),
            ("jul", 7),
            ("aug", 8),
            ("sep", 9),
            ("oct", 10),
            ("nov", 11),
            ("dec", 12),
        ];

        let (name, rest) = match s.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (s, ""),
        };
        if name.len() < 3 || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let (_, month) = MONTHS.iter().find(|(prefix, _)| name.starts_with(prefix))?;
        let year = if rest.is_empty() {
            // A bare month name means its most recent occurrence
            if *month > self.today.month() {
                self.today.year() - 1
            } else {
                self.today.year()
            }
        } else {
            rest.parse().ok()?
        };

        YearMonth::new(year, *month).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: i64, category: &str, on: NaiveDate) -> Expense {
        Expense::new("test", Money::from_units(amount), on, category)
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(20, "food", date(2024, 3, 1)),
            expense(30, "food", date(2024, 3, 2)),
            expense(10, "transport", date(2024, 3, 2)),
            expense(5, "other", date(2024, 1, 2)),
            expense(7, "other", date(2023, 3, 2)),
        ]
    }

    #[test]
    fn test_filter_by_day() {
        let expenses = sample();
        let day: Vec<_> = filter_by_period(&expenses, date(2024, 3, 2), Period::Day)
            .map(|e| e.amount)
            .collect();
        assert_eq!(day, vec![Money::from_units(30), Money::from_units(10)]);
    }

    #[test]
    fn test_periods_nest() {
        let expenses = sample();
        for reference in [date(2024, 3, 2), date(2024, 1, 2), date(2023, 3, 2), date(2022, 1, 1)] {
            let day: Vec<_> = filter_by_period(&expenses, reference, Period::Day).collect();
            let month: Vec<_> = filter_by_period(&expenses, reference, Period::Month).collect();
            let year: Vec<_> = filter_by_period(&expenses, reference, Period::Year).collect();

            assert!(day.iter().all(|e| month.iter().any(|m| std::ptr::eq(*e, *m))));
            assert!(month.iter().all(|e| year.iter().any(|y| std::ptr::eq(*e, *y))));
        }
    }

    #[test]
    fn test_filter_is_restartable() {
        let expenses = sample();
        let march = filter_by_month(&expenses, YearMonth::new(2024, 3).unwrap());
        assert_eq!(total(march.clone()), Money::from_units(60));
        assert_eq!(march.count(), 3);
    }

    #[test]
    fn test_list_distinct_periods() {
        let expenses = sample();
        let months = list_distinct_periods(&expenses);
        let labels: Vec<_> = months.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["March 2024", "January 2024", "March 2023"]);
    }

    #[test]
    fn test_list_distinct_periods_empty() {
        assert!(list_distinct_periods(&[]).is_empty());
    }

    #[test]
    fn test_parse_relative_months() {
        let service = PeriodService::new(date(2024, 1, 15));
        assert_eq!(service.parse_month("current").unwrap(), YearMonth::new(2024, 1).unwrap());
        assert_eq!(service.parse_month("last").unwrap(), YearMonth::new(2023, 12).unwrap());
        assert_eq!(service.parse_month("next").unwrap(), YearMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn test_parse_month_names() {
        let service = PeriodService::new(date(2024, 4, 15));
        assert_eq!(service.parse_month("2024-03").unwrap(), YearMonth::new(2024, 3).unwrap());
        assert_eq!(service.parse_month("March 2022").unwrap(), YearMonth::new(2022, 3).unwrap());
        assert_eq!(service.parse_month("Sept").unwrap(), YearMonth::new(2023, 9).unwrap());
        assert_eq!(service.parse_month("apr").unwrap(), YearMonth::new(2024, 4).unwrap());
        assert!(service.parse_month("someday").is_err());
    }

    #[test]
    fn test_parse_month_out_of_calendar_range() {
        let service = PeriodService::new(date(2024, 4, 15));
        assert!(matches!(
            service.parse_month("300000-01"),
            Err(SpendError::InvalidInput(_))
        ));
        assert!(service.parse_month("March 300000").is_err());

        let edge = PeriodService::new(NaiveDate::MAX);
        assert!(matches!(edge.parse_month("next"), Err(SpendError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_date() {
        let service = PeriodService::new(date(2024, 3, 1));
        assert_eq!(service.parse_date("today").unwrap(), date(2024, 3, 1));
        assert_eq!(service.parse_date("yesterday").unwrap(), date(2024, 2, 29));
        assert_eq!(service.parse_date("2024-02-10").unwrap(), date(2024, 2, 10));
        assert!(service.parse_date("10/02/2024").is_err());
    }
}

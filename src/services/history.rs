//! Expense history selection
//!
//! Decides which expenses the history view shows, and distinguishes an empty
//! log from an empty selection.

use chrono::NaiveDate;

use crate::models::{Expense, Money, Period, YearMonth};
use crate::reports::spending::{aggregate_by_category, top_categories, CategoryTotal};
use crate::services::period::{filter_by_month, filter_by_period, total};

/// Number of categories in the history breakdown
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// Which expenses to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    #[default]
    All,
    Day(NaiveDate),
    Month(YearMonth),
}

impl HistoryFilter {
    /// Build a filter from optional selections; a date wins over a month
    pub fn from_selection(date: Option<NaiveDate>, month: Option<YearMonth>) -> Self {
        match (date, month) {
            (Some(date), _) => Self::Day(date),
            (None, Some(month)) => Self::Month(month),
            (None, None) => Self::All,
        }
    }

    /// Human-readable description of the selection
    pub fn title(&self) -> String {
        match self {
            Self::All => "All time".to_string(),
            Self::Day(date) => date.format("%B %-d, %Y").to_string(),
            Self::Month(month) => month.label(),
        }
    }

    /// The matching expenses, in log order
    pub fn select<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        match *self {
            Self::All => expenses.iter().collect(),
            Self::Day(date) => filter_by_period(expenses, date, Period::Day).collect(),
            Self::Month(month) => filter_by_month(expenses, month).collect(),
        }
    }
}

/// What the history view should render
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView<'a> {
    /// There are no expenses at all
    NoExpensesLogged,
    /// Expenses exist, but none match the filter
    NoExpensesInPeriod,
    Expenses {
        expenses: Vec<&'a Expense>,
        total: Money,
        /// Largest categories, largest first
        top: Vec<CategoryTotal>,
    },
}

impl HistoryView<'_> {
    /// Message for the empty states
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            Self::NoExpensesLogged => Some("No expenses logged yet."),
            Self::NoExpensesInPeriod => Some("No expenses for the selected period."),
            Self::Expenses { .. } => None,
        }
    }
}

/// Select expenses for the history view
pub fn select_history(
    expenses: &[Expense],
    filter: HistoryFilter,
    top_n: usize,
) -> HistoryView<'_> {
    if expenses.is_empty() {
        return HistoryView::NoExpensesLogged;
    }

    let selected = filter.select(expenses);

    if selected.is_empty() {
        return HistoryView::NoExpensesInPeriod;
    }

    let top = top_categories(aggregate_by_category(selected.iter().copied()), top_n);
    HistoryView::Expenses {
        total: total(selected.iter().copied()),
        expenses: selected,
        top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("Lunch", Money::from_units(20), date(2024, 3, 1), "food"),
            Expense::new("Dinner", Money::from_units(30), date(2024, 3, 2), "food"),
            Expense::new("Bus", Money::from_units(10), date(2024, 3, 2), "transport"),
            Expense::new("Book", Money::from_units(15), date(2024, 2, 9), "education"),
        ]
    }

    #[test]
    fn test_empty_log_is_distinguished() {
        let view = select_history(&[], HistoryFilter::All, DEFAULT_TOP_CATEGORIES);
        assert_eq!(view, HistoryView::NoExpensesLogged);
        assert_eq!(view.empty_message(), Some("No expenses logged yet."));
    }

    #[test]
    fn test_empty_period() {
        let expenses = sample();
        let filter = HistoryFilter::Month(YearMonth::new(2023, 1).unwrap());
        let view = select_history(&expenses, filter, DEFAULT_TOP_CATEGORIES);
        assert_eq!(view, HistoryView::NoExpensesInPeriod);
        assert_eq!(view.empty_message(), Some("No expenses for the selected period."));
    }

    #[test]
    fn test_date_takes_priority_over_month() {
        let filter = HistoryFilter::from_selection(
            Some(date(2024, 3, 2)),
            Some(YearMonth::new(2024, 2).unwrap()),
        );
        assert_eq!(filter, HistoryFilter::Day(date(2024, 3, 2)));
        assert_eq!(HistoryFilter::from_selection(None, None), HistoryFilter::All);
    }

    #[test]
    fn test_day_selection() {
        let expenses = sample();
        match select_history(&expenses, HistoryFilter::Day(date(2024, 3, 2)), 5) {
            HistoryView::Expenses { expenses, total, top } => {
                assert_eq!(expenses.len(), 2);
                assert_eq!(total, Money::from_units(40));
                assert_eq!(top[0].category, "food");
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_all_selection_limits_breakdown() {
        let expenses = sample();
        match select_history(&expenses, HistoryFilter::All, 2) {
            HistoryView::Expenses { expenses, total, top } => {
                assert_eq!(expenses.len(), 4);
                assert_eq!(total, Money::from_units(75));
                let keys: Vec<_> = top.iter().map(|t| t.category.as_str()).collect();
                assert_eq!(keys, vec!["food", "education"]);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_filter_titles() {
        assert_eq!(HistoryFilter::All.title(), "All time");
        assert_eq!(HistoryFilter::Day(date(2024, 3, 2)).title(), "March 2, 2024");
        assert_eq!(
            HistoryFilter::Month(YearMonth::new(2024, 3).unwrap()).title(),
            "March 2024"
        );
    }

    #[test]
    fn test_select_keeps_log_order() {
        let expenses = sample();
        let march = HistoryFilter::Month(YearMonth::new(2024, 3).unwrap()).select(&expenses);
        let names: Vec<_> = march.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["Lunch", "Dinner", "Bus"]);

        let day = HistoryFilter::Day(date(2024, 3, 2)).select(&expenses);
        assert_eq!(day.len(), 2);
        assert_eq!(HistoryFilter::All.select(&expenses).len(), 4);
    }
}

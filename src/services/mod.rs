//! Service layer for spendlog
//!
//! The service layer derives figures from the storage layer: period
//! selection, budget status, and the expense history view.

pub mod budget;
pub mod history;
pub mod period;

pub use budget::{BudgetOverview, BudgetService, CategoryBudgetStatus};
pub use history::{select_history, HistoryFilter, HistoryView, DEFAULT_TOP_CATEGORIES};
pub use period::{
    filter_by_month, filter_by_period, list_distinct_periods, total, MonthSummary, PeriodService,
};

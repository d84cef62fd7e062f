//! Core data models for spendlog
//!
//! Expenses, budgets, the static category registry, and the money and period
//! value types they are built from.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use budget::{progress_fraction, remaining_against, Budget, BudgetKind};
pub use category::{Category, CategoryRegistry, FALLBACK_CATEGORY, STANDARD_CATEGORIES};
pub use expense::{Expense, ExpenseForm, ExpenseFormErrors, DATE_FORMAT};
pub use ids::{BudgetId, ExpenseId};
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError, YearMonth};

//! Budget service
//!
//! Joins the budget ledger with the current month's expenses to produce the
//! remaining/progress figures shown on the dashboard and in `budget show`.

use chrono::NaiveDate;

use crate::models::{progress_fraction, CategoryRegistry, Expense, Money, YearMonth};
use crate::reports::spending::aggregate_by_category;
use crate::services::period::{filter_by_month, total};
use crate::storage::Storage;

/// Budget status for one category in the current month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBudgetStatus {
    pub category: String,
    /// Budget amount; zero when none is set
    pub budgeted: Money,
    pub spent: Money,
    pub remaining: Money,
    pub progress: f64,
}

impl CategoryBudgetStatus {
    pub fn has_budget(&self) -> bool {
        self.budgeted.is_positive()
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Budget overview for a month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOverview {
    pub month: YearMonth,
    /// Monthly budget amount; zero when none is set
    pub monthly_budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub progress: f64,
    /// One row per registry category, followed by unknown categories that
    /// have a budget or spending
    pub categories: Vec<CategoryBudgetStatus>,
}

impl BudgetOverview {
    pub fn has_monthly_budget(&self) -> bool {
        self.monthly_budget.is_positive()
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Status for one category
    pub fn category(&self, key: &str) -> Option<&CategoryBudgetStatus> {
        self.categories.iter().find(|c| c.category == key)
    }

    /// Categories that have spent past their budget
    pub fn overspent_categories(&self) -> impl Iterator<Item = &CategoryBudgetStatus> {
        self.categories
            .iter()
            .filter(|c| c.has_budget() && c.is_overspent())
    }
}

/// Service for budget figures
pub struct BudgetService<'a> {
    storage: &'a Storage,
    registry: CategoryRegistry,
    today: NaiveDate,
}

impl<'a> BudgetService<'a> {
    /// Create a budget service measuring against the month containing `today`
    pub fn new(storage: &'a Storage, today: NaiveDate) -> Self {
        Self {
            storage,
            registry: CategoryRegistry::standard(),
            today,
        }
    }

    pub fn current_month(&self) -> YearMonth {
        YearMonth::of(self.today)
    }

    fn month_expenses(&self) -> impl Iterator<Item = &'a Expense> + Clone + 'a {
        filter_by_month(self.storage.expenses.all(), self.current_month())
    }

    /// Total spending in the current month
    pub fn month_spend(&self) -> Money {
        total(self.month_expenses())
    }

    /// Spending in `category` in the current month
    pub fn category_spend(&self, category: &str) -> Money {
        total(self.month_expenses().filter(|e| e.category == category))
    }

    /// Build the overview for the current month
    pub fn overview(&self) -> BudgetOverview {
        let ledger = &self.storage.budgets;
        let spent = self.month_spend();
        let monthly_budget = ledger.monthly_budget().map(|b| b.amount).unwrap_or_default();

        let spending = aggregate_by_category(self.month_expenses());
        let spent_in = |key: &str| {
            spending
                .iter()
                .find(|t| t.category == key)
                .map(|t| t.amount)
                .unwrap_or_default()
        };

        let mut keys: Vec<String> = self
            .registry
            .all()
            .iter()
            .map(|c| c.key.to_string())
            .collect();
        let extra = ledger
            .category_budgets()
            .iter()
            .filter_map(|b| b.category.clone())
            .chain(spending.iter().map(|t| t.category.clone()));
        for key in extra {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        let categories = keys
            .into_iter()
            .map(|key| {
                let budgeted = ledger
                    .category_budget(&key)
                    .map(|b| b.amount)
                    .unwrap_or_default();
                let spent = spent_in(&key);
                CategoryBudgetStatus {
                    remaining: ledger.remaining_for_category(&key, spent),
                    progress: progress_fraction(spent, budgeted),
                    category: key,
                    budgeted,
                    spent,
                }
            })
            .collect();

        BudgetOverview {
            month: self.current_month(),
            monthly_budget,
            spent,
            remaining: ledger.remaining_monthly(spent),
            progress: progress_fraction(spent, monthly_budget),
            categories,
        }
    }
}

//! Budget model
//!
//! A budget is a spending ceiling, either for the whole month or for one
//! category. A zero amount means "no budget", so stored budgets are always
//! positive.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// Which spending a budget caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetKind {
    /// Total spending for the current month
    #[default]
    Monthly,
    /// Spending in a single category
    Category,
}

impl fmt::Display for BudgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// A spending ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier, preserved across amount updates
    pub id: BudgetId,

    /// Ceiling amount
    pub amount: Money,

    /// Budget variant; older records omit it
    #[serde(rename = "type", default)]
    pub kind: BudgetKind,

    /// Category key for category budgets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Budget {
    /// Create a monthly budget
    pub fn monthly(amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            amount,
            kind: BudgetKind::Monthly,
            category: None,
        }
    }

    /// Create a budget scoped to one category
    pub fn for_category(category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            amount,
            kind: BudgetKind::Category,
            category: Some(category.into()),
        }
    }

    /// Check whether this is the budget for `category`
    pub fn is_for(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// Amount left after `spend`; negative means over budget
    pub fn remaining(&self, spend: Money) -> Money {
        self.amount - spend
    }

    /// Fraction of this budget used by `spend`
    pub fn progress(&self, spend: Money) -> f64 {
        progress_fraction(spend, self.amount)
    }
}

/// Fraction of `budget` consumed by `spend`, saturating at 1
///
/// A zero budget yields 0 rather than dividing by zero.
pub fn progress_fraction(spend: Money, budget: Money) -> f64 {
    match spend.ratio(budget) {
        Some(ratio) => ratio.clamp(0.0, 1.0),
        None => 0.0,
    }
}

/// Remaining amount for an optional budget; an absent budget counts as zero
pub fn remaining_against(budget: Option<&Budget>, spend: Money) -> Money {
    budget.map(|b| b.amount).unwrap_or_default() - spend
}

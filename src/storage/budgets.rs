//! Budget ledger
//!
//! Owns the monthly budget and the per-category budgets. The monthly budget and
//! the category list live under separate store keys and are saved
//! independently. As with expenses, a change reaches memory and listeners
//! only after it has been written.

use serde_json::Value;

use crate::error::SpendError;
use crate::models::{remaining_against, Budget, BudgetKind, Money};

use super::listeners::{ListenerId, Listeners};
use super::store::{
    load_json, load_records, save_json, save_records, SharedStore, CATEGORY_BUDGETS_KEY,
    MONTHLY_BUDGET_KEY,
};

/// The full budget set, as seen by ledger listeners
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetSet {
    pub monthly: Option<Budget>,
    pub categories: Vec<Budget>,
}

/// Monthly and per-category budgets
pub struct BudgetLedger {
    store: SharedStore,
    budgets: BudgetSet,
    /// Stored category budget elements that could not be decoded
    unreadable: Vec<Value>,
    listeners: Listeners<BudgetSet>,
}

impl BudgetLedger {
    /// Load budgets from `store`
    ///
    /// Records without a `type` take the type of the key they were stored
    /// under. Category records without a category key and records with a
    /// non-positive amount are dropped. Category elements that cannot be
    /// decoded are kept as stored and written back on the next save.
    pub fn load(store: SharedStore) -> Self {
        let monthly = load_json::<Option<Budget>>(store.as_ref(), MONTHLY_BUDGET_KEY)
            .flatten()
            .map(|mut budget| {
                budget.kind = BudgetKind::Monthly;
                budget.category = None;
                budget
            })
            .filter(|budget| budget.amount.is_positive());

        let loaded = load_records::<Budget>(store.as_ref(), CATEGORY_BUDGETS_KEY);
        let mut categories: Vec<Budget> = Vec::new();
        for mut budget in loaded.records {
            budget.kind = BudgetKind::Category;
            let Some(key) = budget.category.clone() else {
                tracing::warn!(id = %budget.id, "dropping category budget without a category");
                continue;
            };
            if !budget.amount.is_positive() {
                continue;
            }
            if categories.iter().any(|b| b.is_for(&key)) {
                tracing::warn!(category = %key, "dropping duplicate category budget");
                continue;
            }
            categories.push(budget);
        }

        tracing::debug!(
            monthly = monthly.is_some(),
            categories = categories.len(),
            "loaded budgets"
        );

        Self {
            store,
            budgets: BudgetSet {
                monthly,
                categories,
            },
            unreadable: loaded.unreadable,
            listeners: Listeners::default(),
        }
    }

    /// The monthly budget, if one is set
    pub fn monthly_budget(&self) -> Option<&Budget> {
        self.budgets.monthly.as_ref()
    }

    /// All category budgets, in creation order
    pub fn category_budgets(&self) -> &[Budget] {
        &self.budgets.categories
    }

    /// The budget for `category`, if one is set
    pub fn category_budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.categories.iter().find(|b| b.is_for(category))
    }

    /// Both budget collections
    pub fn budgets(&self) -> &BudgetSet {
        &self.budgets
    }

    /// Set the monthly budget
    ///
    /// Negative amounts are clamped to zero, and zero clears the budget. An
    /// existing budget keeps its id.
    pub fn set_monthly_budget(&mut self, amount: Money) -> Result<Option<&Budget>, SpendError> {
        let amount = amount.max(Money::zero());

        let next = if amount.is_zero() {
            None
        } else {
            Some(match &self.budgets.monthly {
                Some(budget) => Budget {
                    amount,
                    ..budget.clone()
                },
                None => Budget::monthly(amount),
            })
        };

        save_json(self.store.as_ref(), MONTHLY_BUDGET_KEY, &next)?;
        match &next {
            Some(_) => tracing::info!(%amount, "set monthly budget"),
            None => tracing::info!("cleared monthly budget"),
        }

        self.budgets.monthly = next;
        self.listeners.notify(&self.budgets);
        Ok(self.budgets.monthly.as_ref())
    }

    /// Set the budget for one category, with the same clamp and clear rules
    /// as [`set_monthly_budget`](Self::set_monthly_budget)
    pub fn set_category_budget(
        &mut self,
        category: &str,
        amount: Money,
    ) -> Result<Option<&Budget>, SpendError> {
        let amount = amount.max(Money::zero());
        let mut next = self.budgets.categories.clone();
        let existing = next.iter().position(|b| b.is_for(category));

        let index = match (amount.is_zero(), existing) {
            (true, _) => {
                next.retain(|b| !b.is_for(category));
                None
            }
            (false, Some(index)) => {
                next[index].amount = amount;
                Some(index)
            }
            (false, None) => {
                next.push(Budget::for_category(category, amount));
                Some(next.len() - 1)
            }
        };

        save_records(self.store.as_ref(), CATEGORY_BUDGETS_KEY, &next, &self.unreadable)?;
        match (index, existing) {
            (None, _) => tracing::info!(category, "cleared category budget"),
            (Some(_), Some(_)) => tracing::info!(category, %amount, "updated category budget"),
            (Some(_), None) => tracing::info!(category, %amount, "created category budget"),
        }

        self.budgets.categories = next;
        self.listeners.notify(&self.budgets);
        Ok(index.and_then(|i| self.budgets.categories.get(i)))
    }

    /// Monthly budget minus `spend`; no budget counts as zero
    pub fn remaining_monthly(&self, spend: Money) -> Money {
        remaining_against(self.budgets.monthly.as_ref(), spend)
    }

    /// Category budget minus `spend`; no budget counts as zero
    pub fn remaining_for_category(&self, category: &str, spend: Money) -> Money {
        remaining_against(self.category_budget(category), spend)
    }

    /// Register a listener called after each budget change
    pub fn subscribe(&mut self, listener: impl FnMut(&BudgetSet) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl std::fmt::Debug for BudgetLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetLedger")
            .field("budgets", &self.budgets)
            .field("unreadable", &self.unreadable.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}

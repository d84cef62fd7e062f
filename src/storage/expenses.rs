//! Expense repository
//!
//! Owns the in-memory expense list. Every mutation writes the full new list
//! to the store first; memory and listeners only see it once the write has
//! succeeded.

use serde_json::Value;

use crate::error::SpendError;
use crate::models::{Expense, ExpenseId};

use super::listeners::{ListenerId, Listeners};
use super::store::{load_records, save_records, SharedStore, EXPENSES_KEY};

/// Repository for expense persistence
pub struct ExpenseRepository {
    store: SharedStore,
    expenses: Vec<Expense>,
    /// Stored elements that are not valid expenses, written back as loaded
    unreadable: Vec<Value>,
    listeners: Listeners<[Expense]>,
}

impl ExpenseRepository {
    /// Load the expense list from `store`; missing or corrupt data yields an empty list
    pub fn load(store: SharedStore) -> Self {
        let loaded = load_records::<Expense>(store.as_ref(), EXPENSES_KEY);
        tracing::debug!(
            count = loaded.records.len(),
            unreadable = loaded.unreadable.len(),
            "loaded expenses"
        );

        Self {
            store,
            expenses: loaded.records,
            unreadable: loaded.unreadable,
            listeners: Listeners::default(),
        }
    }

    /// All expenses, in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Append an expense
    pub fn add(&mut self, expense: Expense) -> Result<(), SpendError> {
        tracing::info!(id = %expense.id, category = %expense.category, amount = %expense.amount, "adding expense");
        let mut next = self.expenses.clone();
        next.push(expense);
        self.commit(next)
    }

    /// Remove the expense with `id`
    ///
    /// An unknown id is not an error; the list is still persisted and listeners
    /// still notified. Returns whether a record was removed.
    pub fn delete(&mut self, id: &ExpenseId) -> Result<bool, SpendError> {
        let mut next = self.expenses.clone();
        let removed = match next.iter().position(|e| &e.id == id) {
            Some(index) => {
                next.remove(index);
                true
            }
            None => false,
        };

        if removed {
            tracing::info!(%id, "deleted expense");
        } else {
            tracing::debug!(%id, "delete of unknown expense ignored");
        }

        self.commit(next)?;
        Ok(removed)
    }

    /// Register a listener called with the full list after each mutation
    pub fn subscribe(&mut self, listener: impl FnMut(&[Expense]) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn commit(&mut self, next: Vec<Expense>) -> Result<(), SpendError> {
        save_records(self.store.as_ref(), EXPENSES_KEY, &next, &self.unreadable)?;
        self.expenses = next;
        self.listeners.notify(&self.expenses);
        Ok(())
    }
}

impl std::fmt::Debug for ExpenseRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseRepository")
            .field("expenses", &self.expenses.len())
            .field("unreadable", &self.unreadable.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}

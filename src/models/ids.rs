//! Strongly-typed ID wrappers
//!
//! Both id kinds are opaque strings: expense ids are derived from the
//! creation timestamp, new budget ids are random UUIDs. Newtypes keep the two
//! from being mixed up.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

/// Last timestamp handed out by [`ExpenseId::generate`]
static LAST_EXPENSE_STAMP: AtomicI64 = AtomicI64::new(0);

/// Identifier of a recorded expense
///
/// Generated ids are the creation time in milliseconds, bumped forward when
/// two expenses are created within the same millisecond so that every id
/// handed out by a process is distinct. Ids loaded from storage are kept
/// verbatim, whatever their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a fresh, timestamp-based id
    pub fn generate() -> Self {
        let now = Utc::now().timestamp_millis();
        let mut last = LAST_EXPENSE_STAMP.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match LAST_EXPENSE_STAMP.compare_exchange_weak(
                last,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(next.to_string()),
                Err(actual) => last = actual,
            }
        }
    }

    /// Wrap an existing id string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a budget record
///
/// New ids are random UUIDs; ids loaded from storage are opaque strings and
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetId(String);

impl BudgetId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for BudgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BudgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Reports module for spendlog
//!
//! Spending analysis by category.

pub mod spending;

pub use spending::{
    aggregate_by_category, top_categories, CategoryTotal, SpendingByCategory, SpendingReport,
};

//! Standard expense categories
//!
//! The registry is fixed at compile time: an ordered list of categories with
//! display metadata. Expenses and budgets refer to categories by key only, and
//! keys that are not in the registry still work; they are shown with the
//! [`FALLBACK_CATEGORY`] metadata.

use std::fmt;

/// A fixed classification tag with display metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    /// Key stored on expenses and budgets
    pub key: &'static str,

    /// Human-readable name
    pub name: &'static str,

    /// Single glyph used in listings
    pub icon: &'static str,

    /// CSS-style color used for budget bars
    pub color: &'static str,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

/// The standard categories, in display order
pub static STANDARD_CATEGORIES: &[Category] = &[
    Category {
        key: "food",
        name: "Food",
        icon: "🍔",
        color: "#f97316",
    },
    Category {
        key: "transport",
        name: "Transport",
        icon: "🚗",
        color: "#3b82f6",
    },
    Category {
        key: "housing",
        name: "Housing",
        icon: "🏠",
        color: "#8b5cf6",
    },
    Category {
        key: "utilities",
        name: "Utilities",
        icon: "💡",
        color: "#eab308",
    },
    Category {
        key: "entertainment",
        name: "Entertainment",
        icon: "🎬",
        color: "#ec4899",
    },
    Category {
        key: "health",
        name: "Health",
        icon: "💊",
        color: "#10b981",
    },
    Category {
        key: "shopping",
        name: "Shopping",
        icon: "🛍️",
        color: "#f43f5e",
    },
    Category {
        key: "education",
        name: "Education",
        icon: "📚",
        color: "#6366f1",
    },
    Category {
        key: "other",
        name: "Other",
        icon: "📦",
        color: "#6b7280",
    },
];

/// Metadata used for keys missing from the registry
pub static FALLBACK_CATEGORY: Category = Category {
    key: "",
    name: "Unknown",
    icon: "❓",
    color: "#9ca3af",
};

/// Read-only view over [`STANDARD_CATEGORIES`]
#[derive(Debug, Clone, Copy)]
pub struct CategoryRegistry {
    categories: &'static [Category],
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl CategoryRegistry {
    pub const fn standard() -> Self {
        Self {
            categories: STANDARD_CATEGORIES,
        }
    }

    /// All categories in display order
    pub fn all(&self) -> &'static [Category] {
        self.categories
    }

    /// Key preselected in the expense form
    pub fn default_key(&self) -> &'static str {
        self.categories.first().map(|c| c.key).unwrap_or("")
    }

    /// Look up a category by key, ignoring ASCII case
    pub fn get(&self, key: &str) -> Option<&'static Category> {
        let key = key.trim();
        self.categories
            .iter()
            .find(|c| c.key.eq_ignore_ascii_case(key))
    }

    /// Look up a category, falling back to [`FALLBACK_CATEGORY`]
    pub fn resolve(&self, key: &str) -> &'static Category {
        self.get(key).unwrap_or(&FALLBACK_CATEGORY)
    }

    /// Display name for a key: the registry name, or the raw key when unknown
    pub fn display_name<'a>(&self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(category) => category.name,
            None => key,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_lowercase() {
        let registry = CategoryRegistry::standard();
        let keys: HashSet<_> = registry.all().iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), registry.all().len());
        assert!(registry
            .all()
            .iter()
            .all(|c| c.key == c.key.to_ascii_lowercase()));
    }

    #[test]
    fn test_default_key_is_first_entry() {
        let registry = CategoryRegistry::standard();
        assert_eq!(registry.default_key(), "food");
    }

    #[test]
    fn test_lookup_ignores_case() {
        let registry = CategoryRegistry::standard();
        assert_eq!(registry.get("Food").map(|c| c.name), Some("Food"));
        assert_eq!(registry.get(" TRANSPORT ").map(|c| c.key), Some("transport"));
    }

    #[test]
    fn test_unknown_key_resolves_to_fallback() {
        let registry = CategoryRegistry::standard();
        assert!(registry.get("gadgets").is_none());
        assert_eq!(registry.resolve("gadgets").icon, "❓");
        assert_eq!(registry.display_name("gadgets"), "gadgets");
        assert_eq!(registry.display_name("food"), "Food");
    }
}

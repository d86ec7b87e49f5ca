//! Category labels and the recognized category catalog
//!
//! A category is a free-form label. The catalog lists the labels the
//! expense form offers, but labels outside it (older data, labels typed by
//! hand) are still valid and aggregate like any other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Labels offered by the expense form out of the box
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Others",
];

/// A validated, non-empty category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Create a category from a label, trimming surrounding whitespace
    pub fn new(label: impl Into<String>) -> Result<Self, CategoryValidationError> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The label text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the catalog lists this label
    pub fn is_recognized(&self, catalog: &CategoryCatalog) -> bool {
        catalog.contains(self)
    }
}

impl TryFrom<String> for Category {
    type Error = CategoryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The configurable set of recognized category labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    labels: Vec<Category>,
}

impl CategoryCatalog {
    /// Build a catalog from labels, skipping blanks and duplicates
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self { labels: Vec::new() };
        for label in labels {
            if let Ok(category) = Category::new(label) {
                if !catalog.labels.contains(&category) {
                    catalog.labels.push(category);
                }
            }
        }
        catalog
    }

    /// Check whether a category is in the catalog
    pub fn contains(&self, category: &Category) -> bool {
        self.labels.iter().any(|c| c == category)
    }

    /// Recognized labels in their configured order
    pub fn labels(&self) -> &[Category] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().copied())
    }
}

/// Validation errors for category labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_trims() {
        let category = Category::new("  Travel ").unwrap();
        assert_eq!(category.as_str(), "Travel");
    }

    #[test]
    fn test_empty_category_rejected() {
        assert_eq!(Category::new("   "), Err(CategoryValidationError::EmptyName));
    }

    #[test]
    fn test_default_catalog() {
        let catalog = CategoryCatalog::default();
        assert_eq!(catalog.labels().len(), 9);
        assert!(Category::new("Food & Dining").unwrap().is_recognized(&catalog));
        assert!(!Category::new("Pets").unwrap().is_recognized(&catalog));
    }

    #[test]
    fn test_catalog_skips_blank_and_duplicate_labels() {
        let catalog = CategoryCatalog::new(["Rent", "", "Rent", "Fuel"]);
        let labels: Vec<&str> = catalog.labels().iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, vec!["Rent", "Fuel"]);
    }

    #[test]
    fn test_serde_accepts_unknown_rejects_blank() {
        let category: Category = serde_json::from_str("\"Legacy Label\"").unwrap();
        assert_eq!(category.as_str(), "Legacy Label");
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"Legacy Label\"");

        assert!(serde_json::from_str::<Category>("\"\"").is_err());
    }
}

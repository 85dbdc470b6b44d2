//! Category names
//!
//! Categories are plain names kept in an ordered, duplicate-free list. New
//! names are normalized to title case before they are compared or stored.

use std::fmt;

/// Categories a fresh store starts with
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Groceries", "Transportation", "Utilities", "Entertainment"];

/// The default category list as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Convert a name to title case
///
/// The first letter of every run of letters is upper-cased and the rest of the
/// run lower-cased, so `"e-bike rental"` becomes `"E-Bike Rental"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;

    for c in name.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Trim and title-case a user-entered category name
pub fn normalize_name(raw: &str) -> String {
    title_case(raw.trim())
}

/// Check a (normalized) category name against the existing list
pub fn validate_name(name: &str, existing: &[String]) -> Result<(), CategoryValidationError> {
    if name.trim().is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    if existing.iter().any(|c| c == name) {
        return Err(CategoryValidationError::Duplicate(name.to_string()));
    }

    Ok(())
}

/// Validation errors for category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    Duplicate(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::Duplicate(name) => write!(f, "Category already exists: {}", name),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

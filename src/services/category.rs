//! Category service
//!
//! Business logic for adding categories.

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::category::{self, CategoryValidationError};
use crate::storage::ExpenseStore;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a mut ExpenseStore,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Add a new category and persist the store
    ///
    /// The name is trimmed and title-cased first; the normalized name is
    /// returned. Empty names and names already present are rejected and leave
    /// the category list untouched, as does a failed save.
    pub fn add(&mut self, raw_name: &str) -> ExpenseResult<String> {
        let name = category::normalize_name(raw_name);

        category::validate_name(&name, self.store.categories()).map_err(|e| match e {
            CategoryValidationError::Duplicate(name) => ExpenseError::duplicate_category(name),
            other => ExpenseError::Validation(other.to_string()),
        })?;

        self.store.insert_category(name.clone())?;

        let position = self.store.categories().len() - 1;
        self.store.log_create(
            EntityType::Category,
            format!("category-{}", position),
            Some(name.clone()),
            &name,
        );
        tracing::info!(category = %name, "added category");

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_add_category_normalizes_and_persists() {
        let (temp_dir, mut store) = setup();

        let name = CategoryService::new(&mut store).add("  pet care ").unwrap();
        assert_eq!(name, "Pet Care");
        assert_eq!(store.categories().last().map(String::as_str), Some("Pet Care"));

        let (reloaded, _) = ExpenseStore::load(temp_dir.path().join("expenses.json"));
        assert_eq!(reloaded.categories(), store.categories());
    }

    #[test]
    fn test_duplicate_after_title_case_is_rejected() {
        let (_temp_dir, mut store) = setup();
        let before = store.categories().to_vec();

        let err = CategoryService::new(&mut store).add("groceries").unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(err.to_string(), "Category already exists: Groceries");
        assert_eq!(store.categories(), before.as_slice());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let (temp_dir, mut store) = setup();

        let err = CategoryService::new(&mut store).add("   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.categories().len(), 4);
        assert!(!temp_dir.path().join("expenses.json").exists());
    }

    #[test]
    fn test_long_name_is_accepted() {
        let (_temp_dir, mut store) = setup();

        let name = CategoryService::new(&mut store)
            .add("monthly subscription services and streaming platforms")
            .unwrap();
        assert_eq!(name, "Monthly Subscription Services And Streaming Platforms");
    }

    #[test]
    fn test_failed_save_keeps_category_out() {
        let (temp_dir, mut store) = setup();
        std::fs::create_dir(temp_dir.path().join("expenses.json")).unwrap();

        let err = CategoryService::new(&mut store).add("pets").unwrap_err();
        assert!(!err.is_duplicate() && !err.is_validation());
        assert_eq!(store.categories().len(), 4);
    }

    #[test]
    fn test_add_writes_audit_entry() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut store =
            ExpenseStore::new(temp_dir.path().join("expenses.json")).with_audit(logger.clone());

        CategoryService::new(&mut store).add("pets").unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::Category);
        assert_eq!(entries[0].entity_id, "category-4");
        assert_eq!(entries[0].entity_name.as_deref(), Some("Pets"));
    }
}

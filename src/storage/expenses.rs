//! Expense store backed by a single JSON document
//!
//! The whole store (categories and expenses) is read once at startup and
//! rewritten after every mutation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{category, default_categories, Expense};

use super::file_io::{preserve_corrupt, read_json_optional, write_json_atomic};

/// Serializable shape of the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            expenses: Vec::new(),
        }
    }
}

impl StoreData {
    /// Check the document's invariants
    ///
    /// Category names must be non-empty and unique, and every expense must
    /// have a positive amount and reference a listed category.
    pub fn validate(&self) -> ExpenseResult<()> {
        for (i, name) in self.categories.iter().enumerate() {
            category::validate_name(name, &self.categories[..i])
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;
        }

        for (i, expense) in self.expenses.iter().enumerate() {
            expense
                .validate(&self.categories)
                .map_err(|e| ExpenseError::Validation(format!("expense #{}: {}", i + 1, e)))?;
        }

        Ok(())
    }
}

/// What happened when the store was loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The data file was read and validated
    Loaded,
    /// No data file existed; defaults are in use
    Missing,
    /// The data file could not be used; defaults are in use
    Corrupt {
        reason: String,
        /// Where the unreadable file was copied, if that succeeded
        preserved: Option<PathBuf>,
    },
}

impl LoadOutcome {
    /// Whether the store fell back to its defaults
    pub fn is_fallback(&self) -> bool {
        !matches!(self, LoadOutcome::Loaded)
    }
}

/// In-memory categories and expenses plus the file they persist to
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    data: StoreData,
    audit: Option<AuditLogger>,
}

impl ExpenseStore {
    /// Create a store with the default categories and no expenses
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: StoreData::default(),
            audit: None,
        }
    }

    /// Load the store from `path`, falling back to defaults
    ///
    /// A missing, unparsable or invalid file never fails the load; the
    /// returned outcome says which case applied. An unusable file is copied
    /// aside before anything can overwrite it.
    pub fn load(path: PathBuf) -> (Self, LoadOutcome) {
        let read = read_json_optional::<StoreData, _>(&path)
            .and_then(|data| match data {
                Some(data) => data.validate().map(|_| Some(data)),
                None => Ok(None),
            });

        match read {
            Ok(Some(data)) => {
                tracing::debug!(
                    path = %path.display(),
                    categories = data.categories.len(),
                    expenses = data.expenses.len(),
                    "loaded expense store"
                );
                let store = Self {
                    path,
                    data,
                    audit: None,
                };
                (store, LoadOutcome::Loaded)
            }
            Ok(None) => {
                tracing::info!(path = %path.display(), "no data file found, starting fresh");
                (Self::new(path), LoadOutcome::Missing)
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::warn!(path = %path.display(), error = %reason, "data file unusable, starting fresh");

                let preserved = match preserve_corrupt(&path) {
                    Ok(backup) => Some(backup),
                    Err(err) => {
                        tracing::warn!(error = %err, "could not preserve unusable data file");
                        None
                    }
                };

                (Self::new(path), LoadOutcome::Corrupt { reason, preserved })
            }
        }
    }

    /// Attach an audit log that records every created record
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Write the full store to its data file, replacing the previous contents
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.data)?;
        tracing::debug!(
            path = %self.path.display(),
            expenses = self.data.expenses.len(),
            "saved expense store"
        );
        Ok(())
    }

    /// Category names in display order
    pub fn categories(&self) -> &[String] {
        &self.data.categories
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.data.expenses
    }

    /// Append a category and save; on a failed save the category is dropped
    pub(crate) fn insert_category(&mut self, name: String) -> ExpenseResult<()> {
        self.data.categories.push(name);
        if let Err(e) = self.save() {
            self.data.categories.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Append an expense and save; on a failed save the expense is dropped
    pub(crate) fn insert_expense(&mut self, expense: Expense) -> ExpenseResult<()> {
        self.data.expenses.push(expense);
        if let Err(e) = self.save() {
            self.data.expenses.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Record a created entity in the audit log, if one is attached
    ///
    /// The record is already saved when this runs, so failures are only logged.
    pub(crate) fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) {
        if let Some(logger) = &self.audit {
            let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
            if let Err(e) = logger.log(&entry) {
                tracing::warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

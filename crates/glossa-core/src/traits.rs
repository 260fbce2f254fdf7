//! Core traits for glossa abstractions.
//!
//! These traits define the narrow read interface the import pipeline uses to
//! query the persistent store, enabling pluggable backends and testability.
//! The pipeline never writes to the store; newly created entities are handed
//! back to the caller for persistence.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, Label};

/// Read-only store of label and category entities.
///
/// The reconciler issues at most one lookup per distinct unresolved value per
/// import call (its in-memory cache prevents repeats). Lookup failures map to
/// [`crate::Error::StoreLookup`] and are surfaced immediately, not retried.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// All labels currently known to the store.
    async fn find_all_labels(&self) -> Result<Vec<Label>>;

    /// All categories currently known to the store.
    async fn find_all_categories(&self) -> Result<Vec<Category>>;

    /// Point lookup of a label by exact value match.
    async fn find_label_by_value(&self, value: &str) -> Result<Option<Label>>;

    /// Point lookup of a category by exact value match.
    async fn find_category_by_value(&self, value: &str) -> Result<Option<Category>>;
}

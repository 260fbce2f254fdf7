//! In-memory tag store for deterministic testing.
//!
//! Provides a [`TagStore`] backed by plain vectors, for tests and for callers
//! that have no persistent store behind the pipeline.
//!
//! ## Usage
//!
//! ```rust
//! use glossa_core::memory::MemoryTagStore;
//! use glossa_core::{Label, TagStore};
//! use uuid::Uuid;
//!
//! #[tokio::test]
//! async fn test_with_memory_store() {
//!     let store = MemoryTagStore::new().with_labels(vec![Label::new("PER", Uuid::new_v4())]);
//!     assert!(store.find_label_by_value("PER").await.unwrap().is_some());
//! }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::{Category, Label};
use crate::traits::TagStore;

/// In-memory implementation of [`TagStore`].
#[derive(Clone, Default)]
pub struct MemoryTagStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    labels: Vec<Label>,
    categories: Vec<Category>,
    lookup_count: usize,
}

impl MemoryTagStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with labels.
    pub fn with_labels(self, labels: Vec<Label>) -> Self {
        self.lock().labels.extend(labels);
        self
    }

    /// Seed the store with categories.
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.lock().categories.extend(categories);
        self
    }

    /// Persist entities into the store, the way an external collaborator
    /// would after an import call returns.
    pub fn persist(&self, labels: Vec<Label>, categories: Vec<Category>) {
        let mut inner = self.lock();
        inner.labels.extend(labels);
        inner.categories.extend(categories);
    }

    /// Number of point lookups issued so far, for assertions on the
    /// one-lookup-per-distinct-value guarantee.
    pub fn lookup_count(&self) -> usize {
        self.lock().lookup_count
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock only happens after a panic elsewhere in a test.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl TagStore for MemoryTagStore {
    async fn find_all_labels(&self) -> Result<Vec<Label>> {
        Ok(self.lock().labels.clone())
    }

    async fn find_all_categories(&self) -> Result<Vec<Category>> {
        Ok(self.lock().categories.clone())
    }

    async fn find_label_by_value(&self, value: &str) -> Result<Option<Label>> {
        let mut inner = self.lock();
        inner.lookup_count += 1;
        Ok(inner.labels.iter().find(|l| l.value == value).cloned())
    }

    async fn find_category_by_value(&self, value: &str) -> Result<Option<Category>> {
        let mut inner = self.lock();
        inner.lookup_count += 1;
        Ok(inner.categories.iter().find(|c| c.value == value).cloned())
    }
}

/// A store whose every read fails, for exercising error propagation.
#[derive(Clone, Copy, Default)]
pub struct FailingTagStore;

#[async_trait]
impl TagStore for FailingTagStore {
    async fn find_all_labels(&self) -> Result<Vec<Label>> {
        Err(Error::StoreLookup("simulated read failure".to_string()))
    }

    async fn find_all_categories(&self) -> Result<Vec<Category>> {
        Err(Error::StoreLookup("simulated read failure".to_string()))
    }

    async fn find_label_by_value(&self, _value: &str) -> Result<Option<Label>> {
        Err(Error::StoreLookup("simulated read failure".to_string()))
    }

    async fn find_category_by_value(&self, _value: &str) -> Result<Option<Category>> {
        Err(Error::StoreLookup("simulated read failure".to_string()))
    }
}

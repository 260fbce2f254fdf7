//! Per-call entity reconciliation.
//!
//! Resolves label/category string values to stable entities. Resolution
//! order for a value `v`:
//!
//! 1. the in-memory cache, seeded from everything the store currently knows
//!    and grown by entities created earlier in the same call;
//! 2. a point lookup in the backing store by exact value match;
//! 3. construct a new entity, add it to the cache and to the "newly created"
//!    output list.
//!
//! This order guarantees at most one entity per distinct value is created
//! within a single import call. The cache is owned by the reconciler
//! instance, never process-wide state.

use glossa_core::{Category, Label, Project, Result, TagStore, User};

pub(crate) struct Reconciler<'a> {
    store: &'a dyn TagStore,
    labels: Vec<Label>,
    categories: Vec<Category>,
    new_labels: Vec<Label>,
    new_categories: Vec<Category>,
}

impl<'a> Reconciler<'a> {
    /// Seed the cache from the store's full label/category sets.
    pub async fn seed(store: &'a dyn TagStore) -> Result<Reconciler<'a>> {
        let labels = store.find_all_labels().await?;
        let categories = store.find_all_categories().await?;
        Ok(Self {
            store,
            labels,
            categories,
            new_labels: Vec::new(),
            new_categories: Vec::new(),
        })
    }

    /// Resolve a label value, creating the label if neither the cache nor
    /// the store knows it. Newly seen labels are appended to the project's
    /// label set exactly once, checked by id.
    pub async fn resolve_label(
        &mut self,
        value: &str,
        user: &User,
        project: &mut Project,
    ) -> Result<Label> {
        let label = match self.labels.iter().find(|l| l.value == value) {
            Some(cached) => cached.clone(),
            None => match self.store.find_label_by_value(value).await? {
                Some(stored) => stored,
                None => {
                    tracing::debug!(value, "creating label");
                    let created = Label::new(value, user.id);
                    self.new_labels.push(created.clone());
                    created
                }
            },
        };

        if !project.labels.iter().any(|l| l.id == label.id) {
            project.labels.push(label.clone());
        }

        self.labels.push(label.clone());
        Ok(label)
    }

    /// Resolve a category value, creating the category on a full miss.
    pub async fn resolve_category(&mut self, value: &str, user: &User) -> Result<Category> {
        let category = match self.categories.iter().find(|c| c.value == value) {
            Some(cached) => cached.clone(),
            None => match self.store.find_category_by_value(value).await? {
                Some(stored) => stored,
                None => {
                    tracing::debug!(value, "creating category");
                    let created = Category::new(value, user.id);
                    self.new_categories.push(created.clone());
                    created
                }
            },
        };

        self.categories.push(category.clone());
        Ok(category)
    }

    /// Hand back the entities created during this call, for the caller to
    /// persist.
    pub fn into_created(self) -> (Vec<Label>, Vec<Category>) {
        (self.new_labels, self.new_categories)
    }
}

//! Plain-text adapter.
//!
//! Splits raw text into line-level records with no label, category, or
//! translation payloads, then delegates to the JSONL importer.

use glossa_core::{Project, Result, TagStore, User};

use crate::jsonl::{import_article_by_jsonl, ImportResult};
use crate::record::{ArticleRecord, JsonlOptions, JsonlRecord};

/// Split raw text into sentence records, one per non-blank line.
pub fn plain_text_to_records(data: &str) -> Vec<JsonlRecord> {
    data.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| JsonlRecord::Record(ArticleRecord::text_only(line)))
        .collect()
}

/// Import raw plain text.
pub async fn import_article_by_plain_text(
    store: &dyn TagStore,
    user: &User,
    project: &mut Project,
    data: &str,
) -> Result<ImportResult> {
    let records = plain_text_to_records(data);
    import_article_by_jsonl(store, user, project, records, JsonlOptions::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::memory::MemoryTagStore;

    #[tokio::test]
    async fn test_hello_world_round_trip() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let result = import_article_by_plain_text(&store, &user, &mut project, "Hello world")
            .await
            .unwrap();

        let article = &result.article;
        assert_eq!(article.content, "Hello world");
        assert!(article.annotations.is_empty());
        assert!(article.categories.is_empty());
        assert!(article.translation.is_none());
        assert!(result.labels.is_empty());
        assert!(result.categories.is_empty());
    }

    #[tokio::test]
    async fn test_lines_join_with_single_space() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let data = "First line.\r\n\nSecond line.\n";
        let result = import_article_by_plain_text(&store, &user, &mut project, data)
            .await
            .unwrap();

        assert_eq!(result.article.content, "First line. Second line.");
    }

    #[tokio::test]
    async fn test_empty_text_yields_empty_article() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let result = import_article_by_plain_text(&store, &user, &mut project, "")
            .await
            .unwrap();
        assert_eq!(result.article.content, "");
    }
}

//! The canonical JSONL article importer.
//!
//! Every format adapter normalizes into the JSONL record shape and delegates
//! here. This module owns the stateful offset bookkeeping that turns
//! sentence-relative label spans into document-absolute annotations.

use glossa_core::{Annotation, Article, Category, Label, Project, Result, TagStore, Translation, User};

use crate::description::generate_article_description;
use crate::reconcile::Reconciler;
use crate::record::{JsonlOptions, JsonlRecord};

/// The article plus the entities newly created while building it, for the
/// caller to persist. The pipeline itself never writes to the store.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub article: Article,
    pub labels: Vec<Label>,
    pub categories: Vec<Category>,
}

/// Build an [`Article`] from ordered JSONL records.
///
/// Sentence fragments are joined with a single space, so a span at
/// `(start, end)` in record `index` lands at `start + cursor + index` in the
/// final content — the `+ index` term accounts for one inter-sentence space
/// per prior sentence. Offsets outside the record's own text are accepted
/// as-is; no bounds re-clamping.
pub async fn import_article_by_jsonl(
    store: &dyn TagStore,
    user: &User,
    project: &mut Project,
    records: Vec<JsonlRecord>,
    options: JsonlOptions,
) -> Result<ImportResult> {
    let mut article = Article::new(user.id, project.id);
    let mut reconciler = Reconciler::seed(store).await?;

    let record_count = records.len();
    let mut fragments: Vec<String> = Vec::with_capacity(record_count);
    let mut cursor = 0usize;

    for (index, record) in records.into_iter().enumerate() {
        let record = record.into_record()?;
        let sentence = match &options.formatter {
            Some(formatter) => formatter(&record.text),
            None => record.text,
        };
        tracing::trace!(index, len = sentence.chars().count(), "appending sentence");

        for (offset_start, offset_end, value) in &record.labels {
            let label = reconciler.resolve_label(value, user, project).await?;
            article.annotations.push(Annotation::new(
                offset_start + cursor + index,
                offset_end + cursor + index,
                label,
                article.id,
                user.id,
            ));
        }

        for value in &record.categories {
            let category = reconciler.resolve_category(value, user).await?;
            article.categories.push(category);
        }

        // Last translation wins; empty payloads are ignored.
        if let Some(translation) = &record.translation {
            if !translation.is_empty() {
                article.translation = Some(Translation::new(translation.clone(), user.id));
            }
        }

        cursor += sentence.chars().count();
        fragments.push(sentence);
    }

    article.content = fragments.join(" ");
    article.description = generate_article_description(&article);

    let (labels, categories) = reconciler.into_created();
    tracing::info!(
        article_id = %article.id,
        project_id = %project.id,
        record_count,
        annotation_count = article.annotations.len(),
        new_label_count = labels.len(),
        new_category_count = categories.len(),
        content_len = article.content.chars().count(),
        "imported article from jsonl records"
    );

    Ok(ImportResult {
        article,
        labels,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ArticleRecord;
    use glossa_core::memory::MemoryTagStore;
    use glossa_core::Error;

    fn record(text: &str, labels: &[(usize, usize, &str)]) -> JsonlRecord {
        JsonlRecord::Record(ArticleRecord {
            text: text.to_string(),
            labels: labels
                .iter()
                .map(|&(s, e, v)| (s, e, v.to_string()))
                .collect(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_two_sentence_offset_shift() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let records = vec![
            record("John lives", &[(0, 4, "PER")]),
            record("in Paris", &[(3, 8, "LOC")]),
        ];
        let result =
            import_article_by_jsonl(&store, &user, &mut project, records, JsonlOptions::default())
                .await
                .unwrap();

        let article = &result.article;
        assert_eq!(article.content, "John lives in Paris");
        assert_eq!(
            (article.annotations[0].offset_start, article.annotations[0].offset_end),
            (0, 4)
        );
        // 3 + 10 (cursor) + 1 (one inter-sentence space) = 14
        assert_eq!(
            (article.annotations[1].offset_start, article.annotations[1].offset_end),
            (14, 19)
        );
        assert_eq!(&article.content[14..19], "Paris");
    }

    #[tokio::test]
    async fn test_shared_label_value_creates_one_entity() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let records = vec![
            record("John lives", &[(0, 4, "PERSON")]),
            record("Mary sleeps", &[(0, 4, "PERSON")]),
        ];
        let result =
            import_article_by_jsonl(&store, &user, &mut project, records, JsonlOptions::default())
                .await
                .unwrap();

        assert_eq!(result.labels.len(), 1);
        assert_eq!(result.labels[0].value, "PERSON");
        assert_eq!(
            result.article.annotations[0].label.id,
            result.article.annotations[1].label.id
        );
    }

    #[tokio::test]
    async fn test_reimport_against_seeded_store_creates_nothing() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");
        let records = || {
            vec![
                record("John lives", &[(0, 4, "PER")]),
                record("in Paris", &[(3, 8, "LOC")]),
            ]
        };

        let first = import_article_by_jsonl(
            &store,
            &user,
            &mut project,
            records(),
            JsonlOptions::default(),
        )
        .await
        .unwrap();
        store.persist(first.labels.clone(), first.categories.clone());

        let second = import_article_by_jsonl(
            &store,
            &user,
            &mut project,
            records(),
            JsonlOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(second.article.content, first.article.content);
        let offsets = |a: &Article| {
            a.annotations
                .iter()
                .map(|x| (x.offset_start, x.offset_end))
                .collect::<Vec<_>>()
        };
        assert_eq!(offsets(&second.article), offsets(&first.article));
        assert!(second.labels.is_empty());
        assert!(second.categories.is_empty());
    }

    #[tokio::test]
    async fn test_categories_appended_per_occurrence() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let records = vec![
            JsonlRecord::Record(ArticleRecord {
                text: "one".to_string(),
                categories: vec!["news".to_string()],
                ..Default::default()
            }),
            JsonlRecord::Record(ArticleRecord {
                text: "two".to_string(),
                categories: vec!["news".to_string(), "sports".to_string()],
                ..Default::default()
            }),
        ];
        let result =
            import_article_by_jsonl(&store, &user, &mut project, records, JsonlOptions::default())
                .await
                .unwrap();

        // Article-level occurrences are not deduplicated...
        assert_eq!(result.article.categories.len(), 3);
        // ...but the entity behind repeated values is the same.
        assert_eq!(
            result.article.categories[0].id,
            result.article.categories[1].id
        );
        assert_eq!(result.categories.len(), 2);
    }

    #[tokio::test]
    async fn test_last_translation_wins() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let records = vec![
            JsonlRecord::Record(ArticleRecord {
                text: "eins".to_string(),
                translation: Some("one".to_string()),
                ..Default::default()
            }),
            JsonlRecord::Record(ArticleRecord {
                text: "zwei".to_string(),
                translation: Some("two".to_string()),
                ..Default::default()
            }),
            JsonlRecord::Record(ArticleRecord {
                text: "drei".to_string(),
                translation: Some(String::new()),
                ..Default::default()
            }),
        ];
        let result =
            import_article_by_jsonl(&store, &user, &mut project, records, JsonlOptions::default())
                .await
                .unwrap();

        // The empty third payload is ignored, so the second still wins.
        assert_eq!(result.article.translation.unwrap().content, "two");
    }

    #[tokio::test]
    async fn test_formatter_applies_before_offset_bookkeeping() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let records = vec![record("  padded  ", &[]), record("tail", &[(0, 4, "X")])];
        let options = JsonlOptions::with_formatter(|text| text.trim().to_string());
        let result = import_article_by_jsonl(&store, &user, &mut project, records, options)
            .await
            .unwrap();

        assert_eq!(result.article.content, "padded tail");
        // cursor advanced by the formatted length (6), not the raw length
        assert_eq!(result.article.annotations[0].offset_start, 7);
    }

    #[tokio::test]
    async fn test_raw_record_parse_failure_fails_whole_import() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let records = vec![
            record("fine", &[]),
            JsonlRecord::Raw("{\"text\": [1,2]}".to_string()),
        ];
        let err =
            import_article_by_jsonl(&store, &user, &mut project, records, JsonlOptions::default())
                .await
                .unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_span_is_preserved() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let records = vec![record("tiny", &[(0, 99, "X")])];
        let result =
            import_article_by_jsonl(&store, &user, &mut project, records, JsonlOptions::default())
                .await
                .unwrap();

        // No clamping against the record or the final content.
        assert_eq!(result.article.annotations[0].offset_end, 99);
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_article() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let result =
            import_article_by_jsonl(&store, &user, &mut project, vec![], JsonlOptions::default())
                .await
                .unwrap();

        assert_eq!(result.article.content, "");
        assert_eq!(result.article.description, "...");
        assert!(result.labels.is_empty());
    }
}

//! NER-CoNLL adapter: a preconfigured CoNLL import.
//!
//! The format is a comma-separated six-column table where `senIndex` restarts
//! at "1" on each new sentence and token text may carry `token_POS`-style
//! underscore joins that must be collapsed back to spaces.

use glossa_core::{Project, Result, TagStore, User};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::conll::{import_article_by_conll, ConllOptions, LineSeparator};
use crate::jsonl::ImportResult;

static UNDERSCORE_JOIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.+)_(.+)").expect("underscore join pattern is valid"));

/// Collapse underscore-joined text into space-joined text until no
/// underscore pattern remains.
///
/// This is a fixed-point rewrite: each pass replaces at least one underscore
/// with a space, so it terminates. `"New_York_City"` becomes
/// `"New York City"`.
pub fn collapse_underscores(text: &str) -> String {
    let mut text = text.to_string();
    while UNDERSCORE_JOIN.is_match(&text) {
        text = UNDERSCORE_JOIN
            .replace_all(&text, "$1 $2")
            .trim()
            .to_string();
    }
    text
}

/// Import a NER-CoNLL table.
///
/// Sentence boundary: the last row, or any row whose successor restarts the
/// sentence index at "1".
pub async fn import_article_by_ner(
    store: &dyn TagStore,
    user: &User,
    project: &mut Project,
    data: &str,
) -> Result<ImportResult> {
    let headers = ["senIndex", "text", "posTag", "label", "parent", "relation"]
        .iter()
        .map(|h| h.to_string())
        .collect();

    let line_separator: LineSeparator = Box::new(|_row, rows, index| {
        index == rows.len() - 1 || rows[index + 1].get("senIndex") == Some("1")
    });

    import_article_by_conll(
        store,
        user,
        project,
        data,
        ConllOptions {
            headers,
            separator: ',',
            line_separator: Some(line_separator),
            formatter: Some(Box::new(|text| collapse_underscores(text))),
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::memory::MemoryTagStore;

    #[test]
    fn test_collapse_underscores_fixed_point() {
        assert_eq!(collapse_underscores("New_York_City"), "New York City");
        assert_eq!(collapse_underscores("token_NN"), "token NN");
        assert_eq!(collapse_underscores("plain"), "plain");
        assert_eq!(collapse_underscores(""), "");
    }

    #[test]
    fn test_collapse_underscores_trims_each_pass() {
        assert_eq!(collapse_underscores(" spaced_out "), "spaced out");
    }

    #[tokio::test]
    async fn test_ner_import_splits_on_sentence_index_restart() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        // Two sentences: senIndex restarts at 1 on the third row.
        let data = "\
1,John,NNP,B-PER,2,subj
2,sleeps,VBZ,,0,root
1,Paris,NNP,B-LOC,2,subj
2,waits,VBZ,,0,root
";
        let result = import_article_by_ner(&store, &user, &mut project, data)
            .await
            .unwrap();

        let article = &result.article;
        assert_eq!(article.content, "John sleeps Paris waits");
        assert_eq!(article.annotations.len(), 2);
        // "Paris" starts after "John sleeps" (11 chars) plus one joining space.
        assert_eq!(article.annotations[1].offset_start, 12);
        assert_eq!(article.annotations[1].offset_end, 17);
        assert_eq!(&article.content[12..17], "Paris");
    }

    #[tokio::test]
    async fn test_ner_import_applies_underscore_formatter() {
        let store = MemoryTagStore::new();
        let user = User::new("alice");
        let mut project = Project::new("p");

        let data = "1,New_York_City,NNP,B-LOC,0,root\n";
        let result = import_article_by_ner(&store, &user, &mut project, data)
            .await
            .unwrap();

        assert_eq!(result.article.content, "New York City");
    }
}

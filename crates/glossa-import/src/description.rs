//! Bounded, annotation-highlighted article previews.

use glossa_core::Article;

/// Maximum preview length in characters, before highlight markup and the
/// ellipsis suffix.
const LIMIT_CHARACTER: usize = 250;

/// Generate a preview of the article's content with contained annotations
/// wrapped in highlight spans.
///
/// Annotations fully inside the 250-char prefix are spliced in descending
/// `offset_end` order: splicing changes the string length at positions at or
/// after the current span, but later spans in that order lie strictly to the
/// left, so their positions stay valid. Annotations that start before the
/// limit but end after it are dropped, not truncated.
pub fn generate_article_description(article: &Article) -> String {
    let mut annotations: Vec<_> = article
        .annotations
        .iter()
        .filter(|a| a.offset_end <= LIMIT_CHARACTER)
        .collect();
    annotations.sort_by(|a, b| b.offset_end.cmp(&a.offset_end));

    let mut desc: String = article.content.chars().take(LIMIT_CHARACTER).collect();

    for annotation in annotations {
        let start = byte_index(&desc, annotation.offset_start);
        let end = byte_index(&desc, annotation.offset_end);
        if start > end {
            continue;
        }
        let wrapped = format!(
            "<span class=\"has-concept concept-{}\">{}</span>",
            annotation.label.value,
            &desc[start..end]
        );
        desc.replace_range(start..end, &wrapped);
    }

    desc.push_str("...");
    desc
}

/// Byte position of the `n`th character, clamped to the end of the string.
/// Clamping mirrors how a lenient substring would treat offsets pointing
/// past the prefix; the annotation's stored offsets are never altered.
fn byte_index(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

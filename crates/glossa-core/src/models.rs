//! Core data models for glossa.
//!
//! These types are shared across all glossa crates and represent the
//! canonical annotated-document entity graph produced by an import.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// ARTICLE
// =============================================================================

/// The canonical annotated document produced by one import call.
///
/// `content` is the full concatenated text (sentence fragments joined with a
/// single space). Annotations address `content` by character offsets. The
/// article is mutated only during the import that built it; persistence is an
/// external collaborator's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub description: String,
    pub annotations: Vec<Annotation>,
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Translation>,
    /// User who imported the article.
    pub user: Uuid,
    /// Most recent curator; set to the importing user at creation.
    pub last_curator: Uuid,
    pub project: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Create an empty article owned by `user`/`project`.
    ///
    /// The title is generated from the article id: `Article #XXXXX` where
    /// `XXXXX` is the last five hex digits of the id, uppercased.
    pub fn new(user: Uuid, project: Uuid) -> Self {
        let id = Uuid::new_v4();
        let simple = id.simple().to_string();
        let title = format!("Article #{}", simple[simple.len() - 5..].to_uppercase());

        Self {
            id,
            title,
            content: String::new(),
            description: String::new(),
            annotations: Vec::new(),
            categories: Vec::new(),
            translation: None,
            user,
            last_curator: user,
            project,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// ANNOTATION
// =============================================================================

/// A labeled character span within an article's content.
///
/// `offset_start`/`offset_end` form a half-open character (not byte) range.
/// Adapters supply offsets relative to a single sentence; the importer shifts
/// them into document-absolute coordinates. Offsets are stored as computed,
/// never clamped — downstream consumers rely on raw offsets for debugging
/// malformed input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub id: Uuid,
    pub offset_start: usize,
    pub offset_end: usize,
    pub label: Label,
    pub article: Uuid,
    pub user: Uuid,
}

impl Annotation {
    pub fn new(offset_start: usize, offset_end: usize, label: Label, article: Uuid, user: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            offset_start,
            offset_end,
            label,
            article,
            user,
        }
    }
}

// =============================================================================
// LABEL / CATEGORY
// =============================================================================

/// A named, deduplicated tag entity attached to annotations.
///
/// Identity is by `value` for reconciliation: two labels with the same value
/// must resolve to the same entity (same `id`) within one import and across
/// the project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub id: Uuid,
    /// Stable identifier, e.g. a tag name like "PER".
    pub value: String,
    /// Display name. New labels use the value verbatim.
    pub name: String,
    /// Hex color, generated for new labels.
    pub color: String,
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Label {
    /// Construct a fresh label for a value with a generated color.
    pub fn new(value: impl Into<String>, creator: Uuid) -> Self {
        let value = value.into();
        Self {
            id: Uuid::new_v4(),
            name: value.clone(),
            value,
            color: random_hex_color(),
            creator,
            created_at: Utc::now(),
        }
    }
}

/// A named, deduplicated tag entity attached to articles.
/// Identity rule mirrors [`Label`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub value: String,
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(value: impl Into<String>, creator: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
            creator,
            created_at: Utc::now(),
        }
    }
}

/// Generate a random `#rrggbb` color for a new label.
pub fn random_hex_color() -> String {
    let mut rng = rand::thread_rng();
    format!("#{:06x}", rng.gen_range(0..0x1000000u32))
}

// =============================================================================
// TRANSLATION
// =============================================================================

/// A translation of an article's content. At most one per article;
/// the last one seen during import wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub content: String,
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Translation {
    pub fn new(content: impl Into<String>, creator: Uuid) -> Self {
        Self {
            content: content.into(),
            creator,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// PROJECT / USER
// =============================================================================

/// A project owning a label set. The reconciler appends newly created labels
/// to `labels` exactly once, checked by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub labels: Vec<Label>,
    pub categories: Vec<Category>,
}

impl Project {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            labels: Vec::new(),
            categories: Vec::new(),
        }
    }
}

/// The user on whose behalf an import runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

//! The JSONL intermediate record shape and import options.
//!
//! Every format adapter normalizes its input into [`ArticleRecord`]s before
//! delegating to the JSONL importer, which is the single canonical core of
//! the pipeline.

use glossa_core::Result;
use serde::{Deserialize, Serialize};

/// Rewrites a record's raw text before it is appended to the document
/// (e.g. normalizing tokenizer artifacts).
pub type Formatter = Box<dyn Fn(&str) -> String + Send + Sync>;

/// One sentence-level record in the canonical intermediate shape.
///
/// Label spans are `(offset_start, offset_end, value)` tuples with half-open
/// character offsets relative to this record's own text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub text: String,
    #[serde(default)]
    pub labels: Vec<(usize, usize, String)>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl ArticleRecord {
    /// A record carrying only text, no spans or tags.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// One input record: either already structured or a JSON-encoded line.
#[derive(Debug, Clone)]
pub enum JsonlRecord {
    /// A raw JSON line, decoded lazily by the importer.
    Raw(String),
    /// An already structured record.
    Record(ArticleRecord),
}

impl JsonlRecord {
    /// Decode into the structured shape.
    ///
    /// A raw line that does not parse into a record with a string `text`
    /// field is a caller error ([`glossa_core::Error::InvalidRecord`]).
    pub fn into_record(self) -> Result<ArticleRecord> {
        match self {
            JsonlRecord::Raw(line) => Ok(serde_json::from_str(&line)?),
            JsonlRecord::Record(record) => Ok(record),
        }
    }
}

impl From<ArticleRecord> for JsonlRecord {
    fn from(record: ArticleRecord) -> Self {
        JsonlRecord::Record(record)
    }
}

impl From<String> for JsonlRecord {
    fn from(line: String) -> Self {
        JsonlRecord::Raw(line)
    }
}

impl From<&str> for JsonlRecord {
    fn from(line: &str) -> Self {
        JsonlRecord::Raw(line.to_string())
    }
}

/// Options for the JSONL importer.
#[derive(Default)]
pub struct JsonlOptions {
    /// Applied to each record's raw text before offset bookkeeping.
    pub formatter: Option<Formatter>,
}

impl JsonlOptions {
    pub fn with_formatter(formatter: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            formatter: Some(Box::new(formatter)),
        }
    }
}

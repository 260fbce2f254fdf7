//! # glossa-import
//!
//! Format adapters and the canonical JSONL article importer.
//!
//! Five entry points, one per supported format, each returning the built
//! [`Article`](glossa_core::Article) plus the labels and categories newly
//! created while building it:
//!
//! - [`import_article_by_jsonl`] — the canonical core
//! - [`import_article_by_conll`] — delimited token columns
//! - [`import_article_by_ner`] — the NER-CoNLL variant
//! - [`import_article_by_ml_data`] — generic ML-data tables
//! - [`import_article_by_plain_text`] — raw text
//!
//! The CoNLL, NER, and ML-data adapters all normalize into the JSONL record
//! shape and delegate to the JSONL importer; errors propagate unchanged
//! through that chain.

pub mod conll;
pub mod description;
pub mod jsonl;
pub mod mldata;
pub mod ner;
pub mod plaintext;
pub mod record;

mod reconcile;

pub use conll::{import_article_by_conll, ConllOptions, ConllRow, LineSeparator};
pub use description::generate_article_description;
pub use jsonl::{import_article_by_jsonl, ImportResult};
pub use mldata::{import_article_by_ml_data, MlDataRow};
pub use ner::{collapse_underscores, import_article_by_ner};
pub use plaintext::import_article_by_plain_text;
pub use record::{ArticleRecord, Formatter, JsonlOptions, JsonlRecord};

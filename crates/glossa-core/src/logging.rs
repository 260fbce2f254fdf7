//! Structured logging schema and field name constants for glossa.
//!
//! All crates use these names for consistent structured logging fields, so
//! log aggregation tools can query by standardized field names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Recoverable issue, input accepted with caveats |
//! | INFO  | Operation completions (one event per import call) |
//! | DEBUG | Decision points, intermediate counts, adapter choices |
//! | TRACE | Per-record iteration, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "core", "import"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "import_jsonl", "import_conll", "resolve_label"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Article UUID being built.
pub const ARTICLE_ID: &str = "article_id";

/// Project UUID the import targets.
pub const PROJECT_ID: &str = "project_id";

/// Tag value being resolved (label or category).
pub const TAG_VALUE: &str = "value";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of input records consumed by an import.
pub const RECORD_COUNT: &str = "record_count";

/// Number of annotations attached to the article.
pub const ANNOTATION_COUNT: &str = "annotation_count";

/// Number of newly created labels returned to the caller.
pub const NEW_LABEL_COUNT: &str = "new_label_count";

/// Number of newly created categories returned to the caller.
pub const NEW_CATEGORY_COUNT: &str = "new_category_count";

/// Character length of the finished article content.
pub const CONTENT_LEN: &str = "content_len";

//! ML-data adapter: a generic table-shaped JSON payload.
//!
//! The payload is a JSON array of `{text, label?}` rows. It is rewritten as
//! tab-separated CoNLL lines and delegated to the CoNLL adapter with default
//! settings.

use glossa_core::{Project, Result, TagStore, User};
use serde::{Deserialize, Serialize};

use crate::conll::{import_article_by_conll, ConllOptions};
use crate::jsonl::ImportResult;

/// One row of the ML-data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlDataRow {
    pub text: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Rewrite the ML-data payload as CoNLL lines.
pub fn mldata_to_conll(data: &str) -> Result<String> {
    let rows: Vec<MlDataRow> = serde_json::from_str(data)?;
    tracing::debug!(rows = rows.len(), "converted ml-data table to conll rows");

    Ok(rows
        .into_iter()
        .map(|row| format!("{}\t{}\n", row.text, row.label.unwrap_or_default()))
        .collect())
}

/// Import an ML-data table by converting it to CoNLL rows first.
pub async fn import_article_by_ml_data(
    store: &dyn TagStore,
    user: &User,
    project: &mut Project,
    data: &str,
) -> Result<ImportResult> {
    let conll = mldata_to_conll(data)?;
    import_article_by_conll(store, user, project, &conll, ConllOptions::default()).await
}

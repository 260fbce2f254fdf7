//! CoNLL-style tabular adapter and the sentence row grouper.
//!
//! The input has no header line: the caller supplies the column names and
//! every line is data. Rows are grouped into sentences by a caller-supplied
//! boundary predicate, then each sentence becomes one JSONL record whose
//! label spans are computed from token positions.

use std::collections::HashMap;

use glossa_core::{Error, Project, Result, TagStore, User};

use crate::jsonl::{import_article_by_jsonl, ImportResult};
use crate::record::{ArticleRecord, Formatter, JsonlOptions, JsonlRecord};

/// Column names of the text and label fields in the header list.
const TEXT_COLUMN: &str = "text";
const LABEL_COLUMN: &str = "label";

/// Returns true when the row at `index` is the last row of its sentence.
pub type LineSeparator = Box<dyn Fn(&ConllRow, &[ConllRow], usize) -> bool + Send + Sync>;

/// One parsed table row, keyed by the caller-supplied header names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConllRow {
    fields: HashMap<String, String>,
}

impl ConllRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    fn text(&self) -> &str {
        self.get(TEXT_COLUMN).unwrap_or_default()
    }

    fn label(&self) -> &str {
        self.get(LABEL_COLUMN).unwrap_or_default()
    }
}

/// Options for the CoNLL adapter. Defaults: `text`/`label` columns,
/// tab-separated, never split (one giant sentence), no formatter.
pub struct ConllOptions {
    pub headers: Vec<String>,
    pub separator: char,
    pub line_separator: Option<LineSeparator>,
    pub formatter: Option<Formatter>,
}

impl Default for ConllOptions {
    fn default() -> Self {
        Self {
            headers: vec![TEXT_COLUMN.to_string(), LABEL_COLUMN.to_string()],
            separator: '\t',
            line_separator: None,
            formatter: None,
        }
    }
}

/// Parse delimited lines into rows. Blank lines are skipped; a line whose
/// field count differs from the header count is a malformed table.
pub fn parse_rows(data: &str, headers: &[String], separator: char) -> Result<Vec<ConllRow>> {
    let mut rows = Vec::new();

    for (line_number, line) in data.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(separator).collect();
        if fields.len() != headers.len() {
            return Err(Error::MalformedTable(format!(
                "line {}: expected {} fields, got {}",
                line_number + 1,
                headers.len(),
                fields.len()
            )));
        }

        rows.push(ConllRow {
            fields: headers
                .iter()
                .zip(fields)
                .map(|(h, f)| (h.clone(), f.to_string()))
                .collect(),
        });
    }

    Ok(rows)
}

/// Group a flat row stream into sentences. The predicate returns true when
/// the row at `index` ends its sentence; `None` never splits. Any trailing
/// rows form the final sentence.
pub fn group_rows(rows: Vec<ConllRow>, line_separator: Option<&LineSeparator>) -> Vec<Vec<ConllRow>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for index in 0..rows.len() {
        let is_boundary = line_separator
            .map(|f| f(&rows[index], &rows, index))
            .unwrap_or(false);
        current.push(rows[index].clone());
        if is_boundary {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

/// Convert grouped rows into the JSONL intermediate shape.
///
/// Within a sentence, token texts are joined by a single space and each row
/// with a non-empty label column yields a span covering its token, in
/// sentence-relative character offsets.
pub fn records_from_groups(groups: Vec<Vec<ConllRow>>) -> Vec<JsonlRecord> {
    groups
        .into_iter()
        .map(|group| {
            let mut record = ArticleRecord::default();
            let mut offset = 0usize;

            for (position, row) in group.iter().enumerate() {
                if position > 0 {
                    offset += 1; // intra-sentence space
                }
                let token_len = row.text().chars().count();
                let label = row.label();
                if !label.is_empty() {
                    record
                        .labels
                        .push((offset, offset + token_len, label.to_string()));
                }
                offset += token_len;
            }

            record.text = group
                .iter()
                .map(|row| row.text().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            JsonlRecord::Record(record)
        })
        .collect()
}

/// Import a CoNLL-style table: parse, group, normalize to the JSONL shape,
/// then delegate to the JSONL importer. Errors propagate unchanged.
pub async fn import_article_by_conll(
    store: &dyn TagStore,
    user: &User,
    project: &mut Project,
    data: &str,
    options: ConllOptions,
) -> Result<ImportResult> {
    let rows = parse_rows(data, &options.headers, options.separator)?;
    tracing::debug!(
        rows = rows.len(),
        columns = options.headers.len(),
        "parsed conll table"
    );

    let groups = group_rows(rows, options.line_separator.as_ref());
    let records = records_from_groups(groups);

    import_article_by_jsonl(
        store,
        user,
        project,
        records,
        JsonlOptions {
            formatter: options.formatter,
        },
    )
    .await
}

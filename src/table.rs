use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::{collections::BTreeMap, path::Path};
use tracing::debug;

/// One prompt table: label → value, from a single CSV file.
pub type PromptTable = BTreeMap<String, String>;

/// Parse `path` as a table with header columns `label` and `value`.
///
/// Extra columns are ignored. A label duplicated within the file keeps
/// the last occurrence's value. A missing `label`/`value` header or a
/// record that cannot be parsed is a hard error naming the file.
pub fn read_prompt_table<P: AsRef<Path>>(path: P) -> Result<PromptTable> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file {:?}", path))?;

    let headers = rdr
        .headers()
        .with_context(|| format!("Failed to read header row of {:?}", path))?;
    let label_idx = headers
        .iter()
        .position(|h| h == "label")
        .ok_or_else(|| anyhow!("{:?} has no `label` column (headers: {:?})", path, headers))?;
    let value_idx = headers
        .iter()
        .position(|h| h == "value")
        .ok_or_else(|| anyhow!("{:?} has no `value` column (headers: {:?})", path, headers))?;

    let mut table = PromptTable::new();
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {:?} at record {}", path, idx))?;
        let label = record
            .get(label_idx)
            .ok_or_else(|| anyhow!("Record {} of {:?} has no label field", idx, path))?;
        let value = record
            .get(value_idx)
            .ok_or_else(|| anyhow!("Record {} of {:?} has no value field", idx, path))?;
        table.insert(label.to_string(), value.to_string());
    }

    debug!(path = %path.display(), rows = table.len(), "read prompt table");
    Ok(table)
}

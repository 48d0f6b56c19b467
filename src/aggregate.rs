use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs::File, io::BufWriter, path::Path};
use tracing::{debug, warn};

use crate::{
    scan::{find_csv_files, prompt_type},
    table::{read_prompt_table, PromptTable},
};

/// The full two-level mapping written out as `prompts.json`:
/// prompt type → (label → value).
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aggregate(pub BTreeMap<String, PromptTable>);

impl Aggregate {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build the aggregate for every `*.csv` under `root`.
///
/// Files sharing a base name at different depths collapse to a single
/// entry; the file seen last in traversal order wins. Traversal order
/// is filesystem-dependent, so the winner is not a guaranteed policy.
pub fn build<P: AsRef<Path>>(root: P) -> Result<Aggregate> {
    let root = root.as_ref();
    let files = find_csv_files(root)?;
    debug!(root = %root.display(), files = files.len(), "scanned for prompt CSVs");

    let mut aggregate = Aggregate::default();
    for path in files {
        let Some(ptype) = prompt_type(&path) else {
            continue;
        };
        let table = read_prompt_table(&path)?;
        if aggregate.0.insert(ptype.clone(), table).is_some() {
            warn!(prompt_type = %ptype, path = %path.display(), "duplicate prompt type, keeping later file");
        }
    }
    Ok(aggregate)
}

/// Serialize `aggregate` as two-space-indented JSON at `path`.
///
/// The output file is only created here, after the whole aggregate was
/// built, so a failed build leaves no output file behind.
pub fn write<P: AsRef<Path>>(aggregate: &Aggregate, path: P) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("Failed to create output file {:?}", path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), aggregate)
        .with_context(|| format!("Failed to write JSON to {:?}", path))?;
    Ok(())
}

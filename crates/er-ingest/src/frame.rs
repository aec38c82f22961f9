//! Encounter frame construction.
//!
//! The loaded table is represented as a Polars DataFrame with canonical
//! column names. Cells stay as raw strings so the decode pass can report
//! exactly what a malformed value looked like.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::columns::{CANONICAL_COLUMNS, ColumnMap};
use crate::csv_table::CsvTable;

/// The raw encounter table with source provenance.
#[derive(Debug, Clone)]
pub struct EncounterFrame {
    pub data: DataFrame,
    pub source_file: PathBuf,
}

impl EncounterFrame {
    /// Returns the number of data rows in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Read a CSV file straight into an [`EncounterFrame`].
///
/// Resolves source headers against the canonical columns and fails when a
/// required column is missing.
pub fn load_encounter_frame(path: &Path) -> Result<EncounterFrame> {
    let table = crate::csv_table::read_csv_table(path)?;
    let column_map = crate::columns::resolve_columns(&table.headers)
        .with_context(|| format!("resolve columns: {}", path.display()))?;
    build_encounter_frame(&table, &column_map, path)
}

/// Build an [`EncounterFrame`] from a raw CSV table and resolved columns.
///
/// Source columns are reordered and renamed to the canonical set; source
/// columns with no canonical counterpart are dropped.
pub fn build_encounter_frame(
    table: &CsvTable,
    column_map: &ColumnMap,
    source_file: &Path,
) -> Result<EncounterFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(CANONICAL_COLUMNS.len());
    for canonical in CANONICAL_COLUMNS {
        let source_index = column_map.index_of(canonical);
        let mut values: Vec<String> = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            values.push(row.get(source_index).cloned().unwrap_or_default());
        }
        columns.push(Series::new(canonical.into(), values).into());
    }
    let data = DataFrame::new(columns).context("build encounter dataframe")?;
    Ok(EncounterFrame {
        data,
        source_file: source_file.to_path_buf(),
    })
}

// Tabular datasets: CSV loading, column-wise enrichment and export.
//
// A Dataset is a polars DataFrame bounded to a row cap at load time. Rows
// keep the order of the source file. Derived columns are appended row-aligned
// by index; nothing is ever reordered, merged or deduplicated.

pub mod loader;

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::info;

use crate::error::{Result, TextbenchError};

pub use loader::load_csv;

/// An ordered, row-capped table of records.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
}

impl Dataset {
    pub fn from_frame(df: DataFrame) -> Self {
        Self { df }
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Cell values of a column as text, `None` for nulls, in row order.
    ///
    /// Numeric columns are rendered the way polars casts them to strings.
    pub fn text_column(&self, name: &str) -> Result<Vec<Option<String>>> {
        let series = self
            .df
            .column(name)
            .and_then(|col| col.as_materialized_series().cast(&DataType::String))
            .map_err(|e| column_error(name, e))?;

        let values = series
            .str()
            .map_err(|e| column_error(name, e))?
            .into_iter()
            .map(|cell| cell.map(str::to_string))
            .collect();

        Ok(values)
    }

    /// Numeric values of a column, `None` for nulls or non-numeric cells.
    pub fn score_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let series = self
            .df
            .column(name)
            .and_then(|col| col.as_materialized_series().cast(&DataType::Float64))
            .map_err(|e| column_error(name, e))?;

        let values = series
            .f64()
            .map_err(|e| column_error(name, e))?
            .into_iter()
            .collect();

        Ok(values)
    }

    /// Append a text column. `values` must have one entry per row.
    pub fn append_text_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        self.check_len(name, values.len())?;
        self.append(Series::new(name.into(), values))
    }

    /// Append a numeric column. `values` must have one entry per row.
    pub fn append_score_column(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        self.check_len(name, values.len())?;
        self.append(Series::new(name.into(), values))
    }

    /// Write the whole table, header included, to a CSV file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)
            .map_err(|e| TextbenchError::Export(format!("{}: {e}", path.display())))?;

        let mut df = self.df.clone();
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .map_err(|e| TextbenchError::Export(format!("{}: {e}", path.display())))?;

        info!(path = %path.display(), rows = df.height(), "Wrote CSV");
        Ok(())
    }

    fn check_len(&self, name: &str, len: usize) -> Result<()> {
        if len != self.df.height() {
            return Err(column_error(
                name,
                format!("{len} values for {} rows", self.df.height()),
            ));
        }
        Ok(())
    }

    fn append(&mut self, series: Series) -> Result<()> {
        let name = series.name().to_string();
        self.df
            .with_column(series)
            .map_err(|e| column_error(&name, e))?;
        Ok(())
    }
}

fn column_error(name: &str, reason: impl ToString) -> TextbenchError {
    TextbenchError::Column {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

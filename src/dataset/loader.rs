// CSV loader: read the whole file, keep the first N rows, check columns.

use std::path::Path;

use polars::prelude::*;
use tracing::info;

use super::Dataset;
use crate::error::{Result, TextbenchError};

/// Load a CSV and truncate it to its first `cap` rows.
///
/// Returns exactly `min(rows in file, cap)` records in file order. Fails with
/// `DataUnavailable` when the file is missing or unparsable, or when any of
/// `required_columns` is absent. No retry.
pub fn load_csv(path: &Path, required_columns: &[&str], cap: usize) -> Result<Dataset> {
    if !path.is_file() {
        return Err(TextbenchError::data_unavailable(path, "file not found"));
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(10000))
        .finish()
        .and_then(|lf| lf.collect())
        .map_err(|e| TextbenchError::data_unavailable(path, e))?;

    let missing: Vec<&str> = required_columns
        .iter()
        .copied()
        .filter(|name| df.column(name).is_err())
        .collect();

    if !missing.is_empty() {
        return Err(TextbenchError::data_unavailable(
            path,
            format!("missing required column(s): {}", missing.join(", ")),
        ));
    }

    let total = df.height();
    let df = df.head(Some(cap));

    info!(
        path = %path.display(),
        total_rows = total,
        kept_rows = df.height(),
        "Loaded dataset"
    );

    Ok(Dataset::from_frame(df))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_truncates_to_cap_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "news.csv",
            "descr,tags\none,politics\ntwo,sport\nthree,tech\nfour,health\n",
        );

        let ds = load_csv(&path, &["descr", "tags"], 2).unwrap();
        assert_eq!(ds.height(), 2);
        let descr = ds.text_column("descr").unwrap();
        assert_eq!(descr, vec![Some("one".to_string()), Some("two".to_string())]);
    }

    #[test]
    fn test_cap_larger_than_file_returns_all() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "news.csv", "descr,tags\none,politics\ntwo,sport\n");
        let ds = load_csv(&path, &["descr", "tags"], 100).unwrap();
        assert_eq!(ds.height(), 2);
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let err = load_csv(Path::new("/nonexistent/news.csv"), &["descr"], 10).unwrap_err();
        assert!(matches!(err, TextbenchError::DataUnavailable { .. }));
    }

    #[test]
    fn test_missing_column_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "news.csv", "descr,category\none,politics\n");
        let err = load_csv(&path, &["descr", "tags"], 10).unwrap_err();
        match err {
            TextbenchError::DataUnavailable { reason, .. } => assert!(reason.contains("tags")),
            other => panic!("unexpected error: {other}"),
        }
    }
}

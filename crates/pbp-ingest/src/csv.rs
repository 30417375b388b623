//! CSV reading and writing with polars.

use std::fs::{self, File};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read a play-by-play export with a single header row.
///
/// Types are inferred over the whole file: roster slots are empty for most
/// rows and a short sample would type them as text.
pub fn read_events_csv(path: &Path) -> Result<DataFrame> {
    let parse_error = |e: PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read events"
    );
    Ok(df)
}

/// Write `df` with a header row, creating parent directories as needed.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(path = %path.display(), rows = df.height(), "wrote table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_is_a_parse_error() {
        let err = read_events_csv(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, IngestError::CsvParse { .. }));
    }

    #[test]
    fn empty_fields_read_as_null() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Event,Home_Goalie\nSHOT,ANDERSEN\nGOAL,\n").unwrap();
        let df = read_events_csv(file.path()).unwrap();
        assert_eq!(df.column("Home_Goalie").unwrap().null_count(), 1);
    }
}

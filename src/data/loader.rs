//! Sheet Loader Module
//! Fetches the published CSV export and parses it into a DataFrame using Polars.

use polars::prelude::*;
use std::io::Cursor;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("source unavailable: {0}")]
    Http(#[from] reqwest::Error),
    #[error("source unavailable, malformed CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("source unavailable, empty response")]
    EmptySource,
}

/// One-shot CSV source loader.
///
/// `fetch` performs the blocking HTTP GET; `read` parses bytes so the parse
/// path can be exercised without a network. Column names are trimmed
/// unconditionally right after parse, before anything else looks at them.
pub struct DataLoader;

impl DataLoader {
    /// Fetch the CSV resource and parse it.
    pub fn fetch(url: &str) -> Result<DataFrame, LoaderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let body = client.get(url).send()?.error_for_status()?.bytes()?;
        info!(bytes = body.len(), "fetched source sheet");
        Self::read(body.to_vec())
    }

    /// Parse CSV bytes into a DataFrame with trimmed column names.
    pub fn read(bytes: Vec<u8>) -> Result<DataFrame, LoaderError> {
        if bytes.is_empty() {
            return Err(LoaderError::EmptySource);
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        if df.height() == 0 {
            return Err(LoaderError::EmptySource);
        }

        let df = Self::trim_column_names(df)?;
        info!(rows = df.height(), columns = df.width(), "parsed source sheet");
        Ok(df)
    }

    /// Strip leading/trailing whitespace from every column name.
    fn trim_column_names(mut df: DataFrame) -> Result<DataFrame, LoaderError> {
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for name in names {
            let trimmed = name.trim();
            if trimmed != name {
                df.rename(&name, trimmed.into())?;
            }
        }

        Ok(df)
    }
}

//! Sheet Loader
//!
//! Fetches one published spreadsheet tab as CSV and parses it into a
//! [`Table`]. Single GET per load, no retry, transport-default timeouts.
//! A non-2xx response is fatal to the load and propagates as
//! [`SheetError::Fetch`].

use csv::ReaderBuilder;
use reqwest::Url;
use tracing::debug;

use crate::error::{SheetError, SheetResult};
use crate::types::{Column, ColumnValue, Table};

/// Loads spreadsheet tabs over their public CSV export URL
#[derive(Debug, Clone)]
pub struct SheetLoader {
    client: reqwest::Client,
    base_url: String,
}

impl Default for SheetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: "https://docs.google.com".to_string(),
        }
    }

    /// Point the loader at a different export host (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build the CSV export URL for a sheet tab
    pub fn export_url(&self, sheet_id: &str, tab_name: &str) -> SheetResult<Url> {
        let endpoint = format!("{}/spreadsheets/d/{}/export", self.base_url, sheet_id);
        let url = Url::parse_with_params(&endpoint, &[("format", "csv"), ("sheet", tab_name)])
            .map_err(|e| SheetError::InvalidUrl(e.to_string()))?;
        Ok(url)
    }

    /// Fetch a tab and parse it into a table.
    ///
    /// The first CSV record supplies column names. Columns where every
    /// field parses as a number become `Number`; everything else stays
    /// `Text` (date coercion is a separate pass, see [`crate::normalize`]).
    pub async fn load(&self, sheet_id: &str, tab_name: &str) -> SheetResult<Table> {
        let url = self.export_url(sheet_id, tab_name)?;
        debug!(%url, "fetching sheet export");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Fetch {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_csv(&body)
    }
}

/// Parse CSV text into a table, inferring Number vs Text per column.
pub fn parse_csv(text: &str) -> SheetResult<Table> {
    let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    if headers.is_empty() {
        return Err(SheetError::EmptySheet);
    }

    let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (i, field) in record.iter().enumerate() {
            if i < raw_columns.len() {
                raw_columns[i].push(field.to_string());
            }
        }
    }

    let mut table = Table::new();
    for (name, raw) in headers.into_iter().zip(raw_columns) {
        table.add_column(Column::new(name, infer_column(raw)));
    }
    Ok(table)
}

/// A column is numeric only when every field parses as f64.
fn infer_column(raw: Vec<String>) -> ColumnValue {
    let all_numeric =
        !raw.is_empty() && raw.iter().all(|field| field.trim().parse::<f64>().is_ok());
    if all_numeric {
        ColumnValue::Number(
            raw.iter()
                .map(|field| field.trim().parse::<f64>().unwrap_or(f64::NAN))
                .collect(),
        )
    } else {
        ColumnValue::Text(raw)
    }
}

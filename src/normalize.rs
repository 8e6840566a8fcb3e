//! Type Normalizer
//!
//! Pure pass that reinterprets text columns as dates under the fixed
//! `%d/%m/%Y` pattern. Numeric and already-date columns are never touched,
//! which makes the pass idempotent. Column order and names are preserved.

use chrono::NaiveDate;

use crate::types::{Column, ColumnValue, Table};

/// Fixed date pattern: two-digit day, two-digit month, four-digit year
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Coerce eligible text columns to dates.
///
/// A text column converts to `Date` when at least one of its values
/// matches the pattern; matching values convert, the rest become missing
/// markers. A column with zero matches stays text.
pub fn normalize(table: &Table) -> Table {
    let mut out = Table::new();
    for column in &table.columns {
        let values = match &column.values {
            ColumnValue::Text(texts) => coerce_dates(texts)
                .unwrap_or_else(|| ColumnValue::Text(texts.clone())),
            other => other.clone(),
        };
        out.add_column(Column::new(column.name.clone(), values));
    }
    out
}

/// Try to reinterpret a text column as dates; `None` means no value
/// matched and the column should keep its original text.
fn coerce_dates(texts: &[String]) -> Option<ColumnValue> {
    let parsed: Vec<Option<NaiveDate>> = texts
        .iter()
        .map(|value| NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok())
        .collect();

    if parsed.iter().any(Option::is_some) {
        Some(ColumnValue::Date(parsed))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn text_column(name: &str, values: &[&str]) -> Column {
        Column::new(
            name,
            ColumnValue::Text(values.iter().map(|s| s.to_string()).collect()),
        )
    }

    #[test]
    fn test_all_values_convert() {
        let mut table = Table::new();
        table.add_column(text_column("Date", &["01/02/2023", "15/03/2023"]));

        let normalized = normalize(&table);
        assert_eq!(
            normalized.column("Date").unwrap().values,
            ColumnValue::Date(vec![Some(date(2023, 2, 1)), Some(date(2023, 3, 15))])
        );
    }

    #[test]
    fn test_partial_match_marks_missing() {
        let mut table = Table::new();
        table.add_column(text_column("Date", &["01/02/2023", "not a date"]));

        let normalized = normalize(&table);
        assert_eq!(
            normalized.column("Date").unwrap().values,
            ColumnValue::Date(vec![Some(date(2023, 2, 1)), None])
        );
    }

    #[test]
    fn test_no_match_leaves_text() {
        let mut table = Table::new();
        table.add_column(text_column("Category", &["A", "B", "C"]));

        let normalized = normalize(&table);
        assert_eq!(
            normalized.column("Category").unwrap().values,
            ColumnValue::Text(vec!["A".into(), "B".into(), "C".into()])
        );
    }

    #[test]
    fn test_numeric_columns_untouched() {
        let mut table = Table::new();
        table.add_column(Column::new("n", ColumnValue::Number(vec![1.0, 2.0])));

        let normalized = normalize(&table);
        assert_eq!(
            normalized.column("n").unwrap().values,
            ColumnValue::Number(vec![1.0, 2.0])
        );
    }

    #[test]
    fn test_idempotence() {
        let mut table = Table::new();
        table.add_column(text_column("Date", &["01/02/2023", "oops"]));
        table.add_column(text_column("Category", &["A", "B"]));
        table.add_column(Column::new("n", ColumnValue::Number(vec![1.0, 2.0])));

        let once = normalize(&table);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_column_order_and_names_preserved() {
        let mut table = Table::new();
        table.add_column(text_column("z", &["01/02/2023"]));
        table.add_column(text_column("a", &["hello"]));

        let normalized = normalize(&table);
        assert_eq!(normalized.column_names(), vec!["z", "a"]);
    }

    #[test]
    fn test_rejects_non_conforming_patterns() {
        // ISO dates and year-first strings do not match %d/%m/%Y
        let mut table = Table::new();
        table.add_column(text_column("d", &["2023-02-01", "2023/03/15"]));

        let normalized = normalize(&table);
        assert_eq!(normalized.column("d").unwrap().values.type_name(), "Text");
    }
}

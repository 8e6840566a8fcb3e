use chrono::NaiveDate;

/// Column value types (homogeneous arrays)
///
/// A `None` entry in a `Date` array marks a value that did not conform to
/// the expected date pattern during normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// Array of numbers (f64)
    Number(Vec<f64>),
    /// Array of text strings
    Text(Vec<String>),
    /// Array of calendar dates, with explicit missing markers
    Date(Vec<Option<NaiveDate>>),
}

impl ColumnValue {
    /// Get the length of the array
    pub fn len(&self) -> usize {
        match self {
            ColumnValue::Number(v) => v.len(),
            ColumnValue::Text(v) => v.len(),
            ColumnValue::Date(v) => v.len(),
        }
    }

    /// Check if array is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnValue::Number(_) => "Number",
            ColumnValue::Text(_) => "Text",
            ColumnValue::Date(_) => "Date",
        }
    }
}

/// A named column of a table
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: ColumnValue,
}

impl Column {
    pub fn new(name: impl Into<String>, values: ColumnValue) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A table of column arrays.
///
/// Columns keep the order the CSV header gave them; normalization and
/// chart construction rely on that order being stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in table order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Get the number of rows (length of first column, all should be same)
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |col| col.len())
    }

    /// Validate all columns have the same length
    pub fn validate_lengths(&self) -> Result<(), String> {
        let row_count = self.row_count();
        for column in &self.columns {
            if column.len() != row_count {
                return Err(format!(
                    "Column '{}' has {} rows, expected {} rows",
                    column.name,
                    column.len(),
                    row_count
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_preserved() {
        let mut table = Table::new();
        table.add_column(Column::new("b", ColumnValue::Number(vec![1.0])));
        table.add_column(Column::new("a", ColumnValue::Number(vec![2.0])));
        assert_eq!(table.column_names(), vec!["b", "a"]);
    }

    #[test]
    fn test_column_lookup() {
        let mut table = Table::new();
        table.add_column(Column::new("x", ColumnValue::Text(vec!["v".into()])));
        assert!(table.column("x").is_some());
        assert!(table.column("y").is_none());
    }

    #[test]
    fn test_row_count_empty() {
        assert_eq!(Table::new().row_count(), 0);
    }

    #[test]
    fn test_validate_lengths_mismatch() {
        let mut table = Table::new();
        table.add_column(Column::new("a", ColumnValue::Number(vec![1.0, 2.0])));
        table.add_column(Column::new("b", ColumnValue::Number(vec![1.0])));
        assert!(table.validate_lengths().is_err());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ColumnValue::Number(vec![]).type_name(), "Number");
        assert_eq!(ColumnValue::Text(vec![]).type_name(), "Text");
        assert_eq!(ColumnValue::Date(vec![]).type_name(), "Date");
    }
}

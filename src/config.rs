//! Compiled-in dashboard configuration.
//!
//! The sheet identifier and tab name are deliberately not CLI flags or
//! environment variables; they are baked into the build and only the
//! server bind address is tunable at runtime.

/// Published spreadsheet the dashboard renders
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Spreadsheet document identifier (the `d/<id>` path segment)
    pub sheet_id: String,
    /// Tab name within the spreadsheet
    pub tab_name: String,
    /// Export host; overridable so tests can point at a local server
    pub base_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sheet_id: "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms".to_string(),
            tab_name: "Sheet1".to_string(),
            base_url: "https://docs.google.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.tab_name, "Sheet1");
        assert_eq!(config.base_url, "https://docs.google.com");
        assert!(!config.sheet_id.is_empty());
    }
}

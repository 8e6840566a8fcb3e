//! Dashboard session state and the reactive update contract.
//!
//! The reactive dependency graph of the dashboard (table → selector
//! choices, (table, x, y) → chart) is flattened into explicit
//! re-render-on-change: every state mutation goes through a method here,
//! and the chart is recomputed from scratch whenever it is asked for.
//! State is per-session context, not process-wide globals.

use tracing::info;

use crate::chart::{build_chart, ChartDescription};
use crate::config::DashboardConfig;
use crate::error::{SheetError, SheetResult};
use crate::loader::SheetLoader;
use crate::normalize::normalize;
use crate::types::Table;

/// Per-session dashboard state: one cached table and one (x, y) selection.
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    table: Option<Table>,
    x_name: Option<String>,
    y_name: Option<String>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            table: None,
            x_name: None,
            y_name: None,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Fetch and normalize the sheet, replacing the cached table.
    ///
    /// Returns the fresh column-name list (the choices republished to both
    /// selectors). Any selected name missing from the new column set is
    /// cleared so the selection never dangles.
    pub async fn refresh(&mut self, loader: &SheetLoader) -> SheetResult<Vec<String>> {
        let raw = loader
            .load(&self.config.sheet_id, &self.config.tab_name)
            .await?;
        let table = normalize(&raw);
        info!(
            columns = table.columns.len(),
            rows = table.row_count(),
            "sheet refreshed"
        );

        self.table = Some(table);
        self.reconcile_selection();
        Ok(self.column_choices())
    }

    /// Install an already-normalized table (used by tests to drive the
    /// reactive contract without a network).
    pub fn set_table(&mut self, table: Table) -> Vec<String> {
        self.table = Some(table);
        self.reconcile_selection();
        self.column_choices()
    }

    fn reconcile_selection(&mut self) {
        let names = self.column_choices();
        if let Some(x) = &self.x_name {
            if !names.contains(x) {
                self.x_name = None;
            }
        }
        if let Some(y) = &self.y_name {
            if !names.contains(y) {
                self.y_name = None;
            }
        }
    }

    /// Column names of the current table; empty before the first load.
    pub fn column_choices(&self) -> Vec<String> {
        self.table
            .as_ref()
            .map(Table::column_names)
            .unwrap_or_default()
    }

    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// Select the X column; `None` clears it. Names must exist in the
    /// current table.
    pub fn set_x(&mut self, name: Option<String>) -> SheetResult<()> {
        self.x_name = self.validated(name)?;
        Ok(())
    }

    /// Select the Y column; `None` clears it.
    pub fn set_y(&mut self, name: Option<String>) -> SheetResult<()> {
        self.y_name = self.validated(name)?;
        Ok(())
    }

    fn validated(&self, name: Option<String>) -> SheetResult<Option<String>> {
        match name {
            Some(n) if n.is_empty() => Ok(None),
            Some(n) => {
                let known = self
                    .table
                    .as_ref()
                    .is_some_and(|t| t.column(&n).is_some());
                if known {
                    Ok(Some(n))
                } else {
                    Err(SheetError::UnknownColumn(n))
                }
            }
            None => Ok(None),
        }
    }

    pub fn selection(&self) -> (Option<&str>, Option<&str>) {
        (self.x_name.as_deref(), self.y_name.as_deref())
    }

    /// Recompute the chart from current state. `None` without a table or
    /// with an incomplete selection; side-effect-free and stable for the
    /// same (table, x, y) triple.
    pub fn chart(&self) -> Option<ChartDescription> {
        let table = self.table.as_ref()?;
        let x = self.x_name.as_deref()?;
        let y = self.y_name.as_deref()?;
        build_chart(table, x, y)
    }
}

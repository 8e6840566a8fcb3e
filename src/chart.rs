//! Chart Description construction
//!
//! Builds the declarative scatter+line figure for a (table, x, y)
//! selection. The description is an ephemeral value recomputed wholesale
//! on every input change; it serializes to a Plotly-compatible
//! `{data, layout}` object and to embeddable HTML markup that pulls the
//! rendering engine from the plotly.js CDN.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::DATE_FORMAT;
use crate::types::{ColumnValue, Table};

/// Fixed overall chart height in pixels
pub const CHART_HEIGHT: u32 = 600;

/// Client-side rendering engine reference embedded in [`ChartDescription::to_html`]
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarkerLine {
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub size: u32,
    pub opacity: f64,
    pub line: MarkerLine,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineStyle {
    pub color: String,
}

/// One rendered trace (markers or connecting line)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    pub x: Vec<Value>,
    pub y: Vec<Value>,
    pub mode: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RangeSlider {
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct XAxis {
    pub title: String,
    /// Plotly axis type: "date" when the X column was normalized to dates,
    /// "linear" otherwise
    #[serde(rename = "type")]
    pub axis_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    pub rangeslider: RangeSlider,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YAxis {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: String,
    pub xaxis: XAxis,
    pub yaxis: YAxis,
    pub height: u32,
}

/// Derived, declarative description of what to draw
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartDescription {
    pub data: Vec<Series>,
    pub layout: Layout,
}

impl ChartDescription {
    /// Plotly figure object: `{"data": [...], "layout": {...}}`
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Embeddable markup: chart div plus the CDN engine reference and the
    /// render call, the shape a templating layer can drop into a page.
    pub fn to_html(&self, div_id: &str) -> String {
        let figure = self.to_json();
        format!(
            "<div id=\"{div_id}\"></div>\n\
             <script src=\"{PLOTLY_CDN_URL}\"></script>\n\
             <script>\n\
             var figure = {figure};\n\
             Plotly.newPlot(\"{div_id}\", figure.data, figure.layout);\n\
             </script>"
        )
    }
}

/// Build the chart for a selection, or `None` when either selector is
/// empty or names a column absent from the table (normal no-op state).
pub fn build_chart(table: &Table, x_name: &str, y_name: &str) -> Option<ChartDescription> {
    if x_name.is_empty() || y_name.is_empty() {
        return None;
    }
    let x_col = table.column(x_name)?;
    let y_col = table.column(y_name)?;

    let x_values = column_to_json(&x_col.values);
    let y_values = column_to_json(&y_col.values);
    let x_is_date = matches!(x_col.values, ColumnValue::Date(_));

    let scatter = Series {
        x: x_values.clone(),
        y: y_values.clone(),
        mode: "markers".to_string(),
        name: format!("{y_name} vs {x_name}"),
        marker: Some(Marker {
            size: 10,
            opacity: 0.7,
            line: MarkerLine {
                width: 0.5,
                color: "DarkSlateGrey".to_string(),
            },
        }),
        line: None,
    };

    let line = Series {
        x: x_values,
        y: y_values,
        mode: "lines".to_string(),
        name: format!("{y_name} Line"),
        marker: None,
        line: Some(LineStyle {
            color: "blue".to_string(),
        }),
    };

    let layout = Layout {
        title: format!("{y_name} vs {x_name} - Scatter and Line Plot"),
        xaxis: XAxis {
            title: x_name.to_string(),
            axis_type: if x_is_date { "date" } else { "linear" }.to_string(),
            tickformat: x_is_date.then(|| DATE_FORMAT.to_string()),
            rangeslider: RangeSlider { visible: true },
        },
        yaxis: YAxis {
            title: y_name.to_string(),
        },
        height: CHART_HEIGHT,
    };

    Some(ChartDescription {
        data: vec![scatter, line],
        layout,
    })
}

/// Column values as JSON; dates render as ISO `YYYY-MM-DD` strings (the
/// form a date axis consumes), missing markers as null.
fn column_to_json(values: &ColumnValue) -> Vec<Value> {
    match values {
        ColumnValue::Number(nums) => nums.iter().map(|n| Value::from(*n)).collect(),
        ColumnValue::Text(texts) => texts.iter().map(|t| Value::from(t.clone())).collect(),
        ColumnValue::Date(dates) => dates
            .iter()
            .map(|d| match d {
                Some(date) => Value::from(date.format("%Y-%m-%d").to_string()),
                None => Value::Null,
            })
            .collect(),
    }
}

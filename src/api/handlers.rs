//! Dashboard request handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::server::AppState;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub sheet_loaded: bool,
}

/// Version info response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub tab_name: String,
}

/// Column choices for both selectors
#[derive(Serialize, Default)]
pub struct ColumnsResponse {
    pub columns: Vec<String>,
}

/// Chart figure for the current selection; `figure` is absent when the
/// selection is incomplete (normal no-op state, not an error)
#[derive(Serialize, Default)]
pub struct ChartResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure: Option<Value>,
}

#[derive(Deserialize)]
pub struct ChartQuery {
    #[serde(default)]
    pub x: String,
    #[serde(default)]
    pub y: String,
}

/// GET / - dashboard page
pub async fn dashboard_page() -> impl IntoResponse {
    Html(DASHBOARD_PAGE)
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let dash = state.dashboard.lock().await;
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        sheet_loaded: dash.has_table(),
    }))
}

/// GET /version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let dash = state.dashboard.lock().await;
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        tab_name: dash.config().tab_name.clone(),
    }))
}

/// POST /api/v1/refresh - re-fetch the sheet, republish selector choices
pub async fn refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut dash = state.dashboard.lock().await;
    match dash.refresh(&state.loader).await {
        Ok(columns) => Json(ApiResponse::ok(ColumnsResponse { columns })),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// GET /api/v1/columns - current choices, loading the sheet on first call
pub async fn columns(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut dash = state.dashboard.lock().await;
    if !dash.has_table() {
        if let Err(e) = dash.refresh(&state.loader).await {
            return Json(ApiResponse::err(e.to_string()));
        }
    }
    Json(ApiResponse::ok(ColumnsResponse {
        columns: dash.column_choices(),
    }))
}

/// GET /api/v1/chart?x=..&y=.. - select columns and recompute the figure
pub async fn chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> impl IntoResponse {
    let mut dash = state.dashboard.lock().await;
    if !dash.has_table() {
        if let Err(e) = dash.refresh(&state.loader).await {
            return Json(ApiResponse::err(e.to_string()));
        }
    }

    let x = (!query.x.is_empty()).then(|| query.x.clone());
    let y = (!query.y.is_empty()).then(|| query.y.clone());
    if let Err(e) = dash.set_x(x) {
        return Json(ApiResponse::err(e.to_string()));
    }
    if let Err(e) = dash.set_y(y) {
        return Json(ApiResponse::err(e.to_string()));
    }

    Json(ApiResponse::ok(ChartResponse {
        figure: dash.chart().map(|c| c.to_json()),
    }))
}

/// Dashboard markup: two selectors and a chart region, wired to the JSON
/// endpoints. The chart renders client-side with plotly.js.
const DASHBOARD_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Sheet Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
<style>
  body { font-family: sans-serif; margin: 2rem; }
  label { display: block; margin-top: 1rem; }
  select { min-width: 16rem; }
</style>
</head>
<body>
<h2>Data from Google Sheet</h2>
<label for="x_column">Select X-axis column</label>
<select id="x_column"></select>
<label for="y_column">Select Y-axis column</label>
<select id="y_column"></select>
<div id="data_plot" style="margin-top: 2rem;"></div>
<script>
async function populateChoices() {
  const res = await fetch('/api/v1/columns');
  const body = await res.json();
  if (!body.success) return;
  for (const id of ['x_column', 'y_column']) {
    const select = document.getElementById(id);
    select.innerHTML = '<option value=""></option>';
    for (const name of body.data.columns) {
      const option = document.createElement('option');
      option.value = name;
      option.textContent = name;
      select.appendChild(option);
    }
  }
}

async function redraw() {
  const x = document.getElementById('x_column').value;
  const y = document.getElementById('y_column').value;
  const res = await fetch(`/api/v1/chart?x=${encodeURIComponent(x)}&y=${encodeURIComponent(y)}`);
  const body = await res.json();
  const plot = document.getElementById('data_plot');
  if (body.success && body.data.figure) {
    Plotly.newPlot(plot, body.data.figure.data, body.data.figure.layout);
  } else {
    Plotly.purge(plot);
  }
}

document.getElementById('x_column').addEventListener('change', redraw);
document.getElementById('y_column').addEventListener('change', redraw);
populateChoices();
</script>
</body>
</html>
"#;

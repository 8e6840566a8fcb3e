//! HTTP surface tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use sheetboard::api::server::{build_router, ApiConfig, AppState};
use sheetboard::config::DashboardConfig;

fn app() -> axum::Router {
    build_router(Arc::new(AppState::new(DashboardConfig::default())))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_api_config_default() {
    let config = ApiConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
}

#[tokio::test]
async fn test_dashboard_page_served() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("x_column"));
    assert!(page.contains("y_column"));
    assert!(page.contains("data_plot"));
}

#[tokio::test]
async fn test_health_reports_unloaded_session() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["sheet_loaded"], false);
    assert_eq!(body["request_id"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_columns_endpoint_uses_configured_base_url() {
    // The loader the server fetches with must come from the dashboard
    // config, not a hard-coded export host.
    use axum::routing::get;

    let sheet = axum::Router::new().route(
        "/spreadsheets/d/abc/export",
        get(|| async { "Date,Revenue\n01/02/2023,100\n" }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, sheet).await.unwrap();
    });

    let config = DashboardConfig {
        sheet_id: "abc".to_string(),
        base_url: format!("http://{addr}"),
        ..DashboardConfig::default()
    };
    let app = build_router(Arc::new(AppState::new(config)));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/columns")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["columns"],
        serde_json::json!(["Date", "Revenue"])
    );
}

#[tokio::test]
async fn test_version_endpoint() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["data"]["tab_name"], "Sheet1");
}

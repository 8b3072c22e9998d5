//! HTTP endpoints
//!
//! Thin transport over the tool registry: list tools, call a tool, report
//! health. Business and validation failures both come back as structured
//! JSON, never as panics or opaque 500s.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use courtvoice_tools::ToolExecutor;

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/tools", get(list_tools))
        .route("/api/tools/:name", post(call_tool))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if state.config.server.cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}

/// List registered tools with their schemas
async fn list_tools(State(state): State<AppState>) -> Json<serde_json::Value> {
    let tools = state.tools.schemas();
    Json(serde_json::json!({
        "tools": tools,
        "count": tools.len(),
    }))
}

/// Tool call request body
#[derive(Debug, Deserialize)]
struct ToolCallRequest {
    #[serde(default)]
    arguments: serde_json::Value,
}

/// Call a tool by name
async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<ToolCallRequest>,
) -> Json<serde_json::Value> {
    match state.tools.execute(&name, request.arguments).await {
        Ok(output) => Json(serde_json::json!({
            "result": output.payload,
            "isError": output.is_error,
        })),
        Err(error) => {
            tracing::warn!(tool = %name, %error, "tool call rejected");
            Json(serde_json::json!({
                "error": {
                    "code": i32::from(error.code),
                    "message": error.message,
                },
            }))
        }
    }
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.tools.is_empty() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "status": "no tools registered" })),
        );
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ready",
            "tools": state.tools.len(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtvoice_config::Settings;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(Settings::default()))
    }

    #[test]
    fn test_router_creation() {
        let _ = app();
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn tool_call_round_trips_through_http() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/tools/ping")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"arguments": {"message": "hello"}}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["result"]["success"], true);
        assert!(json["result"]["message"].as_str().unwrap().contains("alive"));
    }

    #[tokio::test]
    async fn unknown_tool_returns_structured_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/tools/nope")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"arguments": {}}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], -32601);
    }
}

//! HTTP transport implementation.
//!
//! Serves the REST product routes and, on the same listener, JSON-RPC tool
//! calls over POST so agents can reach the same operations.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::server::INSTRUCTIONS;
use crate::domains::products::endpoints;

const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    /// Internal error.
    pub fn internal_error(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, &self.config)?;

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Products: GET|POST /products, GET|PUT|DELETE /products/{{id}}");
        info!("  → Tools:    POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Assemble the REST routes, the tool endpoint and the health check.
///
/// Fails when the configured tool endpoint path cannot be mounted.
pub fn build_router(server: McpServer, config: &HttpConfig) -> TransportResult<Router> {
    config.validate()?;
    let products = server.products().clone();

    let mut app = Router::new()
        .route(&config.rpc_path, post(handle_rpc))
        .route("/health", get(health_check))
        .with_state(server)
        .merge(endpoints::router(products))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    Ok(app)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method = tracing::field::Empty))]
async fn handle_rpc(
    State(server): State<McpServer>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&server, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
async fn process_request(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(server, request),
        "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),
        "tools/list" => handle_tools_list(server, request),
        "tools/call" => handle_tools_call(server, request).await,

        // Stateless over HTTP: acknowledge and move on
        method if method.starts_with("notifications/") => {
            info!("Received notification: {}", method);
            JsonRpcResponse::success(request.id, serde_json::json!(null))
        }

        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

/// Handle initialize request.
fn handle_initialize(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    let result = serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": server.name(),
            "version": server.version()
        },
        "instructions": INSTRUCTIONS
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/list request.
fn handle_tools_list(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");

    let result = serde_json::json!({
        "tools": server.list_tools()
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/call request.
async fn handle_tools_call(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let params = match request.params {
        Some(p) => p,
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing params"),
    };

    let name = match params.get("name").and_then(|v| v.as_str()) {
        Some(n) => n.to_string(),
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing tool name"),
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    match server.call_tool(&name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) if e.is_client_error() => JsonRpcResponse::invalid_params(request.id, e.to_string()),
        Err(e) => JsonRpcResponse::internal_error(request.id, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Config, Database};
    use crate::domains::products::{ProductService, SqlProductRepository};
    use std::sync::Arc;
    use http::{Method, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        let server = McpServer::new(Config::default(), ProductService::in_memory());
        build_router(server, &HttpConfig::default()).unwrap()
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                axum::body::Body::from(json.to_string())
            }
            None => axum::body::Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn pen() -> serde_json::Value {
        serde_json::json!({ "name": "Pen", "description": "Blue ink", "price": 1.5, "quantity": 100 })
    }

    #[tokio::test]
    async fn test_greeting() {
        let (status, body) = send(&app(), Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!("Hello Guys, Me here!!"));
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let app = app();

        let (status, listed) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, serde_json::json!([]));

        let (status, created) = send(&app, Method::POST, "/products", Some(pen())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            created,
            serde_json::json!({
                "id": 1, "name": "Pen", "description": "Blue ink", "price": 1.5, "quantity": 100
            })
        );

        let (_, fetched) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(fetched, created);

        let replacement = serde_json::json!({
            "name": "Pencil", "description": "HB", "price": 0.5, "quantity": 12
        });
        let (status, updated) =
            send(&app, Method::PUT, "/products/1", Some(replacement)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], 1);
        assert_eq!(updated["name"], "Pencil");

        let (status, deleted) = send(&app, Method::DELETE, "/products/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted, serde_json::json!("ID-'1' has been Deleted!"));

        let (_, again) = send(&app, Method::DELETE, "/products/1", None).await;
        assert_eq!(again, serde_json::json!("No Product Found"));

        let (_, gone) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(gone["id"], 0);
        assert_eq!(gone["name"], "");
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let (status, body) = send(&app(), Method::PUT, "/products/77", Some(pen())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!("No Product Found"));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_rejected() {
        let app = app();
        let bad = serde_json::json!({ "name": "Pen", "description": "x", "price": "cheap", "quantity": 1 });
        let (status, _) = send(&app, Method::POST, "/products", Some(bad)).await;
        assert!(status.is_client_error());

        let (status, _) = send(&app, Method::GET, "/products/abc", None).await;
        assert!(status.is_client_error());

        let (_, listed) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(listed, serde_json::json!([]));
    }

    #[test]
    fn test_build_router_rejects_colliding_tool_path() {
        for path in ["/products", "mcp"] {
            let server = McpServer::new(Config::default(), ProductService::in_memory());
            let config = HttpConfig {
                rpc_path: path.to_string(),
                ..Default::default()
            };
            let result = build_router(server, &config);
            assert!(
                matches!(result, Err(TransportError::InitError(_))),
                "{path:?} should not be mountable"
            );
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_server_error_with_detail() {
        let database = Database::in_memory().await.unwrap();
        database.close().await;
        let service = ProductService::new(Arc::new(SqlProductRepository::new(database)));
        let server = McpServer::new(Config::default(), service);
        let app = build_router(server, &HttpConfig::default()).unwrap();

        let (status, body) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));

        let (status, body) = send(&app, Method::POST, "/products", Some(pen())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.get("detail").is_some());
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_rpc_tools_list() {
        let request = serde_json::json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" });
        let (status, body) = send(&app(), Method::POST, "/mcp", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_rpc_tool_call_shares_store_with_rest() {
        let app = app();
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": { "name": "create_products", "arguments": pen() }
        });
        let (_, body) = send(&app, Method::POST, "/mcp", Some(request)).await;
        assert_eq!(body["id"], 7);
        assert_eq!(body["result"]["structuredContent"]["id"], 1);

        let (_, fetched) = send(&app, Method::GET, "/products/1", None).await;
        assert_eq!(fetched["name"], "Pen");
    }

    #[tokio::test]
    async fn test_rpc_errors() {
        let app = app();

        let unknown_tool = serde_json::json!({
            "jsonrpc": "2.0", "id": 1, "method": "tools/call",
            "params": { "name": "drop_table", "arguments": {} }
        });
        let (_, body) = send(&app, Method::POST, "/mcp", Some(unknown_tool)).await;
        assert_eq!(body["error"]["code"], -32602);

        let bad_version = serde_json::json!({ "jsonrpc": "1.0", "id": 2, "method": "tools/list" });
        let (_, body) = send(&app, Method::POST, "/mcp", Some(bad_version)).await;
        assert_eq!(body["error"]["code"], -32600);

        let unknown_method = serde_json::json!({ "jsonrpc": "2.0", "id": 3, "method": "prompts/list" });
        let (_, body) = send(&app, Method::POST, "/mcp", Some(unknown_method)).await;
        assert_eq!(body["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/products")
            .header("origin", "https://example.com")
            .body(axum::body::Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}

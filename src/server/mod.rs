//! HTTP 服务器模块
//!
//! 通过 REST API 暴露图的增删和算法接口。图本身是单线程结构，
//! 这里用一把读写锁包住：修改走写锁，查询和算法走读锁。

use crate::algorithm::PathResult;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::import::GraphImporter;
use crate::types::Weight;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 共享的图
pub type SharedGraph = Arc<RwLock<Graph<String>>>;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub graph: SharedGraph,
}

/// 构建路由
pub fn build_router(graph: SharedGraph) -> Router {
    let state = AppState { graph };

    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        .route("/stats", get(stats_handler))
        // 导入
        .route("/graph/import", post(import_graph))
        // 顶点操作
        .route("/vertices", post(add_vertex))
        .route("/vertices/:label", get(get_vertex).delete(remove_vertex))
        // 边操作
        .route("/edges", post(add_edge))
        .route("/edges/:start/:finish", axum::routing::delete(remove_edge))
        // 图算法
        .route("/algorithm/shortest-path", post(shortest_path))
        .route("/algorithm/dfs/:start", get(depth_first))
        .route("/algorithm/bfs/:start", get(breadth_first))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 启动服务器
pub async fn start_server(config: ServerConfig, graph: SharedGraph) -> Result<()> {
    let app = build_router(graph);

    let addr = config.addr();
    info!("PathGraph 服务器启动于 http://{}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::ServerError(format!("绑定地址失败: {}", e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::ServerError(format!("服务器错误: {}", e)))?;

    Ok(())
}

// ==================== 处理器 ====================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    let graph = state.graph.read();
    Json(ApiResponse::success(GraphStats {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
    }))
}

/// 以请求体中的文本替换整张图
async fn import_graph(State(state): State<AppState>, body: String) -> Response {
    match GraphImporter::new().import_str::<String>(&body) {
        Ok((graph, stats)) => {
            *state.graph.write() = graph;
            (StatusCode::OK, Json(ApiResponse::success(stats))).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// 添加顶点请求
#[derive(Debug, Deserialize)]
pub struct VertexRequest {
    pub label: String,
}

async fn add_vertex(State(state): State<AppState>, Json(req): Json<VertexRequest>) -> Response {
    let result = state.graph.write().add_vertex(req.label.clone());
    match result {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success(req.label))).into_response(),
        Err(e) => error_response(&e),
    }
}

/// 顶点详情
#[derive(Debug, Serialize)]
pub struct VertexView {
    pub label: String,
    pub outgoing: Vec<Edge<String>>,
    pub incoming: Vec<Edge<String>>,
}

async fn get_vertex(State(state): State<AppState>, Path(label): Path<String>) -> Response {
    let graph = state.graph.read();
    if !graph.contains_vertex(&label) {
        return error_response(&Error::vertex_not_found(&label));
    }
    let view = VertexView {
        outgoing: graph.outgoing_edges(&label).into_iter().cloned().collect(),
        incoming: graph.incoming_edges(&label).into_iter().cloned().collect(),
        label,
    };
    (StatusCode::OK, Json(ApiResponse::success(view))).into_response()
}

async fn remove_vertex(State(state): State<AppState>, Path(label): Path<String>) -> Response {
    let result = state.graph.write().remove_vertex(&label);
    match result {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success(label))).into_response(),
        Err(e) => error_response(&e),
    }
}

/// 添加边请求
#[derive(Debug, Deserialize)]
pub struct EdgeRequest {
    pub start: String,
    pub finish: String,
    pub weight: Weight,
}

async fn add_edge(State(state): State<AppState>, Json(req): Json<EdgeRequest>) -> Response {
    let result = state.graph.write().add_edge(req.start, req.finish, req.weight);
    match result {
        Ok(id) => (StatusCode::OK, Json(ApiResponse::success(id))).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn remove_edge(
    State(state): State<AppState>,
    Path((start, finish)): Path<(String, String)>,
) -> impl IntoResponse {
    let removed = state.graph.write().remove_edge(&start, &finish);
    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({ "removed": removed }))),
    )
}

/// 最短路径请求
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub start: String,
    pub finish: String,
}

/// 最短路径响应：`vertices` 给出 `distances` 的顶点顺序
#[derive(Debug, Serialize, Deserialize)]
pub struct PathResponse {
    pub vertices: Vec<String>,
    pub distances: Vec<i64>,
    pub path: Vec<String>,
}

impl PathResponse {
    fn new(vertices: Vec<String>, result: PathResult<String>) -> Self {
        let (distances, path) = result.into_parts();
        Self {
            vertices,
            distances,
            path,
        }
    }
}

async fn shortest_path(State(state): State<AppState>, Json(req): Json<PathRequest>) -> Response {
    let graph = state.graph.read();
    let vertices: Vec<String> = graph.vertices().cloned().collect();
    let result = graph.shortest_path(&req.start, &req.finish);
    (
        StatusCode::OK,
        Json(ApiResponse::success(PathResponse::new(vertices, result))),
    )
        .into_response()
}

async fn depth_first(State(state): State<AppState>, Path(start): Path<String>) -> Response {
    traversal(&state, &start, Graph::<String>::depth_first_order)
}

async fn breadth_first(State(state): State<AppState>, Path(start): Path<String>) -> Response {
    traversal(&state, &start, Graph::<String>::breadth_first_order)
}

fn traversal(
    state: &AppState,
    start: &String,
    order: fn(&Graph<String>, &String) -> Vec<String>,
) -> Response {
    let graph = state.graph.read();
    if !graph.contains_vertex(start) {
        return error_response(&Error::vertex_not_found(start));
    }
    (StatusCode::OK, Json(ApiResponse::success(order(&*graph, start)))).into_response()
}

fn error_response(e: &Error) -> Response {
    let status = match e {
        Error::DuplicateVertex(_) => StatusCode::CONFLICT,
        Error::VertexNotFound(_) => StatusCode::NOT_FOUND,
        Error::ImportError { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::<()>::error(&e.to_string()))).into_response()
}

/// 图统计信息
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// API 响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    fn shared(graph: Graph<String>) -> SharedGraph {
        Arc::new(RwLock::new(graph))
    }

    fn canonical() -> SharedGraph {
        let text = "0,1,2,3,4\n0,1,10\n0,2,3\n1,2,1\n1,3,2\n2,1,4\n2,3,8\n2,4,2\n3,4,7\n4,3,9\n";
        let (graph, _) = GraphImporter::new().import_str::<String>(text).unwrap();
        shared(graph)
    }

    async fn send(
        graph: &SharedGraph,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        build_router(graph.clone()).oneshot(request).await.unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResponse<T> {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let graph = shared(Graph::new());
        let response = send(&graph, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_vertex_lifecycle() {
        let graph = shared(Graph::new());

        let body = serde_json::json!({ "label": "a" });
        let response = send(&graph, Method::POST, "/vertices", Some(body.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&graph, Method::POST, "/vertices", Some(body)).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let api: ApiResponse<()> = read_json(response).await;
        assert!(!api.success);

        let response = send(&graph, Method::GET, "/vertices/a", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&graph, Method::DELETE, "/vertices/a", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&graph, Method::DELETE, "/vertices/a", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(graph.read().vertex_count(), 0);
    }

    #[tokio::test]
    async fn test_edges() {
        let graph = shared(Graph::new());
        graph.write().add_vertex("a".to_string()).unwrap();
        graph.write().add_vertex("b".to_string()).unwrap();

        let body = serde_json::json!({ "start": "a", "finish": "b", "weight": 1.5 });
        let response = send(&graph, Method::POST, "/edges", Some(body.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = send(&graph, Method::POST, "/edges", Some(body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = serde_json::json!({ "start": "a", "finish": "zz", "weight": 1.0 });
        let response = send(&graph, Method::POST, "/edges", Some(body)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(graph.read().edge_count(), 2);

        let response = send(&graph, Method::DELETE, "/edges/a/b", None).await;
        let api: ApiResponse<serde_json::Value> = read_json(response).await;
        assert_eq!(api.data.unwrap()["removed"], 2);
        assert_eq!(graph.read().edge_count(), 0);
    }

    #[tokio::test]
    async fn test_shortest_path() {
        let graph = canonical();

        let body = serde_json::json!({ "start": "0", "finish": "3" });
        let response = send(&graph, Method::POST, "/algorithm/shortest-path", Some(body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let api: ApiResponse<PathResponse> = read_json(response).await;
        let data = api.data.unwrap();
        assert_eq!(data.vertices, vec!["0", "1", "2", "3", "4"]);
        assert_eq!(data.distances[3], 9);
        assert_eq!(data.path, vec!["0", "2", "1", "3"]);
    }

    #[tokio::test]
    async fn test_shortest_path_missing_vertex() {
        let graph = canonical();

        let body = serde_json::json!({ "start": "0", "finish": "9" });
        let response = send(&graph, Method::POST, "/algorithm/shortest-path", Some(body)).await;
        let api: ApiResponse<PathResponse> = read_json(response).await;
        let data = api.data.unwrap();
        assert_eq!(data.distances, vec![-1; 5]);
        assert!(data.path.is_empty());
    }

    #[tokio::test]
    async fn test_traversals() {
        let graph = canonical();

        let response = send(&graph, Method::GET, "/algorithm/dfs/0", None).await;
        let api: ApiResponse<Vec<String>> = read_json(response).await;
        assert_eq!(api.data.unwrap(), vec!["0", "1", "2", "3", "4"]);

        let response = send(&graph, Method::GET, "/algorithm/bfs/0", None).await;
        let api: ApiResponse<Vec<String>> = read_json(response).await;
        assert_eq!(api.data.unwrap(), vec!["0", "1", "2", "3", "4"]);

        let response = send(&graph, Method::GET, "/algorithm/bfs/9", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_import() {
        let graph = shared(Graph::new());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/graph/import")
            .body(Body::from("x,y\nx,y,2\n"))
            .unwrap();
        let response = build_router(graph.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(graph.read().edge_count(), 1);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/graph/import")
            .body(Body::from("1,2\n"))
            .unwrap();
        let response = build_router(graph.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(graph.read().vertex_count(), 2);
        assert_eq!(graph.read().edge_count(), 0);
    }
}

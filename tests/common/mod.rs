#![allow(dead_code)]

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use cvking_tools::config::ApiConfig;
use cvking_tools::ApiClient;

pub const EMAIL: &str = "recruiter@cvking.test";
pub const PASSWORD: &str = "correct-horse";
pub const TOKEN: &str = "test-token";

/// What the mock backend saw, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub path: &'static str,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct MockState {
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockState {
    fn record(&self, path: &'static str, headers: &HeaderMap, body: Value) {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(Recorded {
            path,
            authorization,
            body,
        });
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

async fn login(State(state): State<MockState>, headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    state.record("/auth/login", &headers, body.clone());
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        (StatusCode::OK, Json(json!({ "data": { "token": TOKEN, "user": { "id": 1 } } })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" })))
    }
}

async fn create_job(State(state): State<MockState>, headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    state.record("/jobs", &headers, body.clone());
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "No token" })));
    }
    if body.get("title").and_then(Value::as_str).is_none() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "title is required" })));
    }
    (StatusCode::CREATED, Json(json!({ "id": 7, "title": body["title"] })))
}

async fn create_application(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.record("/applications", &headers, body.clone());
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "No token" })));
    }
    (StatusCode::CREATED, Json(json!({ "id": 3, "jobId": body["jobId"], "status": "PENDING" })))
}

async fn upload(State(state): State<MockState>, headers: HeaderMap, mut multipart: Multipart) -> impl IntoResponse {
    let mut file_name = None;
    let mut content_type = None;
    let mut size = 0usize;
    let mut upload_type = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(str::to_string);
                content_type = field.content_type().map(str::to_string);
                size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
            }
            Some("type") => upload_type = field.text().await.ok(),
            _ => {}
        }
    }

    state.record(
        "/upload",
        &headers,
        json!({ "file_name": file_name, "content_type": content_type, "size": size, "type": upload_type }),
    );

    match (file_name, upload_type) {
        (Some(name), Some(kind)) => (
            StatusCode::OK,
            Json(json!({ "url": format!("/uploads/{}/{}", kind, name) })),
        ),
        _ => (StatusCode::BAD_REQUEST, Json(json!({ "message": "file and type are required" }))),
    }
}

/// Accepts an upload but answers without any URL key.
async fn upload_without_url(mut multipart: Multipart) -> impl IntoResponse {
    while let Ok(Some(_field)) = multipart.next_field().await {}
    (StatusCode::OK, Json(json!({ "success": true, "message": "stored" })))
}

/// Accepts an upload and answers with the URL inside a `data` envelope.
async fn upload_enveloped(mut multipart: Multipart) -> impl IntoResponse {
    let mut file_name = String::from("unnamed");
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            if let Some(name) = field.file_name() {
                file_name = name.to_string();
            }
        }
    }
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": { "fileUrl": format!("/files/{}", file_name) } })),
    )
}

/// Starts the mock backend on an ephemeral port and returns its base URL.
pub async fn spawn_mock() -> (String, MockState) {
    let state = MockState::default();
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/jobs", post(create_job))
        .route("/api/applications", post(create_application))
        .route("/api/upload", post(upload))
        .route("/api/missing-url/upload", post(upload_without_url))
        .route("/api/enveloped/upload", post(upload_enveloped))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api", addr), state)
}

pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

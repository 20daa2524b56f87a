use std::path::PathBuf;
use std::sync::Arc;

use examshot::application::routes::app_router;
use examshot::application::state::AppState;
use examshot::domain::screenshots::Screenshot;
use examshot::infrastructure::storage::JsonFileStore;
use reqwest::Client;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::AbortHandle;

pub struct TestApp {
    pub address: String,
    pub storage_path: PathBuf,
    // Holds the backing file alive for the app's lifetime.
    _storage_dir: tempfile::TempDir,
    server_handle: AbortHandle,
}

impl TestApp {
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }

    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

/// Spawn the app on an ephemeral port with a fresh storage file. The
/// store seeds itself, so every test starts from the six sample records.
pub async fn spawn_app() -> TestApp {
    let storage_dir = tempfile::tempdir().expect("Failed to create storage directory");
    let storage_path = storage_dir.path().join("examshot.json");

    let store = Arc::new(JsonFileStore::open(&storage_path).await);
    let state = AppState::new(store);

    let app = app_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let local_addr = listener.local_addr().expect("Failed to get local address");
    let address = format!("http://{local_addr}");

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    })
    .abort_handle();

    TestApp {
        address,
        storage_path,
        _storage_dir: storage_dir,
        server_handle,
    }
}

/// A 1x1 PNG as a data URI, small enough to inline in payloads.
pub const TINY_PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

pub fn batch_payload(subject: &str, topic: &str, year: &str, tags: &str, count: usize) -> serde_json::Value {
    json!({
        "subject": subject,
        "topic": topic,
        "year": year,
        "tags": tags,
        "images": vec![TINY_PNG_DATA_URL; count],
    })
}

/// Upload a batch and return the inserted records.
pub async fn upload_batch(app: &TestApp, payload: &serde_json::Value) -> Vec<Screenshot> {
    let client = Client::new();
    let response = client
        .post(app.api_url("/screenshots"))
        .json(payload)
        .send()
        .await
        .expect("Failed to send upload request");

    assert_eq!(response.status(), 201, "upload should succeed");
    response
        .json()
        .await
        .expect("Failed to deserialize uploaded screenshots")
}

pub async fn list_all(app: &TestApp) -> Vec<Screenshot> {
    let client = Client::new();
    client
        .get(app.api_url("/screenshots"))
        .send()
        .await
        .expect("Failed to list screenshots")
        .json()
        .await
        .expect("Failed to deserialize screenshot list")
}

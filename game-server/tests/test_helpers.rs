#![allow(dead_code)]

use std::sync::Arc;

use game_persistence::{MemoryStore, Repositories};
use game_server::auth::{ADMIN_SECRET_HEADER, AdminAuth};
use game_server::create_routes;
use serde_json::Value;
use warp::http::StatusCode;
use warp::test::RequestBuilder;

pub const TEST_SECRET: &str = "integration-secret";

/// Test setup that provides a server over a fresh in-memory store
pub struct TestServer {
    pub store: Arc<MemoryStore>,
    pub repositories: Arc<Repositories>,
    pub admin_auth: Arc<AdminAuth>,
}

impl TestServer {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            repositories: Arc::new(Repositories::new(store.clone())),
            admin_auth: Arc::new(AdminAuth::new(TEST_SECRET)),
            store,
        }
    }

    /// Sends the request through the full filter stack and decodes the JSON body
    pub async fn send(&self, request: RequestBuilder) -> (StatusCode, Value) {
        let routes = create_routes(self.repositories.clone(), self.admin_auth.clone());
        let resp = request.reply(&routes).await;
        let body = serde_json::from_slice(resp.body()).unwrap_or(Value::Null);
        (resp.status(), body)
    }
}

/// A request carrying the admin secret header
pub fn admin_request(method: &str, path: &str) -> RequestBuilder {
    warp::test::request()
        .method(method)
        .path(path)
        .header(ADMIN_SECRET_HEADER, TEST_SECRET)
}

pub fn anagram_game_json(id: &str, title: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "type": "Anagrams",
        "difficulty": "Medium",
        "category": "Vocabulary",
        "data": { "words": ["SILENT", "STONE"] }
    })
}

//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use orders_service::{app, AppState, InMemoryOrderRepository};
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

pub fn test_app() -> (Router, InMemoryOrderRepository) {
    let repo = InMemoryOrderRepository::new();
    (app(AppState::new(repo.clone()), BODY_LIMIT), repo)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, json_body: Option<serde_json::Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match json_body {
        Some(v) => {
            let payload = v.to_string();
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, payload.len());
            Body::from(payload)
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
    TestResponse {
        status,
        content_type,
        body,
    }
}

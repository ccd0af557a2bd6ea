#![allow(dead_code)]

use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use jobmatch_backend::{
    config::{Config, CONFIG},
    database::pool::{create_pool, run_migrations},
    routes, AppState,
};
use serde_json::{json, Value as JsonValue};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub const BOUNDARY: &str = "jobmatch-test-boundary";

pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
}

/// Router wired the same way as the binary, over the database in
/// `DATABASE_URL`. Each test gets its own pool since pools are bound to the
/// runtime that created them.
pub async fn spawn_app() -> TestApp {
    let config = CONFIG.get_or_init(|| {
        dotenvy::dotenv().ok();
        env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
        env::set_var("JWT_SECRET", "test_secret_key");
        env::set_var("DB_MAX_CONNECTIONS", "5");
        env::set_var(
            "UPLOADS_DIR",
            env::temp_dir().join("jobmatch-test-uploads"),
        );
        Config::from_env().expect("test config")
    });

    let pool = create_pool(config).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");

    let state = AppState::new(pool.clone(), config);
    TestApp {
        router: routes::router(state, config),
        pool,
    }
}

pub fn unique_login(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, JsonValue) {
        let resp = self.router.clone().oneshot(req).await.expect("oneshot");
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), 16 * 1024 * 1024)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, JsonValue) {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn json(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: JsonValue,
    ) -> (StatusCode, JsonValue) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn multipart(
        &self,
        uri: &str,
        token: &str,
        form: MultipartBody,
    ) -> (StatusCode, JsonValue) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(form.finish()))
            .unwrap();
        self.send(req).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, JsonValue) {
        let req = Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    /// Registers a fresh user and returns `(token, user_id)`.
    pub async fn register(&self, role: &str) -> (String, Uuid) {
        let (status, body) = self
            .json(
                "POST",
                "/api/auth/register",
                None,
                json!({
                    "login": unique_login(role),
                    "password": "secret123",
                    "role": role,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
        let token = body["token"].as_str().expect("token").to_string();
        let id = Uuid::parse_str(body["user"]["id"].as_str().expect("user id")).expect("uuid");
        (token, id)
    }

    /// Creates a vacancy with only a position name and salary.
    pub async fn create_vacancy(&self, token: &str, position_name: &str) -> JsonValue {
        let (status, body) = self
            .multipart(
                "/api/employer/vacancies",
                token,
                MultipartBody::new()
                    .text("position_name", position_name)
                    .text("salary", "100000"),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create vacancy failed: {}", body);
        body
    }
}

#[derive(Default)]
pub struct MultipartBody {
    buf: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                BOUNDARY, name, filename, content_type
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.buf
            .extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        self.buf
    }
}

pub const PNG_BYTES: [u8; 12] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
];

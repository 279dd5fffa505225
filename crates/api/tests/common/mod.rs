use std::sync::Arc;

use api::auth::AuthConfig;
use api::routes::api_router;
use api::seed::{seed_demo_data, SeededDemo};
use api::state::AppState;
use api::store::HrStore;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestEnv {
    pub router: Router,
    pub store: Arc<HrStore>,
    pub seeded: SeededDemo,
}

pub fn setup() -> TestEnv {
    let store = Arc::new(HrStore::new());
    let seeded = seed_demo_data(&store).expect("demo seed");
    let auth = Arc::new(AuthConfig {
        jwt_secret: "integration-test-secret".into(),
        session_ttl_hours: 24,
        cookie_secure: false,
    });
    let router = api_router(AppState::new(store.clone(), auth));
    TestEnv {
        router,
        store,
        seeded,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub set_cookie: Option<String>,
}

pub async fn request(
    env: &TestEnv,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };
    let response = env
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("router response");
    let status = response.status();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    TestResponse {
        status,
        body,
        set_cookie,
    }
}

pub async fn get(env: &TestEnv, uri: &str, cookie: Option<&str>) -> TestResponse {
    request(env, Method::GET, uri, cookie, None).await
}

pub async fn post(env: &TestEnv, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
    request(env, Method::POST, uri, cookie, Some(body)).await
}

pub async fn put(env: &TestEnv, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
    request(env, Method::PUT, uri, cookie, Some(body)).await
}

/// Logs in and returns the `wf_session=...` cookie pair for later requests.
pub async fn login(env: &TestEnv, email: &str, password: &str) -> String {
    let response = post(
        env,
        "/api/auth/login",
        None,
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "login as {email}");
    let set_cookie = response.set_cookie.expect("login sets a session cookie");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

pub async fn login_admin(env: &TestEnv) -> String {
    login(env, "admin@company.test", "admin123").await
}

pub async fn login_hr(env: &TestEnv) -> String {
    login(env, "sarah@company.test", "sarah123").await
}

pub async fn login_employee(env: &TestEnv) -> String {
    login(env, "john@company.test", "john123").await
}

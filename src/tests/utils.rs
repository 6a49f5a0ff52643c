use crate::app::AppState;
use crate::auth::session::MemorySessionStorage;
use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// A seeded app on its own SQLite file, removed on drop.
pub struct TestApp {
    pub state: AppState,
    path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

pub fn temp_db_path() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "rooms-test-{}-{nanos}-{}.sqlite3",
        std::process::id(),
        NEXT_DB.fetch_add(1, Ordering::SeqCst)
    ))
}

/// Fresh database seeded with the sample rooms and users; sessions in memory.
pub fn init_test_app() -> TestApp {
    let path = temp_db_path();
    let config = AppConfig {
        db_path: path.to_string_lossy().into_owned(),
        seed_sample_data: true,
        ..AppConfig::default()
    };

    let state = AppState::with_storage(config, Box::new(MemorySessionStorage::new()))
        .unwrap_or_else(|e| panic!("Test app initialization failed: {e}"));

    TestApp { state, path }
}

fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    body: Body,
    cookie: Option<&str>,
) -> Result<Response, ServerError> {
    let is_form = method == Method::POST;
    let mut builder = Request::builder().method(method).uri(uri);
    if is_form {
        builder = builder.header("Content-Type", "application/x-www-form-urlencoded");
    }
    if let Some(token) = cookie {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    handle(builder.body(body).unwrap(), &app.state)
}

pub fn get(app: &TestApp, uri: &str, cookie: Option<&str>) -> Result<Response, ServerError> {
    send(app, Method::GET, uri, Body::empty(), cookie)
}

pub fn post_form(
    app: &TestApp,
    uri: &str,
    form: &str,
    cookie: Option<&str>,
) -> Result<Response, ServerError> {
    send(app, Method::POST, uri, Body::from(form.as_bytes().to_vec()), cookie)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Logs in through the router and returns the raw session token.
pub fn sign_in(app: &TestApp, email: &str, password: &str) -> String {
    let form = format!("email={email}&password={password}");
    let resp = post_form(app, "/login", &form, None).expect("login request failed");
    assert_eq!(resp.status(), 303, "login for {email} should redirect");

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("login should set a cookie");

    cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("session="))
        .expect("session cookie")
        .to_string()
}

//! Access log output of the full middleware chain.
//!
//! Kept in its own test binary: the capturing logger is process-global.

use std::sync::Mutex;

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
    Router,
};
use log::{Level, LevelFilter, Log, Metadata, Record};
use tower::util::ServiceExt;

use user_directory::{config::MiddlewareConfig, AppState, RouterBuilder, User, UserStore};

const TOKEN: &str = "log-token";
const ACCESS_LOG_TARGET: &str = "user_directory::api::middleware";

struct CapturingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target() == ACCESS_LOG_TARGET {
            self.lines
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

fn access_lines() -> Vec<(Level, String)> {
    LOGGER.lines.lock().unwrap().clone()
}

fn app() -> Router {
    let store = UserStore::new().seeded(vec![User::new(1, "Alice", "alice@example.com")]);
    RouterBuilder::with_all_routes()
        .with_middleware(MiddlewareConfig::full(), TOKEN)
        .build(AppState::new(store))
}

fn get_users(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri("/users");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn logs_authorised_requests_and_skips_rejected_ones() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);

    let app = app();

    let response = app
        .clone()
        .oneshot(get_users(Some(&format!("Bearer {}", TOKEN))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        access_lines(),
        vec![(Level::Info, "GET /users responded 200".to_string())]
    );

    let response = app.clone().oneshot(get_users(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(get_users(Some("Bearer wrong")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(access_lines().len(), 1);
}

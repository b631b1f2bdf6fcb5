mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok_with_live_database(pool: PgPool) {
    let app = common::build_test_app(pool, "http://127.0.0.1:0");
    let response = common::get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
    assert!(body["version"].is_string());
}

//! End-to-end exercise of the router against a live database. Skips
//! quietly when no database is reachable so CI without postgres stays
//! green.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use models::db::{connect_with_config, DatabaseConfig};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::build_router;
use server::state::ServerState;

const ADMIN_KEY: &str = "test-admin-key";

async fn try_app() -> Option<Router> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        eprintln!("SKIP_DB_TESTS set, skipping");
        return None;
    }
    let mut cfg = DatabaseConfig::from_env();
    cfg.connect_timeout = Duration::from_secs(3);
    cfg.acquire_timeout = Duration::from_secs(3);
    let db = match connect_with_config(&cfg).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("database unreachable ({e}), skipping");
            return None;
        }
    };
    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("migrations failed ({e}), skipping");
        return None;
    }
    let state = ServerState {
        db,
        admin_key: Some(ADMIN_KEY.to_string()),
    };
    Some(build_router(state, CorsLayer::very_permissive()))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn admin_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-admin-key", ADMIN_KEY)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn admin_empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-admin-key", ADMIN_KEY)
        .body(Body::empty())
        .unwrap()
}

fn public_get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_responds_without_auth() {
    let Some(app) = try_app().await else { return };
    let (status, body) = send(&app, public_get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn admin_routes_reject_missing_key() {
    let Some(app) = try_app().await else { return };
    let req = Request::builder()
        .uri("/admin/categories")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid admin key");
}

#[tokio::test]
async fn full_catalog_flow() {
    let Some(app) = try_app().await else { return };

    let (status, cat) = send(
        &app,
        admin_json("POST", "/admin/categories", json!({"name": "Рестораны"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let cat_id = cat["id"].as_str().unwrap().to_string();

    let (status, svc) = send(
        &app,
        admin_json(
            "POST",
            "/admin/services",
            json!({"category_id": cat_id, "title": "Уборка ресторана"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let svc_id = svc["id"].as_str().unwrap().to_string();
    let slug = svc["slug"].as_str().unwrap().to_string();
    assert!(slug.starts_with("uborka-restorana"));

    let (status, _) = send(
        &app,
        admin_json(
            "POST",
            &format!("/admin/services/{svc_id}/zone-items"),
            json!({"zone": "kitchen", "text": "Вытяжки и плиты"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // public detail shows the zone grouped under its label
    let (status, page) = send(&app, public_get(&format!("/service/{slug}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["service"]["id"], svc_id.as_str());
    assert_eq!(page["zone_groups"][0]["zone"], "kitchen");
    assert_eq!(page["zone_groups"][0]["items"].as_array().unwrap().len(), 1);

    // duplicate carries the children and gets a fresh slug
    let (status, copy) = send(
        &app,
        admin_empty("POST", &format!("/admin/services/{svc_id}/duplicate")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let copy_id = copy["id"].as_str().unwrap().to_string();
    assert!(copy["title"].as_str().unwrap().ends_with(" (copy)"));
    assert_ne!(copy["slug"], svc["slug"]);

    let (status, zones) = send(
        &app,
        admin_empty("GET", &format!("/admin/services/{copy_id}/zone-items")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(zones.as_array().unwrap().len(), 1);

    // unknown id in a bulk request is reported, not fatal
    let bogus = uuid::Uuid::new_v4().to_string();
    let (status, report) = send(
        &app,
        admin_json(
            "POST",
            "/admin/services/duplicate",
            json!({"ids": [svc_id, bogus]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["duplicated"].as_array().unwrap().len(), 1);
    assert_eq!(report["failed"].as_array().unwrap().len(), 1);
    assert_eq!(report["failed"][0]["id"], bogus.as_str());

    // cleanup
    for id in report["duplicated"].as_array().unwrap() {
        let id = id.as_str().unwrap();
        let (status, _) = send(&app, admin_empty("DELETE", &format!("/admin/services/{id}"))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
    for id in [copy_id.as_str(), svc_id.as_str()] {
        let (status, _) = send(&app, admin_empty("DELETE", &format!("/admin/services/{id}"))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
    let (status, _) = send(
        &app,
        admin_empty("DELETE", &format!("/admin/categories/{cat_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

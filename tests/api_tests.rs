mod common;

use actix_web::{test, App};
use actix_web::http::StatusCode;
use imagehost::api::api::api_service_routes;
use serde_json::Value;

const CLIENT: (&str, &str) = ("X-Real-IP", "203.0.113.7");

#[actix_web::test]
async fn test_cache_status_reports_stats() {
    let data = common::create_test_service_data(60);
    let app = test::init_service(App::new().configure(api_service_routes(data))).await;

    let req = test::TestRequest::get().uri("/cache/status").insert_header(CLIENT).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["backendConnected"], Value::Bool(false));
    assert_eq!(body["hits"], 0);
    assert!(body.get("hitRate").is_some());
}

#[actix_web::test]
async fn test_limit_exceeded_then_banned() {
    let data = common::create_test_service_data(2);
    let app = test::init_service(App::new().configure(api_service_routes(data.clone()))).await;

    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/cache/status").insert_header(CLIENT).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/cache/status").insert_header(CLIENT).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(resp.headers().get("retry-after").unwrap(), "300");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["clientIP"], "203.0.113.7");
    assert_eq!(body["limit"], 2);
    assert_eq!(body["window"], 60);
    assert_eq!(body["banRemainingSeconds"], 300);

    let req = test::TestRequest::get().uri("/cache/status").insert_header(CLIENT).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // other clients are unaffected
    let req = test::TestRequest::get().uri("/cache/status").insert_header(("X-Real-IP", "203.0.113.8")).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    assert_eq!(data.rate_limiter.stats().bans_issued, 1);
}

#[actix_web::test]
async fn test_invalid_real_ip_header() {
    let data = common::create_test_service_data(60);
    let app = test::init_service(App::new().configure(api_service_routes(data))).await;

    let req = test::TestRequest::get().uri("/cache/status").insert_header(("X-Real-IP", "not-an-ip")).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let data = common::create_test_service_data(60);
    let app = test::init_service(App::new().configure(api_service_routes(data))).await;

    let req = test::TestRequest::get().uri("/nothing/here").insert_header(CLIENT).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "not found");
}

#[actix_web::test]
async fn test_ttl_and_expire() {
    let data = common::create_test_service_data(60);
    data.cache.set_raw("images:42", "{}", Some(30)).await.unwrap();
    let app = test::init_service(App::new().configure(api_service_routes(data.clone()))).await;

    let req = test::TestRequest::get().uri("/cache/ttl/images:42").insert_header(CLIENT).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ttl"], 30);

    let req = test::TestRequest::post().uri("/cache/expire/images:42?seconds=90").insert_header(CLIENT).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    assert_eq!(data.cache.ttl("images:42").await, Some(90));

    let req = test::TestRequest::post().uri("/cache/expire/images:42").insert_header(CLIENT).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post().uri("/cache/expire/images:42?seconds=soon").insert_header(CLIENT).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/cache/ttl/images:missing").insert_header(CLIENT).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/cache/ttl/bad%20key").insert_header(CLIENT).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_clear_reset_and_reconnect_without_remote() {
    let data = common::create_test_service_data(60);
    data.cache.set_raw("images:1", "a", None).await.unwrap();
    let app = test::init_service(App::new().configure(api_service_routes(data.clone()))).await;

    let req = test::TestRequest::post().uri("/cache/clear").insert_header(CLIENT).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    assert!(data.cache.local().is_empty());

    let req = test::TestRequest::post().uri("/cache/reset").insert_header(CLIENT).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["retryCount"], 0);

    let req = test::TestRequest::post().uri("/cache/reconnect").insert_header(CLIENT).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
}

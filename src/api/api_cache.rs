use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use log::info;
use serde_json::json;
use crate::api::api::{api_validate_cache_key, api_validation};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_seconds::QuerySeconds;

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_status_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    HttpResponse::Ok().content_type(ContentType::json()).json(data.cache.stats().await)
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_clear_post(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    data.cache.clear().await;
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok"
    }))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_reconnect_post(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    if data.cache.remote().is_none() {
        return HttpResponse::Conflict().content_type(ContentType::json()).json(json!({
            "status": "remote cache disabled"
        }));
    }

    info!("[API] Manual cache reconnect requested");
    match data.cache.manual_reconnect().await {
        true => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "backendConnected": true
        })),
        false => HttpResponse::ServiceUnavailable().content_type(ContentType::json()).json(json!({
            "status": "reconnect failed",
            "backendConnected": false,
            "retryCount": data.cache.stats().await.retry_count
        }))
    }
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_reset_post(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    data.cache.reset_retry_count();
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "retryCount": 0
    }))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_ttl_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    let key = path.into_inner();
    if !api_validate_cache_key(&key) {
        return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "invalid key"}));
    }

    match data.cache.ttl(&key).await {
        Some(ttl) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "key": key,
            "ttl": ttl
        })),
        None => HttpResponse::NotFound().content_type(ContentType::json()).json(json!({"status": "key not found"}))
    }
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_expire_post(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    let key = path.into_inner();
    if !api_validate_cache_key(&key) {
        return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "invalid key"}));
    }

    let seconds = match web::Query::<QuerySeconds>::from_query(request.query_string()) {
        Ok(params) => match params.seconds {
            Some(seconds) => seconds,
            None => { return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "missing seconds"})); }
        },
        Err(_) => { return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "invalid seconds"})); }
    };

    match data.cache.expire(&key, seconds).await {
        true => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "key": key,
            "ttl": seconds
        })),
        false => HttpResponse::NotFound().content_type(ContentType::json()).json(json!({"status": "key not found"}))
    }
}

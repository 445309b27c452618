use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::middleware::{Compress, Condition};
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use regex::Regex;
use serde_json::json;
use crate::api::api_cache::{
    api_service_cache_clear_post,
    api_service_cache_expire_post,
    api_service_cache_reconnect_post,
    api_service_cache_reset_post,
    api_service_cache_status_get,
    api_service_cache_ttl_get
};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::rate_limit_rejection::RateLimitRejection;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::rate_limit::enums::rate_limit_decision::RateLimitDecision;

static CACHE_KEY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_:./-]{1,512}$").ok());

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("cache/status").route(web::get().to(api_service_cache_status_get)));
        cfg.service(web::resource("cache/clear").route(web::post().to(api_service_cache_clear_post)));
        cfg.service(web::resource("cache/reconnect").route(web::post().to(api_service_cache_reconnect_post)));
        cfg.service(web::resource("cache/reset").route(web::post().to(api_service_cache_reset_post)));
        cfg.service(web::resource("cache/ttl/{key:.*}").route(web::get().to(api_service_cache_ttl_get)));
        cfg.service(web::resource("cache/expire/{key:.*}").route(web::post().to(api_service_cache_expire_post)));
    })
}

pub async fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    config: ApiServerConfig
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    info!("[API] Starting server listener on {}", addr);
    let sentry_enabled = data.config.sentry_config.enabled;
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(sentry_enabled, sentry_actix::Sentry::new()))
            .wrap(Compress::default())
            .wrap(api_service_cors())
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

/// Client address: the configured real-IP header when present, otherwise the
/// peer address. A header that does not parse as an address is an error.
pub fn api_service_retrieve_remote_ip(request: &HttpRequest, real_ip: &str) -> Result<IpAddr, ()>
{
    if !real_ip.is_empty()
        && let Some(header) = request.headers().get(real_ip) {
            return match header.to_str().ok().and_then(|value| IpAddr::from_str(value.trim()).ok()) {
                Some(ip) => Ok(ip),
                None => Err(())
            };
        }
    match request.peer_addr() {
        None => Err(()),
        Some(addr) => Ok(addr.ip())
    }
}

/// Resolves the client and consults the rate limiter; `Some` is the response
/// to return instead of running the handler.
pub async fn api_validation(request: &HttpRequest, data: &Data<Arc<ApiServiceData>>) -> Option<HttpResponse>
{
    let ip = match api_service_retrieve_remote_ip(request, &data.config.api_server.real_ip) {
        Ok(ip) => ip,
        Err(_) => {
            return Some(HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "invalid ip"
            })));
        }
    };

    let client = ip.to_string();
    let decision = data.rate_limiter.check(&client);
    if decision.is_allowed() {
        return None;
    }
    debug!("[API] {} {} rejected for {}: {:?}", request.method(), request.path(), client, decision);
    Some(api_service_rate_limited(data, &client, decision))
}

pub fn api_service_rate_limited(data: &ApiServiceData, client: &str, decision: RateLimitDecision) -> HttpResponse
{
    let status = data.rate_limiter.status(client);
    let rejection = RateLimitRejection::new(client, decision, &status, data.rate_limiter.config());
    let mut response = HttpResponse::build(decision.status_code());
    response.content_type(ContentType::json());
    if let Some(seconds) = rejection.retry_after() {
        response.insert_header((http::header::RETRY_AFTER, seconds.to_string()));
    }
    response.json(rejection)
}

pub fn api_validate_cache_key(key: &str) -> bool
{
    CACHE_KEY_PATTERN.as_ref().is_some_and(|pattern| pattern.is_match(key))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_not_found(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}

use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use imagehost::api::api::api_service;
use imagehost::api::structs::api_service_data::ApiServiceData;
use imagehost::cache::structs::cache_coordinator::CacheCoordinator;
use imagehost::common::common::setup_logging;
use imagehost::common::structs::clock::SystemClock;
use imagehost::common::traits::clock::Clock;
use imagehost::config::structs::configuration::Configuration;
use imagehost::rate_limit::structs::rate_limiter::RateLimiter;
use imagehost::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    let warnings = config.sanitize();

    if let Err(error) = setup_logging(&config) {
        eprintln!("[BOOT] {error}");
        exit(1);
    }
    for warning in warnings.iter() {
        warn!("{warning}");
    }
    let config = Arc::new(config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let clock: Arc<dyn Clock> = Arc::new(SystemClock);
            let tokio_shutdown = Shutdown::new().map_err(|_| std::io::Error::other("shutdown handler could not be installed"))?;

            let cache = match CacheCoordinator::new(config.cache.clone(), &config.redis, clock.clone()) {
                Ok(cache) => Arc::new(cache),
                Err(error) => {
                    error!("[BOOT] Unable to set up the cache: {error}");
                    exit(1);
                }
            };
            cache.start().await;

            let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit.clone(), clock.clone()));
            let sweeper = match config.rate_limit.enabled {
                true => Some(rate_limiter.start_sweeper()),
                false => {
                    info!("[BOOT] Rate limiting disabled");
                    None
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let console_interval = config.log_console_interval;
            if console_interval > 0 {
                let stats_handler = tokio_shutdown.clone();
                let stats_cache = cache.clone();
                let stats_limiter = rate_limiter.clone();
                info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                let cache_stats = stats_cache.stats().await;
                                let limiter_stats = stats_limiter.stats();
                                info!(
                                    "[STATS] Cache: Hits: {} - Misses: {} - Hit rate: {:.2} - Keys: {} - Backend: {} - Retries: {} | \
                                    Rate limit: Clients: {} - Bans: {} - Allowed: {} - Rejected: {}",
                                    cache_stats.hits, cache_stats.misses, cache_stats.hit_rate, cache_stats.keys,
                                    if cache_stats.backend_connected { "redis" } else { "local" }, cache_stats.retry_count,
                                    limiter_stats.tracked_clients, limiter_stats.active_bans,
                                    limiter_stats.allowed, limiter_stats.rejected
                                );
                            }
                            _ = stats_handler.handle() => {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                });
            }

            let api_handle = match config.api_server.enabled {
                true => {
                    let addr: SocketAddr = match config.api_server.bind_address.parse() {
                        Ok(addr) => addr,
                        Err(error) => {
                            error!("[BOOT] Invalid API bind address '{}': {error}", config.api_server.bind_address);
                            exit(1);
                        }
                    };
                    let data = Arc::new(ApiServiceData {
                        cache: cache.clone(),
                        rate_limiter: rate_limiter.clone(),
                        config: config.clone(),
                    });
                    let (handle, future) = match api_service(addr, data, config.api_server.clone()).await {
                        Ok(server) => server,
                        Err(error) => {
                            error!("[BOOT] Unable to bind API server on {addr}: {error}");
                            exit(1);
                        }
                    };
                    tokio::spawn(async move {
                        if let Err(error) = future.await {
                            sentry::capture_error(&error);
                            error!("[API] Server stopped with an error: {error}");
                        }
                    });
                    Some(handle)
                }
                false => {
                    info!("[BOOT] API server disabled");
                    None
                }
            };

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            if let Some(handle) = api_handle {
                handle.stop(true).await;
            }
            drop(sweeper);
            cache.close().await;

            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}

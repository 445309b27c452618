mod common;

use std::sync::Arc;
use proptest::prelude::*;
use imagehost::common::structs::clock::ManualClock;
use imagehost::config::structs::rate_limit_config::RateLimitConfig;
use imagehost::rate_limit::enums::rate_limit_decision::RateLimitDecision;
use imagehost::rate_limit::structs::rate_limiter::RateLimiter;

fn create_limiter(config: RateLimitConfig) -> (Arc<ManualClock>, RateLimiter) {
    let clock = common::create_clock();
    (clock.clone(), RateLimiter::new(config, clock))
}

#[test]
fn test_limit_then_ban_then_recovery() {
    let (clock, limiter) = create_limiter(common::create_test_rate_limit_config(60));
    for _ in 0..60 {
        assert_eq!(limiter.check("198.51.100.4"), RateLimitDecision::Allowed);
    }
    assert_eq!(limiter.check("198.51.100.4"), RateLimitDecision::LimitExceeded);
    let ban = limiter.ban("198.51.100.4").unwrap();
    assert_eq!(ban.end_time, common::START_MS + 300_000);

    clock.set(ban.end_time - 1);
    assert_eq!(limiter.check("198.51.100.4"), RateLimitDecision::Banned);
    clock.set(ban.end_time + 1);
    assert_eq!(limiter.check("198.51.100.4"), RateLimitDecision::Allowed);
    assert_eq!(limiter.status("198.51.100.4").remaining, Some(59));
}

#[test]
fn test_capacity_freed_by_sweep() {
    let mut config = common::create_test_rate_limit_config(10);
    config.max_clients = 2;
    let (clock, limiter) = create_limiter(config);
    assert!(limiter.is_allowed("a"));
    assert!(limiter.is_allowed("b"));
    assert_eq!(limiter.check("c"), RateLimitDecision::CapacityExceeded);
    assert_eq!(limiter.stats().bans_issued, 0);

    clock.advance(60_001);
    let summary = limiter.sweep();
    assert_eq!(summary.empty_windows, 2);
    assert!(limiter.is_allowed("c"));
}

fn arb_config() -> impl Strategy<Value = RateLimitConfig> {
    (1u32..8, 1_000u64..20_000, 1usize..6).prop_map(|(limit, window, max_clients)| RateLimitConfig {
        enabled: true,
        window_size: window,
        requests_per_minute: limit,
        max_clients,
        cleanup_interval: 60_000,
        ban_duration: window + 1,
    })
}

fn arb_requests() -> impl Strategy<Value = Vec<(u8, u64)>> {
    prop::collection::vec((0u8..8, 0u64..3_000), 1..200)
}

proptest! {
    #[test]
    fn prop_never_more_than_limit_per_window(config in arb_config(), requests in arb_requests()) {
        let (clock, limiter) = create_limiter(config.clone());
        let mut admitted: Vec<(u8, u64)> = Vec::new();

        for (client, gap) in requests {
            let now = clock.advance(gap);
            if limiter.is_allowed(&client.to_string()) {
                admitted.push((client, now));
                let in_window = admitted.iter()
                    .filter(|(c, t)| *c == client && *t + config.window_size >= now)
                    .count();
                prop_assert!(in_window <= config.requests_per_minute as usize);
            }
        }
    }

    #[test]
    fn prop_tracked_clients_bounded(config in arb_config(), requests in arb_requests()) {
        let (clock, limiter) = create_limiter(config.clone());
        for (client, gap) in requests {
            clock.advance(gap);
            limiter.check(&client.to_string());
            prop_assert!(limiter.stats().tracked_clients <= config.max_clients);
        }
    }

    #[test]
    fn prop_burst_admits_exactly_limit(config in arb_config()) {
        let (_clock, limiter) = create_limiter(config.clone());
        let decisions: Vec<RateLimitDecision> = (0..config.requests_per_minute + 2)
            .map(|_| limiter.check("burst"))
            .collect();
        let limit = config.requests_per_minute as usize;
        prop_assert!(decisions[..limit].iter().all(|d| *d == RateLimitDecision::Allowed));
        prop_assert_eq!(decisions[limit], RateLimitDecision::LimitExceeded);
        prop_assert_eq!(decisions[limit + 1], RateLimitDecision::Banned);
    }

    #[test]
    fn prop_stats_add_up(config in arb_config(), requests in arb_requests()) {
        let (clock, limiter) = create_limiter(config);
        let total = requests.len() as u64;
        for (client, gap) in requests {
            clock.advance(gap);
            limiter.check(&client.to_string());
        }
        let stats = limiter.stats();
        prop_assert_eq!(stats.allowed + stats.rejected, total);
        prop_assert!(stats.bans_issued <= stats.rejected);
    }
}

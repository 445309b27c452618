#[cfg(test)]
mod api_tests {
    mod remote_ip_tests {
        use std::net::{IpAddr, Ipv4Addr, SocketAddr};
        use actix_web::test::TestRequest;
        use crate::api::api::api_service_retrieve_remote_ip;

        #[test]
        fn test_header_wins_over_peer() {
            let request = TestRequest::default()
                .peer_addr(SocketAddr::from(([10, 0, 0, 1], 40000)))
                .insert_header(("X-Real-IP", "203.0.113.7"))
                .to_http_request();
            assert_eq!(
                api_service_retrieve_remote_ip(&request, "X-Real-IP"),
                Ok(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)))
            );
        }

        #[test]
        fn test_peer_used_without_header() {
            let request = TestRequest::default()
                .peer_addr(SocketAddr::from(([10, 0, 0, 1], 40000)))
                .to_http_request();
            assert_eq!(
                api_service_retrieve_remote_ip(&request, "X-Real-IP"),
                Ok(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)))
            );
        }

        #[test]
        fn test_empty_header_name_ignores_headers() {
            let request = TestRequest::default()
                .peer_addr(SocketAddr::from(([10, 0, 0, 1], 40000)))
                .insert_header(("X-Real-IP", "203.0.113.7"))
                .to_http_request();
            assert_eq!(
                api_service_retrieve_remote_ip(&request, ""),
                Ok(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)))
            );
        }

        #[test]
        fn test_garbage_header_is_rejected() {
            let request = TestRequest::default()
                .peer_addr(SocketAddr::from(([10, 0, 0, 1], 40000)))
                .insert_header(("X-Real-IP", "not-an-ip"))
                .to_http_request();
            assert!(api_service_retrieve_remote_ip(&request, "X-Real-IP").is_err());
        }

        #[test]
        fn test_no_peer_no_header() {
            let request = TestRequest::default().to_http_request();
            assert!(api_service_retrieve_remote_ip(&request, "X-Real-IP").is_err());
        }
    }

    mod cache_key_tests {
        use crate::api::api::api_validate_cache_key;

        #[test]
        fn test_accepts_resource_keys() {
            assert!(api_validate_cache_key("resource:gallery/cats:thumb"));
            assert!(api_validate_cache_key("a-b_c.d"));
        }

        #[test]
        fn test_rejects_bad_keys() {
            assert!(!api_validate_cache_key(""));
            assert!(!api_validate_cache_key("has space"));
            assert!(!api_validate_cache_key("semi;colon"));
            assert!(!api_validate_cache_key(&"k".repeat(513)));
            assert!(api_validate_cache_key(&"k".repeat(512)));
        }
    }

    mod rejection_tests {
        use crate::api::structs::rate_limit_rejection::RateLimitRejection;
        use crate::config::structs::rate_limit_config::RateLimitConfig;
        use crate::rate_limit::enums::rate_limit_decision::RateLimitDecision;
        use crate::rate_limit::structs::rate_limit_status::RateLimitStatus;

        #[test]
        fn test_banned_body() {
            let status = RateLimitStatus {
                banned: true,
                remaining: Some(0),
                reset_seconds: None,
                ban_remaining_seconds: Some(120),
            };
            let rejection = RateLimitRejection::new("203.0.113.7", RateLimitDecision::Banned, &status, &RateLimitConfig::default());
            assert_eq!(rejection.retry_after(), Some(120));

            let json = serde_json::to_value(&rejection).unwrap();
            assert_eq!(json["error"], "Forbidden");
            assert_eq!(json["clientIP"], "203.0.113.7");
            assert_eq!(json["limit"], 60);
            assert_eq!(json["window"], 60);
            assert_eq!(json["remaining"], 0);
            assert_eq!(json["banRemainingSeconds"], 120);
            assert!(json.get("reset").is_none());
        }

        #[test]
        fn test_capacity_body() {
            let status = RateLimitStatus {
                banned: false,
                remaining: Some(60),
                reset_seconds: Some(60),
                ban_remaining_seconds: None,
            };
            let rejection = RateLimitRejection::new("198.51.100.1", RateLimitDecision::CapacityExceeded, &status, &RateLimitConfig::default());
            let json = serde_json::to_value(&rejection).unwrap();
            assert_eq!(json["error"], "Too Many Requests");
            assert_eq!(json["reset"], 60);
            assert!(json.get("banRemainingSeconds").is_none());
            assert_eq!(rejection.retry_after(), Some(60));
        }
    }
}

use actix_web::http::StatusCode;
use crate::rate_limit::enums::rate_limit_decision::RateLimitDecision;

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitDecision::Allowed)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RateLimitDecision::Allowed => StatusCode::OK,
            RateLimitDecision::Banned => StatusCode::FORBIDDEN,
            RateLimitDecision::LimitExceeded
            | RateLimitDecision::CapacityExceeded => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RateLimitDecision::Allowed => "ok",
            RateLimitDecision::LimitExceeded => "rate limit exceeded, temporarily banned",
            RateLimitDecision::Banned => "temporarily banned for exceeding the rate limit",
            RateLimitDecision::CapacityExceeded => "too many clients, try again later",
        }
    }
}

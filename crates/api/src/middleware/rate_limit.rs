use crate::error::ConciergeError;
use actix_web::dev::ServiceRequest;
use concierge_infra::RateLimitConfig;
use std::{collections::HashMap, sync::Mutex, time::Instant};
use tracing::warn;

/// Buckets are pruned once this many clients are tracked
const MAX_TRACKED_CLIENTS: usize = 10_000;

#[derive(Debug, Clone)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// Token bucket per client ip. A full bucket holds `max_requests` tokens and
/// refills completely over one window.
pub struct RateLimiter {
    capacity: f64,
    refill_per_sec: f64,
    buckets: Mutex<HashMap<String, Bucket>>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        let capacity = config.max_requests as f64;
        Self {
            capacity,
            refill_per_sec: capacity / config.window.as_secs_f64().max(1.0),
            buckets: Mutex::new(HashMap::new()),
        }
    }

    pub fn check(&self, req: &ServiceRequest) -> Result<(), ConciergeError> {
        let key = req
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".into());
        if self.allow(&key, Instant::now()) {
            Ok(())
        } else {
            warn!(client = %key, path = %req.path(), "Rate limit exceeded");
            Err(ConciergeError::TooManyRequests)
        }
    }

    fn allow(&self, key: &str, now: Instant) -> bool {
        let mut buckets = self.buckets.lock().unwrap();
        if buckets.len() >= MAX_TRACKED_CLIENTS && !buckets.contains_key(key) {
            let (capacity, refill_per_sec) = (self.capacity, self.refill_per_sec);
            buckets.retain(|_, bucket| {
                let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
                bucket.tokens + elapsed * refill_per_sec < capacity
            });
        }

        let bucket = buckets.entry(key.to_string()).or_insert_with(|| Bucket {
            tokens: self.capacity,
            last_refill: now,
        });
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.last_refill = now;
        bucket.tokens = (bucket.tokens + elapsed * self.refill_per_sec).min(self.capacity);
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

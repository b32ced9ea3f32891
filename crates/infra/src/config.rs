use concierge_utils::create_random_secret;
use std::{fmt::Display, str::FromStr, time::Duration};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct PostgresConfig {
    /// Full connection string. Takes precedence over the separate parts.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// One of disable, allow, prefer, require, verify-ca, verify-full
    pub ssl_mode: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    /// Requests a single client ip may make per `window`
    pub max_requests: u32,
    pub window: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: u16,
    /// `None` means the in-memory store is used
    pub database: Option<PostgresConfig>,
    /// Origins allowed by CORS. Empty allows every origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: RateLimitConfig,
    /// How far ahead of a checkout the guest gets reminded
    pub checkout_reminder_window: chrono::Duration,
    /// How often the checkout reminder sweep runs
    pub checkout_reminder_interval: Duration,
    /// Secret used to sign the auth tokens
    pub jwt_secret: String,
}

fn parse_or_default<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default value: {}.",
                    key, raw, default
                );
                default
            }
        },
    }
}

/// Zero would make the sweep ticker spin or reject every request, so it falls
/// back to the default as well
fn positive_or_default<T>(key: &str, value: T, default: T) -> T
where
    T: PartialOrd + Default + Display,
{
    if value <= T::default() {
        warn!("{} must be positive, falling back to {}.", key, default);
        default
    } else {
        value
    }
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or_default(&lookup, "PORT", 5000u16);

        let url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let host = lookup("DB_HOST").filter(|host| !host.trim().is_empty());
        let database = if url.is_some() || host.is_some() {
            Some(PostgresConfig {
                url,
                host: host.unwrap_or_else(|| "localhost".into()),
                port: parse_or_default(&lookup, "DB_PORT", 5432u16),
                user: lookup("DB_USER").unwrap_or_else(|| "postgres".into()),
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                database: lookup("DB_NAME").unwrap_or_else(|| "concierge".into()),
                ssl_mode: lookup("DB_SSL_MODE").unwrap_or_else(|| "prefer".into()),
                max_connections: parse_or_default(&lookup, "DB_MAX_CONNECTIONS", 10u32),
            })
        } else {
            None
        };

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let rate_limit = RateLimitConfig {
            max_requests: positive_or_default(
                "RATE_LIMIT_MAX_REQUESTS",
                parse_or_default(&lookup, "RATE_LIMIT_MAX_REQUESTS", 100u32),
                100,
            ),
            window: Duration::from_secs(positive_or_default(
                "RATE_LIMIT_WINDOW_SECS",
                parse_or_default(&lookup, "RATE_LIMIT_WINDOW_SECS", 15 * 60u64),
                15 * 60,
            )),
        };

        let window_minutes = parse_or_default(&lookup, "CHECKOUT_REMINDER_WINDOW_MINUTES", 60i64);
        let interval_secs = positive_or_default(
            "CHECKOUT_REMINDER_INTERVAL_SECS",
            parse_or_default(&lookup, "CHECKOUT_REMINDER_INTERVAL_SECS", 5 * 60u64),
            5 * 60,
        );

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                info!("Did not find JWT_SECRET environment variable. Going to create one, tokens will not survive a restart.");
                create_random_secret(32)
            }
        };

        Self {
            port,
            database,
            allowed_origins,
            rate_limit,
            checkout_reminder_window: chrono::Duration::minutes(window_minutes.max(0)),
            checkout_reminder_interval: Duration::from_secs(interval_secs),
            jwt_secret,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

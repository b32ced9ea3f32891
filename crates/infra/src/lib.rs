mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, PostgresConfig, RateLimitConfig};
pub use repos::*;
pub use services::*;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::info;

#[derive(Clone)]
pub struct ConciergeContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

impl ConciergeContext {
    fn create(repos: Repos, config: Config) -> Self {
        let notifier = Arc::new(StoreNotifier::new(repos.notifications.clone()));
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier,
        }
    }

    pub fn create_inmemory() -> Self {
        Self::create(Repos::create_inmemory(), Config::new())
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<ConciergeContext> {
    let config = Config::new();
    let repos = match &config.database {
        Some(database) => {
            let pool = connect(database).await?;
            run_migration(&pool).await?;
            Repos::create_postgres(pool)
        }
        None => {
            info!("No database configured, using inmemory repositories");
            Repos::create_inmemory()
        }
    };
    Ok(ConciergeContext::create(repos, config))
}

async fn connect(database: &PostgresConfig) -> anyhow::Result<PgPool> {
    let options = match &database.url {
        Some(url) => url.parse::<PgConnectOptions>()?,
        None => PgConnectOptions::new()
            .host(&database.host)
            .port(database.port)
            .username(&database.user)
            .password(&database.password)
            .database(&database.database)
            .ssl_mode(database.ssl_mode.parse::<PgSslMode>()?),
    };
    info!("DB CHECKING CONNECTION ...");
    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .connect_with(options)
        .await?;
    info!("DB CHECKING CONNECTION ... [done]");
    Ok(pool)
}

pub async fn run_migration(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!().run(pool).await?;
    Ok(())
}

/// Creates an inmemory context and the configured one. The second is a
/// postgres context when a database is configured, otherwise inmemory as well.
#[cfg(test)]
pub(crate) async fn create_contexts() -> Vec<ConciergeContext> {
    vec![
        ConciergeContext::create_inmemory(),
        setup_context().await.expect("To set up the configured context"),
    ]
}

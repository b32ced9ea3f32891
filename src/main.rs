mod telemetry;

use concierge_api::Application;
use concierge_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, the environment is used as is
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("concierge".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = setup_context().await?;

    let app = Application::new(context).await?;
    app.start().await?;
    Ok(())
}

use concierge_api::Application;
use concierge_infra::{Config, ConciergeContext};
use concierge_sdk::{ConciergeSDK, RegisterInput, Role};

pub struct TestApp {
    pub config: Config,
    pub address: String,
}

impl TestApp {
    /// Registers a user with the given role and returns an SDK acting as them
    pub async fn sdk_for(&self, username: &str, role: Role) -> (ConciergeSDK, concierge_sdk::User) {
        let res = ConciergeSDK::new(self.address.clone())
            .auth
            .register(RegisterInput {
                username: username.into(),
                password: "correct-horse-battery".into(),
                full_name: format!("{} Tester", username),
                role: Some(role),
                room_id: None,
            })
            .await
            .expect("To register user");
        (
            ConciergeSDK::with_token(self.address.clone(), res.token),
            res.user,
        )
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, ConciergeSDK) {
    let mut ctx = ConciergeContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = ConciergeSDK::new(address.clone());
    (TestApp { config, address }, sdk)
}

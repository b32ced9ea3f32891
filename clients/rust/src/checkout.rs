use crate::{APIResponse, BaseClient};
use concierge_api_structs::run_checkout_reminders;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CheckoutReminderClient {
    base: Arc<BaseClient>,
}

impl CheckoutReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Runs one checkout reminder sweep. Requires a staff or admin token.
    pub async fn run(&self) -> APIResponse<run_checkout_reminders::APIResponse> {
        self.base
            .post(
                (),
                "api/v1/checkout-reminders/run".into(),
                StatusCode::OK,
            )
            .await
    }
}

use serde::{Deserialize, Serialize};

pub mod run_checkout_reminders {
    use super::*;

    /// Outcome of one checkout reminder sweep
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
    pub struct APIResponse {
        pub sent: usize,
        pub failed: usize,
    }
}

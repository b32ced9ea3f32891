mod auth;
mod checkout;
mod error;
mod notification;
mod resource;
mod status;

pub mod dtos {
    pub use crate::auth::dtos::*;
}

pub use crate::auth::api::*;
pub use crate::checkout::api::*;
pub use crate::error::ErrorResponse;
pub use crate::notification::api::*;
pub use crate::resource::api::*;
pub use crate::status::api::*;

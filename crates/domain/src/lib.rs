mod resource;
mod resources;
mod shared;
mod user;

pub use resource::{Record, Resource};
pub use resources::*;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::validation::ValidationError;
pub use user::{InvalidRoleError, Role, User};

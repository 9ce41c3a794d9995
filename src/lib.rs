//! Character service: a small CRUD REST backend for a single entity.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::Config;
pub use docs::ApiDoc;
pub use error::AppError;
pub use model::{Character, CharacterSummary};
pub use routes::{character_routes, common_routes};
pub use state::AppState;
pub use store::CharacterStore;
pub use validation::{validate_create, FieldError};

//! Route tables: character CRUD plus common service routes.

mod character;
mod common;

pub use character::character_routes;
pub use common::common_routes;

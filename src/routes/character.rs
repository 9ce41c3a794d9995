//! Character CRUD routes.

use crate::handlers::character::{add, delete as delete_handler, get_all, get_one};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn character_routes(state: AppState) -> Router {
    Router::new()
        .route("/character/getAll", get(get_all))
        .route("/character/get/:id", get(get_one))
        .route("/character/add", post(add))
        .route("/character/delete/:id", delete(delete_handler))
        .with_state(state)
}

//! Shared application state, constructed once at startup and injected into
//! every handler.

use crate::store::CharacterStore;

#[derive(Clone)]
pub struct AppState {
    pub store: CharacterStore,
}

//! OpenAPI document assembled from handler annotations.

use crate::model::{Character, CharacterSummary};
use crate::response::DeleteInfo;
use crate::validation::FieldError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Character API",
        description = "API for managing characters",
        version = "1.0.0"
    ),
    paths(
        crate::handlers::character::get_all,
        crate::handlers::character::get_one,
        crate::handlers::character::add,
        crate::handlers::character::delete,
    ),
    components(schemas(Character, CharacterSummary, DeleteInfo, FieldError))
)]
pub struct ApiDoc;

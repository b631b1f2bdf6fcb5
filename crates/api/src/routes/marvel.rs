//! Route definitions for the Marvel domain.

use axum::routing::get;
use axum::Router;

use crate::handlers::{marvel_characters, marvel_comics};
use crate::state::AppState;

/// Routes mounted at `/marvel`.
///
/// ```text
/// GET /characters                   -> list
/// GET /characters/search            -> search
/// GET /characters/{marvel_id}       -> retrieve
/// GET /comics                       -> list
/// GET /comics/search                -> search
/// GET /comics/{marvel_id}           -> retrieve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters", get(marvel_characters::list))
        .route("/characters/search", get(marvel_characters::search))
        .route("/characters/{marvel_id}", get(marvel_characters::retrieve))
        .route("/comics", get(marvel_comics::list))
        .route("/comics/search", get(marvel_comics::search))
        .route("/comics/{marvel_id}", get(marvel_comics::retrieve))
}

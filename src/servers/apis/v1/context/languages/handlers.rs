//! API handlers for the [`languages`](crate::servers::apis::v1::context::languages)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::resources::LanguageList;
use crate::core::DocsService;

/// It handles the request to list the supported languages.
///
/// It always returns a `200` response with a [`LanguageList`] in json.
pub async fn get_languages_handler(State(docs): State<Arc<DocsService>>) -> Json<LanguageList> {
    Json(LanguageList::from(docs.languages()))
}

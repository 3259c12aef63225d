//! Feature layout handler

use axum::Json;

use crate::engine::LayoutInfo;

/// Names, order and hash of the expected feature vector
pub async fn layout() -> Json<LayoutInfo> {
    Json(LayoutInfo::current())
}

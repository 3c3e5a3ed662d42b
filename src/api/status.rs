use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::services::{TableStatus, TableStore};

/// Report whether the reference table is loaded
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Reference table state", body = TableStatus),
    ),
    tag = "Status"
)]
pub async fn handle_status(State(store): State<Arc<TableStore>>) -> Json<TableStatus> {
    Json(store.status())
}

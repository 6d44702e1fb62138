use axum::Json;

use crate::models::menu::{MenuSection, MENU};

// GET /api/menu
pub async fn get_menu() -> Json<&'static [MenuSection]> {
    Json(MENU)
}

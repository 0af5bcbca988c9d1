//! Service banner handler.

use axum::Json;

use crate::schema::banner::{BannerView, ENDPOINTS, WELCOME_MESSAGE};
use crate::schema::common::ApiResponse;

/// `GET /`
pub async fn banner() -> Json<ApiResponse<BannerView>> {
    Json(ApiResponse::ok(BannerView { endpoints: ENDPOINTS }).with_message(WELCOME_MESSAGE))
}

pub(crate) mod screenshots;

use axum::routing::get;

use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route(
            "/screenshots",
            get(screenshots::list_screenshots).post(screenshots::create_batch),
        )
        .route(
            "/screenshots/{id}",
            get(screenshots::get_screenshot)
                .put(screenshots::update_screenshot)
                .delete(screenshots::delete_screenshot),
        )
        .route(
            "/screenshots/{id}/download",
            get(screenshots::download_screenshot),
        )
}

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;

use crate::application::errors::map_app_error;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::screenshots;
use crate::presentation::web::templates::{ScreenshotDetailTemplate, UploadTemplate};
use crate::presentation::web::views::ScreenshotDetailView;

#[tracing::instrument]
pub(super) async fn upload_page() -> Result<Html<String>, StatusCode> {
    render_html(UploadTemplate {
        current_year: screenshots::current_year(),
    })
}

#[tracing::instrument(skip(state))]
pub(super) async fn detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let screenshot = state
        .screenshot_repo
        .get(&id)
        .await
        .map_err(|e| map_app_error(e.into()))?;

    render_html(ScreenshotDetailTemplate {
        screenshot: ScreenshotDetailView::from(&screenshot),
    })
}

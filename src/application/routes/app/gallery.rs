use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;

use crate::application::errors::map_app_error;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::filters::{self, FilterQuery};
use crate::presentation::web::templates::GalleryTemplate;
use crate::presentation::web::views::{FilterBarView, ScreenshotCardView};

/// Render the gallery with the current filter selection applied.
#[tracing::instrument(skip(state))]
pub(super) async fn gallery_page(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Html<String>, StatusCode> {
    let all = state
        .screenshot_repo
        .list()
        .await
        .map_err(|e| map_app_error(e.into()))?;

    let criteria = query.into_criteria();
    let facets = filters::facet_options(&all);
    let visible: Vec<ScreenshotCardView> = if criteria.is_empty() {
        all.iter().map(ScreenshotCardView::from).collect()
    } else {
        filters::filter(&all, &criteria)
            .into_iter()
            .map(ScreenshotCardView::from)
            .collect()
    };

    let total = visible.len();
    render_html(GalleryTemplate {
        filter_bar: FilterBarView::new(&facets, &criteria),
        screenshots: visible,
        total,
    })
}

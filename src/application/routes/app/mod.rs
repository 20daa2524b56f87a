mod gallery;
mod screenshots;

use axum::response::IntoResponse;
use axum::routing::get;

use crate::application::state::AppState;

/// Generate a static asset handler that serves an embedded file with cache headers.
macro_rules! static_asset_str {
    ($name:ident, $path:literal, $content_type:literal) => {
        async fn $name() -> impl IntoResponse {
            (
                [
                    ("content-type", $content_type),
                    ("cache-control", "public, max-age=604800"),
                ],
                include_str!($path),
            )
        }
    };
}

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(gallery::gallery_page))
        .route("/upload", get(screenshots::upload_page))
        .route("/screenshots/{id}", get(screenshots::detail_page))
        .route("/static/css/styles.css", get(styles))
        .route("/static/js/upload.js", get(upload_js))
        .route("/static/js/detail.js", get(detail_js))
        .route("/screenshots/anatomy.svg", get(anatomy_svg))
        .route("/screenshots/physiology.svg", get(physiology_svg))
        .route("/screenshots/biochemistry.svg", get(biochemistry_svg))
        .route("/screenshots/pathology.svg", get(pathology_svg))
        .route("/screenshots/pharmacology.svg", get(pharmacology_svg))
        .route("/screenshots/microbiology.svg", get(microbiology_svg))
        .route("/health", get(health))
}

static_asset_str!(
    styles,
    "../../../../static/css/styles.css",
    "text/css; charset=utf-8"
);
static_asset_str!(
    upload_js,
    "../../../../static/js/upload.js",
    "application/javascript; charset=utf-8"
);
static_asset_str!(
    detail_js,
    "../../../../static/js/detail.js",
    "application/javascript; charset=utf-8"
);
static_asset_str!(
    anatomy_svg,
    "../../../../static/screenshots/anatomy.svg",
    "image/svg+xml"
);
static_asset_str!(
    physiology_svg,
    "../../../../static/screenshots/physiology.svg",
    "image/svg+xml"
);
static_asset_str!(
    biochemistry_svg,
    "../../../../static/screenshots/biochemistry.svg",
    "image/svg+xml"
);
static_asset_str!(
    pathology_svg,
    "../../../../static/screenshots/pathology.svg",
    "image/svg+xml"
);
static_asset_str!(
    pharmacology_svg,
    "../../../../static/screenshots/pharmacology.svg",
    "image/svg+xml"
);
static_asset_str!(
    microbiology_svg,
    "../../../../static/screenshots/microbiology.svg",
    "image/svg+xml"
);

/// Resolve a seed record's `src` path to its embedded SVG, for the
/// download endpoint.
pub(crate) fn seed_asset(path: &str) -> Option<&'static str> {
    match path {
        "/screenshots/anatomy.svg" => {
            Some(include_str!("../../../../static/screenshots/anatomy.svg"))
        }
        "/screenshots/physiology.svg" => {
            Some(include_str!("../../../../static/screenshots/physiology.svg"))
        }
        "/screenshots/biochemistry.svg" => Some(include_str!(
            "../../../../static/screenshots/biochemistry.svg"
        )),
        "/screenshots/pathology.svg" => {
            Some(include_str!("../../../../static/screenshots/pathology.svg"))
        }
        "/screenshots/pharmacology.svg" => Some(include_str!(
            "../../../../static/screenshots/pharmacology.svg"
        )),
        "/screenshots/microbiology.svg" => Some(include_str!(
            "../../../../static/screenshots/microbiology.svg"
        )),
        _ => None,
    }
}

async fn health() -> impl IntoResponse {
    ([("content-type", "application/json")], r#"{"status":"ok"}"#)
}

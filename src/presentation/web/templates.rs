use askama::Template;

use super::views::{FilterBarView, ScreenshotCardView, ScreenshotDetailView};

pub fn render_template<T: Template>(template: T) -> askama::Result<String> {
    template.render()
}

#[derive(Template)]
#[template(path = "pages/gallery.html")]
pub struct GalleryTemplate {
    pub filter_bar: FilterBarView,
    pub screenshots: Vec<ScreenshotCardView>,
    pub total: usize,
}

#[derive(Template)]
#[template(path = "pages/upload.html")]
pub struct UploadTemplate {
    pub current_year: i32,
}

#[derive(Template)]
#[template(path = "pages/screenshot.html")]
pub struct ScreenshotDetailTemplate {
    pub screenshot: ScreenshotDetailView,
}

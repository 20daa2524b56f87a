use std::sync::Arc;

use crate::domain::repositories::ScreenshotRepository;

#[derive(Clone)]
pub struct AppState {
    pub screenshot_repo: Arc<dyn ScreenshotRepository>,
}

impl AppState {
    pub fn new(screenshot_repo: Arc<dyn ScreenshotRepository>) -> Self {
        Self { screenshot_repo }
    }
}

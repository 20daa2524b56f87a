use crate::domain::filters::{ALL, FacetOptions, FilterCriteria};
use crate::domain::screenshots::Screenshot;

pub fn screenshot_path(id: &str) -> String {
    format!("/screenshots/{id}")
}

pub fn api_screenshot_path(id: &str) -> String {
    format!("/api/v1/screenshots/{id}")
}

/// Card view for a single gallery tile.
pub struct ScreenshotCardView {
    pub id: String,
    pub detail_path: String,
    pub image_src: String,
    pub subject: String,
    pub topic: String,
    pub year: i32,
    pub tags: Vec<String>,
}

impl From<&Screenshot> for ScreenshotCardView {
    fn from(screenshot: &Screenshot) -> Self {
        Self {
            id: screenshot.id.clone(),
            detail_path: screenshot_path(&screenshot.id),
            image_src: screenshot.image.as_str().to_string(),
            subject: screenshot.subject.clone(),
            topic: screenshot.topic.clone(),
            year: screenshot.year,
            tags: screenshot.tags.clone(),
        }
    }
}

/// Detail view backing the view/edit page. `tags_value` is the
/// comma-joined form the edit field is seeded with.
pub struct ScreenshotDetailView {
    pub id: String,
    pub image_src: String,
    pub subject: String,
    pub topic: String,
    pub year: i32,
    pub tags: Vec<String>,
    pub tags_value: String,
    pub download_path: String,
    pub api_path: String,
}

impl From<&Screenshot> for ScreenshotDetailView {
    fn from(screenshot: &Screenshot) -> Self {
        Self {
            id: screenshot.id.clone(),
            image_src: screenshot.image.as_str().to_string(),
            subject: screenshot.subject.clone(),
            topic: screenshot.topic.clone(),
            year: screenshot.year,
            tags: screenshot.tags.clone(),
            tags_value: screenshot.tags.join(", "),
            download_path: format!("/api/v1/screenshots/{}/download", screenshot.id),
            api_path: api_screenshot_path(&screenshot.id),
        }
    }
}

pub struct FilterOption {
    pub value: String,
    pub selected: bool,
}

/// State of the filter bar: the current free-text query plus dropdown
/// options with the active selection marked.
pub struct FilterBarView {
    pub query: String,
    pub subjects: Vec<FilterOption>,
    pub years: Vec<FilterOption>,
    pub tags: Vec<FilterOption>,
}

impl FilterBarView {
    pub fn new(facets: &FacetOptions, criteria: &FilterCriteria) -> Self {
        let selected_year = criteria.year.map(|y| y.to_string());
        Self {
            query: criteria.query.clone().unwrap_or_default(),
            subjects: options(&facets.subjects, criteria.subject.as_deref()),
            years: options(&facets.years, selected_year.as_deref()),
            tags: options(&facets.tags, criteria.tag.as_deref()),
        }
    }
}

fn options(values: &[String], selected: Option<&str>) -> Vec<FilterOption> {
    std::iter::once(ALL.to_string())
        .chain(values.iter().cloned())
        .map(|value| FilterOption {
            selected: match selected {
                Some(s) => value == s,
                None => value == ALL,
            },
            value,
        })
        .collect()
}

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// One screenshot entry with its metadata.
///
/// Serialization uses the camelCase field names of the persisted JSON
/// document, so an export from an existing gallery round-trips as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screenshot {
    pub id: String,
    #[serde(flatten)]
    pub image: ImageSource,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unix millis; used only for uniqueness/ordering of batch uploads.
    #[serde(default)]
    pub created_at: i64,
}

/// Where a screenshot's image lives: uploads embed the whole image as a
/// data URI, seed samples reference a bundled static asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    #[serde(rename = "dataUrl")]
    DataUrl(String),
    #[serde(rename = "src")]
    Asset(String),
}

impl ImageSource {
    /// The value a browser can put straight into an `<img src>`.
    pub fn as_str(&self) -> &str {
        match self {
            ImageSource::DataUrl(s) | ImageSource::Asset(s) => s,
        }
    }
}

/// A batch upload: one shared metadata set applied to every image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBatch {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub year: Option<i32>,
    /// Comma-separated tag string, as typed into the form.
    #[serde(default)]
    pub tags: String,
    /// One data URI per uploaded file.
    pub images: Vec<String>,
}

impl NewBatch {
    /// Turn the batch into one record per image, with sequentially offset
    /// timestamps so ids stay unique and ordering is stable.
    pub fn into_screenshots(self, now: i64) -> Vec<Screenshot> {
        let subject = non_empty_or(self.subject, "General");
        let topic = non_empty_or(self.topic, "Untitled");
        let year = self.year.filter(|y| *y != 0).unwrap_or_else(current_year);
        let tags = parse_tags(&self.tags);

        self.images
            .into_iter()
            .enumerate()
            .map(|(idx, data_url)| Screenshot {
                id: format!("up-{now}-{idx}"),
                image: ImageSource::DataUrl(data_url),
                subject: subject.clone(),
                topic: topic.clone(),
                year,
                tags: tags.clone(),
                created_at: now + idx as i64,
            })
            .collect()
    }
}

/// Replacement metadata for an edit. Subject and topic are taken verbatim,
/// a missing or zero year keeps the record's current year, and the tag
/// string is re-parsed (so an empty input clears all tags). The record's
/// id and image are immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateScreenshot {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub tags: String,
}

impl UpdateScreenshot {
    pub fn apply(self, screenshot: &mut Screenshot) {
        screenshot.subject = self.subject;
        screenshot.topic = self.topic;
        if let Some(year) = self.year.filter(|y| *y != 0) {
            screenshot.year = year;
        }
        screenshot.tags = parse_tags(&self.tags);
    }
}

/// Split a comma-separated tag string, trimming entries and dropping
/// empties. `""` and `" , "` both yield no tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

// The whole collection is the unit of persistence; these pure operations
// mirror the store's mutations so they can be tested without any I/O.

/// Prepend a batch so the newest uploads come first.
pub fn prepend_batch(collection: &mut Vec<Screenshot>, batch: Vec<Screenshot>) {
    collection.splice(0..0, batch);
}

/// Apply an edit to the record with the given id, returning the updated
/// record, or `None` if no record has that id.
pub fn update_by_id(
    collection: &mut [Screenshot],
    id: &str,
    changes: UpdateScreenshot,
) -> Option<Screenshot> {
    let screenshot = collection.iter_mut().find(|s| s.id == id)?;
    changes.apply(screenshot);
    Some(screenshot.clone())
}

/// Remove the record with the given id. Returns whether anything was removed.
pub fn remove_by_id(collection: &mut Vec<Screenshot>, id: &str) -> bool {
    let before = collection.len();
    collection.retain(|s| s.id != id);
    collection.len() < before
}

/// The six sample records seeded into an empty gallery, one per subject.
pub fn sample_screenshots(now: i64) -> Vec<Screenshot> {
    let samples = [
        ("anat", "anatomy", "Anatomy", "Upper limb", 2020, "essay"),
        ("phys", "physiology", "Physiology", "Cardiac cycle", 2021, "short"),
        ("bioc", "biochemistry", "Biochemistry", "Urea cycle", 2019, "viva"),
        ("path", "pathology", "Pathology", "Inflammation", 2022, "essay"),
        ("pharm", "pharmacology", "Pharmacology", "ANS drugs", 2020, "short"),
        ("micro", "microbiology", "Microbiology", "Sterilization", 2023, "viva"),
    ];

    samples
        .into_iter()
        .enumerate()
        .map(|(idx, (abbr, asset, subject, topic, year, tag))| {
            let at = now + idx as i64;
            Screenshot {
                id: format!("sample-{abbr}-{at}"),
                image: ImageSource::Asset(format!("/screenshots/{asset}.svg")),
                subject: subject.to_string(),
                topic: topic.to_string(),
                year,
                tags: vec![tag.to_string()],
                created_at: at,
            }
        })
        .collect()
}

/// Filename for the download action, derived from subject and topic.
/// Double quotes are stripped so the name stays valid inside a
/// `Content-Disposition` quoted-string.
pub fn download_filename(screenshot: &Screenshot) -> String {
    let subject = if screenshot.subject.is_empty() {
        "exam"
    } else {
        screenshot.subject.as_str()
    };
    let topic = if screenshot.topic.is_empty() {
        "question"
    } else {
        screenshot.topic.as_str()
    };
    format!("{subject}-{topic}.png").replace('"', "")
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

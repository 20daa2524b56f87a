use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::info;

use crate::application::errors::{ApiError, AppError};
use crate::application::routes::app::seed_asset;
use crate::application::routes::support::{FlexiblePayload, PayloadSource, empty_string_as_none};
use crate::application::state::AppState;
use crate::domain::filters::{self, FilterQuery};
use crate::domain::images::parse_data_url;
use crate::domain::screenshots::{
    self, ImageSource, NewBatch, Screenshot, UpdateScreenshot, download_filename,
};

#[tracing::instrument(skip(state))]
pub(crate) async fn list_screenshots(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<Screenshot>>, ApiError> {
    let collection = state.screenshot_repo.list().await.map_err(AppError::from)?;

    let criteria = query.into_criteria();
    if criteria.is_empty() {
        return Ok(Json(collection));
    }

    let filtered = filters::filter(&collection, &criteria)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(filtered))
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewBatchSubmission {
    #[serde(default)]
    subject: String,
    #[serde(default)]
    topic: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    year: Option<i32>,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    images: Vec<String>,
}

impl NewBatchSubmission {
    fn into_batch(self) -> Result<NewBatch, AppError> {
        if self.images.is_empty() {
            return Err(AppError::validation("at least one image is required"));
        }
        if self.images.iter().any(|img| !img.starts_with("data:")) {
            return Err(AppError::validation("images must be data URIs"));
        }

        Ok(NewBatch {
            subject: self.subject,
            topic: self.topic,
            year: self.year,
            tags: self.tags,
            images: self.images,
        })
    }
}

/// Batch create is JSON-only: a form body cannot carry the `images`
/// array, so form submissions are rejected up front with a clear error.
#[tracing::instrument(skip(state, payload))]
pub(crate) async fn create_batch(
    State(state): State<AppState>,
    payload: FlexiblePayload<NewBatchSubmission>,
) -> Result<Response, ApiError> {
    let (submission, source) = payload.into_parts();
    if matches!(source, PayloadSource::Form) {
        return Err(AppError::validation("batch upload must be sent as JSON").into());
    }
    let batch = submission.into_batch().map_err(ApiError::from)?;

    let records = batch.into_screenshots(screenshots::now_millis());
    let inserted = state
        .screenshot_repo
        .add_batch(records)
        .await
        .map_err(AppError::from)?;

    info!(
        count = inserted.len(),
        subject = %inserted[0].subject,
        "screenshots uploaded"
    );

    Ok((StatusCode::CREATED, Json(inserted)).into_response())
}

#[tracing::instrument(skip(state))]
pub(crate) async fn get_screenshot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Screenshot>, ApiError> {
    let screenshot = state.screenshot_repo.get(&id).await?;
    Ok(Json(screenshot))
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateSubmission {
    #[serde(default)]
    subject: String,
    #[serde(default)]
    topic: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    year: Option<i32>,
    #[serde(default)]
    tags: String,
}

impl From<UpdateSubmission> for UpdateScreenshot {
    fn from(submission: UpdateSubmission) -> Self {
        UpdateScreenshot {
            subject: submission.subject,
            topic: submission.topic,
            year: submission.year,
            tags: submission.tags,
        }
    }
}

#[tracing::instrument(skip(state, payload))]
pub(crate) async fn update_screenshot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: FlexiblePayload<UpdateSubmission>,
) -> Result<Response, ApiError> {
    let (submission, source) = payload.into_parts();

    let updated = state
        .screenshot_repo
        .update(&id, submission.into())
        .await?;

    info!(%id, "screenshot updated");

    if matches!(source, PayloadSource::Form) {
        Ok(Redirect::to(&format!("/screenshots/{id}")).into_response())
    } else {
        Ok(Json(updated).into_response())
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn delete_screenshot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.screenshot_repo.delete(&id).await?;

    info!(%id, "screenshot deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Export a record's image under a filename derived from its metadata.
#[tracing::instrument(skip(state))]
pub(crate) async fn download_screenshot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let screenshot = state.screenshot_repo.get(&id).await?;

    let (content_type, bytes) = match &screenshot.image {
        ImageSource::DataUrl(data_url) => {
            let decoded = parse_data_url(data_url).ok_or_else(|| {
                AppError::unexpected(format!("stored image for {id} is not a valid data URI"))
            })?;
            (decoded.content_type, decoded.bytes)
        }
        ImageSource::Asset(path) => {
            let svg = seed_asset(path).ok_or_else(|| {
                AppError::unexpected(format!("unknown seed asset path: {path}"))
            })?;
            ("image/svg+xml".to_string(), svg.as_bytes().to_vec())
        }
    };

    let filename = download_filename(&screenshot);
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|_| AppError::unexpected("download filename is not header-safe"))?;
    let content_type = HeaderValue::from_str(&content_type)
        .map_err(|_| AppError::unexpected("stored content type is not header-safe"))?;

    let mut response = bytes.into_response();
    response.headers_mut().insert(CONTENT_TYPE, content_type);
    response
        .headers_mut()
        .insert(CONTENT_DISPOSITION, disposition);
    Ok(response)
}

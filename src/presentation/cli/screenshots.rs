use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use super::print_json;
use crate::domain::images::{content_type_for_path, to_data_url};
use crate::domain::screenshots::{NewBatch, UpdateScreenshot, download_filename};
use crate::infrastructure::client::ExamshotClient;

#[derive(Debug, Subcommand)]
pub enum ScreenshotCommands {
    /// Upload one or more image files as a batch
    Add(AddScreenshotCommand),
    /// List screenshots, optionally filtered
    List(ListScreenshotsCommand),
    /// Get a screenshot by ID
    Get(GetScreenshotCommand),
    /// Update a screenshot's metadata
    Update(UpdateScreenshotCommand),
    /// Delete a screenshot
    Delete(DeleteScreenshotCommand),
    /// Download a screenshot's image to a file
    Download(DownloadScreenshotCommand),
}

pub async fn run(client: &ExamshotClient, cmd: ScreenshotCommands) -> Result<()> {
    match cmd {
        ScreenshotCommands::Add(c) => add_screenshots(client, c).await,
        ScreenshotCommands::List(c) => list_screenshots(client, c).await,
        ScreenshotCommands::Get(c) => get_screenshot(client, c).await,
        ScreenshotCommands::Update(c) => update_screenshot(client, c).await,
        ScreenshotCommands::Delete(c) => delete_screenshot(client, c).await,
        ScreenshotCommands::Download(c) => download_screenshot(client, c).await,
    }
}

#[derive(Debug, Args)]
pub struct AddScreenshotCommand {
    /// Image files to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub topic: Option<String>,
    #[arg(long)]
    pub year: Option<i32>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

pub async fn add_screenshots(client: &ExamshotClient, command: AddScreenshotCommand) -> Result<()> {
    let reads = command.files.iter().map(|path| async move {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok::<String, anyhow::Error>(to_data_url(content_type_for_path(path), &bytes))
    });
    let images = futures::future::try_join_all(reads).await?;

    let payload = NewBatch {
        subject: command.subject.unwrap_or_default(),
        topic: command.topic.unwrap_or_default(),
        year: command.year,
        tags: command.tags.unwrap_or_default(),
        images,
    };

    let inserted = client.screenshots().create(&payload).await?;
    print_json(&inserted)
}

#[derive(Debug, Args)]
pub struct ListScreenshotsCommand {
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub tag: Option<String>,
    /// Free-text search over subject, topic, tags, and year
    #[arg(long)]
    pub query: Option<String>,
}

pub async fn list_screenshots(
    client: &ExamshotClient,
    command: ListScreenshotsCommand,
) -> Result<()> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(subject) = command.subject {
        query.push(("subject", subject));
    }
    if let Some(year) = command.year {
        query.push(("year", year.to_string()));
    }
    if let Some(tag) = command.tag {
        query.push(("tag", tag));
    }
    if let Some(q) = command.query {
        query.push(("q", q));
    }

    let screenshots = client.screenshots().list(&query).await?;
    print_json(&screenshots)
}

#[derive(Debug, Args)]
pub struct GetScreenshotCommand {
    #[arg(long)]
    pub id: String,
}

pub async fn get_screenshot(client: &ExamshotClient, command: GetScreenshotCommand) -> Result<()> {
    let screenshot = client.screenshots().get(&command.id).await?;
    print_json(&screenshot)
}

#[derive(Debug, Args)]
pub struct UpdateScreenshotCommand {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub topic: Option<String>,
    #[arg(long)]
    pub year: Option<i32>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

pub async fn update_screenshot(
    client: &ExamshotClient,
    command: UpdateScreenshotCommand,
) -> Result<()> {
    // Fields left unspecified keep their current values.
    let current = client.screenshots().get(&command.id).await?;

    let payload = UpdateScreenshot {
        subject: command.subject.unwrap_or(current.subject),
        topic: command.topic.unwrap_or(current.topic),
        year: command.year.or(Some(current.year)),
        tags: command.tags.unwrap_or_else(|| current.tags.join(", ")),
    };

    let updated = client.screenshots().update(&command.id, &payload).await?;
    print_json(&updated)
}

#[derive(Debug, Args)]
pub struct DeleteScreenshotCommand {
    #[arg(long)]
    pub id: String,
}

pub async fn delete_screenshot(
    client: &ExamshotClient,
    command: DeleteScreenshotCommand,
) -> Result<()> {
    client.screenshots().delete(&command.id).await?;
    println!("deleted screenshot {}", command.id);
    Ok(())
}

#[derive(Debug, Args)]
pub struct DownloadScreenshotCommand {
    #[arg(long)]
    pub id: String,
    /// Output path; defaults to a name derived from the record's metadata
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn download_screenshot(
    client: &ExamshotClient,
    command: DownloadScreenshotCommand,
) -> Result<()> {
    let screenshot = client.screenshots().get(&command.id).await?;
    let bytes = client.screenshots().download(&command.id).await?;

    let output = command
        .output
        .unwrap_or_else(|| PathBuf::from(download_filename(&screenshot)));
    tokio::fs::write(&output, bytes)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("wrote {}", output.display());
    Ok(())
}

use anyhow::Result;

use super::ExamshotClient;
use crate::domain::screenshots::{NewBatch, Screenshot, UpdateScreenshot};

pub struct ScreenshotsClient<'a> {
    client: &'a ExamshotClient,
}

impl<'a> ScreenshotsClient<'a> {
    pub fn new(client: &'a ExamshotClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &[(&str, String)]) -> Result<Vec<Screenshot>> {
        let url = self.client.endpoint("api/v1/screenshots")?;
        let response = self
            .client
            .request(reqwest::Method::GET, url)
            .query(query)
            .send()
            .await?;
        self.client.handle_response(response).await
    }

    pub async fn get(&self, id: &str) -> Result<Screenshot> {
        let url = self.client.endpoint(&format!("api/v1/screenshots/{id}"))?;
        let response = self
            .client
            .request(reqwest::Method::GET, url)
            .send()
            .await?;
        self.client.handle_response(response).await
    }

    pub async fn create(&self, payload: &NewBatch) -> Result<Vec<Screenshot>> {
        let url = self.client.endpoint("api/v1/screenshots")?;
        let response = self
            .client
            .request(reqwest::Method::POST, url)
            .json(payload)
            .send()
            .await?;
        self.client.handle_response(response).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateScreenshot) -> Result<Screenshot> {
        let url = self.client.endpoint(&format!("api/v1/screenshots/{id}"))?;
        let response = self
            .client
            .request(reqwest::Method::PUT, url)
            .json(payload)
            .send()
            .await?;
        self.client.handle_response(response).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = self.client.endpoint(&format!("api/v1/screenshots/{id}"))?;
        let response = self
            .client
            .request(reqwest::Method::DELETE, url)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.client.response_error(response).await)
        }
    }

    /// Fetch the raw image bytes for a record.
    pub async fn download(&self, id: &str) -> Result<Vec<u8>> {
        let url = self
            .client
            .endpoint(&format!("api/v1/screenshots/{id}/download"))?;
        let response = self
            .client
            .request(reqwest::Method::GET, url)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(self.client.response_error(response).await)
        }
    }
}

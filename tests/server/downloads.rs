use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;

use crate::helpers::{TINY_PNG_DATA_URL, batch_payload, list_all, spawn_app, upload_batch};

#[tokio::test]
async fn download_returns_the_uploaded_bytes() {
    let app = spawn_app().await;
    let inserted = upload_batch(&app, &batch_payload("Anatomy", "Skull", "2022", "", 1)).await;

    let client = Client::new();
    let response = client
        .get(app.api_url(&format!("/screenshots/{}/download", inserted[0].id)))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "image/png");
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"Anatomy-Skull.png\""
    );

    let expected = STANDARD
        .decode(TINY_PNG_DATA_URL.split_once(",").unwrap().1)
        .unwrap();
    assert_eq!(response.bytes().await.unwrap().to_vec(), expected);
}

#[tokio::test]
async fn download_of_a_seed_record_serves_the_bundled_image() {
    let app = spawn_app().await;
    let seed = &list_all(&app).await[0];

    let client = Client::new();
    let response = client
        .get(app.api_url(&format!("/screenshots/{}/download", seed.id)))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "image/svg+xml");
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"Anatomy-Upper limb.png\""
    );
    assert!(response.text().await.unwrap().contains("<svg"));
}

#[tokio::test]
async fn download_filename_falls_back_for_blank_metadata() {
    let app = spawn_app().await;
    let inserted = upload_batch(&app, &batch_payload("", "", "", "", 1)).await;

    let client = Client::new();
    let response = client
        .get(app.api_url(&format!("/screenshots/{}/download", inserted[0].id)))
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"General-Untitled.png\""
    );
}

#[tokio::test]
async fn download_filename_drops_quotes_from_metadata() {
    let app = spawn_app().await;
    let inserted = upload_batch(
        &app,
        &batch_payload("Anatomy", "the \"snuffbox\"", "2022", "", 1),
    )
    .await;

    let client = Client::new();
    let response = client
        .get(app.api_url(&format!("/screenshots/{}/download", inserted[0].id)))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"Anatomy-the snuffbox.png\""
    );
}

#[tokio::test]
async fn download_of_unknown_id_is_404() {
    let app = spawn_app().await;

    let client = Client::new();
    let response = client
        .get(app.api_url("/screenshots/no-such-id/download"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

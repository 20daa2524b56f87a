use reqwest::Client;

use crate::helpers::{batch_payload, list_all, spawn_app, upload_batch};

#[tokio::test]
async fn gallery_page_renders_the_sample_collection() {
    let app = spawn_app().await;

    let client = Client::new();
    let response = client.get(app.page_url("/")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Anatomy"));
    assert!(body.contains("Upper limb"));
    assert!(body.contains("6 screenshots"));
}

#[tokio::test]
async fn gallery_page_applies_query_string_filters() {
    let app = spawn_app().await;

    let client = Client::new();
    let body = client
        .get(app.page_url("/?subject=Physiology"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Cardiac cycle"));
    assert!(!body.contains("Upper limb"));
    assert!(body.contains("1 screenshot"));
}

#[tokio::test]
async fn gallery_filter_dropdowns_list_distinct_facets() {
    let app = spawn_app().await;

    let client = Client::new();
    let body = client
        .get(app.page_url("/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // One dropdown option per distinct subject, plus the sentinel.
    assert_eq!(body.matches("option value=\"Pharmacology\"").count(), 1);
    assert!(body.contains("option value=\"All\""));
}

#[tokio::test]
async fn upload_page_renders() {
    let app = spawn_app().await;

    let client = Client::new();
    let response = client.get(app.page_url("/upload")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("upload-form"));
    assert!(body.contains("/static/js/upload.js"));
}

#[tokio::test]
async fn detail_page_renders_a_record() {
    let app = spawn_app().await;
    let inserted = upload_batch(&app, &batch_payload("Anatomy", "Skull", "2022", "bones", 1)).await;

    let client = Client::new();
    let response = client
        .get(app.page_url(&format!("/screenshots/{}", inserted[0].id)))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Anatomy: Skull"));
    assert!(body.contains(&format!("/api/v1/screenshots/{}", inserted[0].id)));
}

#[tokio::test]
async fn detail_page_for_unknown_id_is_404() {
    let app = spawn_app().await;

    let client = Client::new();
    let response = client
        .get(app.page_url("/screenshots/no-such-id"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn seed_images_are_served_as_static_assets() {
    let app = spawn_app().await;

    let client = Client::new();
    for record in list_all(&app).await {
        let src = match &record.image {
            examshot::domain::screenshots::ImageSource::Asset(src) => src.clone(),
            other => panic!("expected seed records to reference assets, got {other:?}"),
        };

        let response = client.get(app.page_url(&src)).send().await.unwrap();
        assert_eq!(response.status(), 200, "missing asset {src}");
        assert_eq!(response.headers()["content-type"], "image/svg+xml");
    }
}

#[tokio::test]
async fn stylesheet_is_served() {
    let app = spawn_app().await;

    let client = Client::new();
    let response = client
        .get(app.page_url("/static/css/styles.css"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "text/css; charset=utf-8"
    );
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = spawn_app().await;

    let client = Client::new();
    let response = client.get(app.page_url("/health")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = spawn_app().await;

    let client = Client::new();
    let response = client.get(app.page_url("/")).send().await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(
        headers["content-security-policy"]
            .to_str()
            .unwrap()
            .contains("img-src 'self' data:")
    );
}

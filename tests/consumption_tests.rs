use chrono::{Duration, Local};
use meridian_client::application::interfaces::consumption::ConsumptionService;
use meridian_client::application::services::consumption_service::ConsumptionFetcher;
use meridian_client::config::{Config, Credentials, PortalConfig};
use meridian_client::error::AppError;
use meridian_client::session::interface::PortalSession;
use mockito::Matcher;
use std::sync::Arc;

const EXPORT_PATH: &str = "/reports/consumption_data/detailed_export";

fn create_test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            email: "customer@example.com".to_string(),
            password: "test_password".to_string(),
        },
        portal: PortalConfig {
            base_url: server_url.to_string(),
            timeout: 5,
        },
        days_to_look_back: 365,
    }
}

#[tokio::test]
async fn detailed_export_returns_raw_body() {
    let mut server = mockito::Server::new_async().await;

    // The window is recomputed from the wall clock inside the service, so the
    // expected dates are derived the same way here.
    let today = Local::now().date_naive();
    let from = (today - Duration::days(365)).format("%d/%m/%Y").to_string();
    let to = today.format("%d/%m/%Y").to_string();

    let export = server
        .mock("GET", EXPORT_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("date_from".into(), from),
            Matcher::UrlEncoded("date_to".into(), to),
            Matcher::UrlEncoded("all_icps".into(), "".into()),
            Matcher::UrlEncoded("download".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("Content-Type", "text/csv")
        .with_body("date,kwh\n2024-01-01,12.3")
        .create_async()
        .await;

    let fetcher = ConsumptionFetcher::new(Arc::new(create_test_config(&server.url())));
    let session = PortalSession::new("abc123".to_string());
    let data = fetcher
        .detailed_export(&session)
        .await
        .expect("export should succeed");

    assert_eq!(data, "date,kwh\n2024-01-01,12.3");
    export.assert_async().await;
}

#[tokio::test]
async fn detailed_export_with_empty_body_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _export = server
        .mock("GET", EXPORT_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let fetcher = ConsumptionFetcher::new(Arc::new(create_test_config(&server.url())));
    let session = PortalSession::new("abc123".to_string());
    let err = fetcher.detailed_export(&session).await.unwrap_err();

    assert!(matches!(err, AppError::EmptyExport));
}

#[tokio::test]
async fn detailed_export_maps_non_200_to_unexpected() {
    let mut server = mockito::Server::new_async().await;
    let _export = server
        .mock("GET", EXPORT_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let fetcher = ConsumptionFetcher::new(Arc::new(create_test_config(&server.url())));
    let session = PortalSession::new("abc123".to_string());
    let err = fetcher.detailed_export(&session).await.unwrap_err();

    assert!(matches!(err, AppError::Unexpected(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn detailed_export_without_prior_login_still_fails_cleanly() {
    let mut server = mockito::Server::new_async().await;
    let _export = server
        .mock("GET", EXPORT_PATH)
        .match_query(Matcher::Any)
        .with_status(403)
        .create_async()
        .await;

    let fetcher = ConsumptionFetcher::new(Arc::new(create_test_config(&server.url())));
    // A session that never went through a login carries no cookies; the
    // portal bounces it and the service must report that as a plain error.
    let session = PortalSession::new("never-logged-in".to_string());
    let err = fetcher.detailed_export(&session).await.unwrap_err();

    assert!(matches!(err, AppError::Unexpected(status) if status.as_u16() == 403));
}

use archivedotorg_client::{ArchiveError, SaveOptions, WebClient};
use mockito::Matcher;

fn client(server: &mockito::Server) -> WebClient {
    WebClient::with_http_client(reqwest::Client::new())
        .save_endpoint(format!("{}/save", server.url()))
}

#[tokio::test]
async fn test_save_sends_form_body() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", Matcher::Regex(r"^/save/https:/+reddit\.com".to_string()))
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body("capture_outlinks=on&url=https%3A%2F%2Freddit.com")
        .with_status(200)
        .with_header("content-location", "/web/20211031000000/https://reddit.com/")
        .create_async()
        .await;

    let result = client(&server)
        .save(
            "https://reddit.com",
            SaveOptions {
                save_out_links: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.is_success());
    assert_eq!(
        result.headers.get("content-location").unwrap(),
        "/web/20211031000000/https://reddit.com/"
    );
}

#[tokio::test]
async fn test_save_all_capture_options() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", Matcher::Regex(r"^/save/".to_string()))
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("capture_outlinks".into(), "on".into()),
            Matcher::UrlEncoded("capture_all".into(), "on".into()),
            Matcher::UrlEncoded("capture_screenshot".into(), "on".into()),
            Matcher::UrlEncoded("url".into(), "https://example.com/page".into()),
        ]))
        .with_status(200)
        .create_async()
        .await;

    client(&server)
        .save(
            "https://example.com/page",
            SaveOptions {
                save_out_links: true,
                save_error_pages: true,
                save_screen_shot: true,
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_save_returns_non_2xx_without_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", Matcher::Regex(r"^/save/".to_string()))
        .with_status(429)
        .with_header("retry-after", "60")
        .with_body("Too Many Requests")
        .create_async()
        .await;

    let result = client(&server)
        .save("https://reddit.com", SaveOptions::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.status.as_u16(), 429);
    assert!(!result.is_success());
    assert_eq!(result.headers.get("retry-after").unwrap(), "60");
}

#[tokio::test]
async fn test_save_invalid_target() {
    let server = mockito::Server::new_async().await;
    let err = client(&server)
        .save("reddit dot com", SaveOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ArchiveError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_save_transport_error() {
    let client =
        WebClient::with_http_client(reqwest::Client::new()).save_endpoint("http://127.0.0.1:1/save");
    let err = client
        .save("https://reddit.com", SaveOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ArchiveError::Transport { .. }));
}

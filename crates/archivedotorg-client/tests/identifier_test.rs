use archivedotorg_client::{ArchiveConfig, ArchiveError, Credentials, S3Client, UploadOptions};
use mockito::Matcher;

fn client(server: &mockito::Server) -> S3Client {
    S3Client::with_http_client(reqwest::Client::new(), Credentials::new("key", "secret"))
        .identifier_endpoint(format!("{}/upload/app/upload_api.php", server.url()))
}

#[tokio::test]
async fn test_find_identifier_posts_form() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/upload/app/upload_api.php")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body("name=identifierAvailable&identifier=my-item&findUnique=true")
        .with_header("content-type", "application/json")
        .with_body(r#"{"identifier":"my-item","success":true}"#)
        .create_async()
        .await;

    let response = client(&server).find_identifier("my-item").await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.identifier, "my-item");
    assert!(response.success);
}

#[tokio::test]
async fn test_find_identifier_passes_through_failure() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/upload/app/upload_api.php")
        .with_body(r#"{"identifier":"my-item","success":false}"#)
        .create_async()
        .await;

    let response = client(&server).find_identifier("my-item").await.unwrap();
    assert!(!response.success);
}

#[tokio::test]
async fn test_find_identifier_malformed_json() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/upload/app/upload_api.php")
        .with_body("not json")
        .create_async()
        .await;

    let err = client(&server).find_identifier("my-item").await.unwrap_err();
    assert!(matches!(err, ArchiveError::Decode(_)));
}

#[tokio::test]
async fn test_resolve_identifier_skips_lookup() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut opts = UploadOptions::new("x", "a.txt").with_title("BaZ");
    opts.skip_unique_check = true;

    let identifier = client(&server).resolve_identifier(&opts).await.unwrap();

    mock.assert_async().await;
    assert_eq!(identifier, "baz");
}

#[tokio::test]
async fn test_resolve_identifier_keeps_explicit_case() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload/app/upload_api.php")
        .match_body(Matcher::UrlEncoded("identifier".into(), "FOO".into()))
        .with_body(r#"{"identifier":"FOO","success":true}"#)
        .create_async()
        .await;

    let opts = UploadOptions::new("x", "a.txt")
        .with_identifier("FOO")
        .with_title("bar");
    let identifier = client(&server).resolve_identifier(&opts).await.unwrap();

    mock.assert_async().await;
    assert_eq!(identifier, "FOO");
}

#[tokio::test]
async fn test_resolve_identifier_transport_failure() {
    let client = S3Client::with_http_client(reqwest::Client::new(), Credentials::new("k", "s"))
        .identifier_endpoint("http://127.0.0.1:1/upload/app/upload_api.php");

    let opts = UploadOptions::new("x", "a.txt").with_identifier("item");
    let err = client.resolve_identifier(&opts).await.unwrap_err();

    match err {
        ArchiveError::IdentifierUnresolved {
            source: Some(source),
            ..
        } => assert!(matches!(*source, ArchiveError::Transport { .. })),
        other => panic!("expected IdentifierUnresolved, got {:?}", other),
    }
}

#[tokio::test]
async fn test_client_from_config_without_credentials() {
    let mut server = mockito::Server::new_async().await;
    let lookup = server
        .mock("POST", "/upload/app/upload_api.php")
        .with_body(r#"{"identifier":"my-item","success":true}"#)
        .create_async()
        .await;
    let upload = server
        .mock("PUT", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = ArchiveConfig {
        s3_url: Some(server.url()),
        ..Default::default()
    };
    let client = S3Client::from_config(&config)
        .unwrap()
        .identifier_endpoint(format!("{}/upload/app/upload_api.php", server.url()));

    let response = client.find_identifier("my-item").await.unwrap();
    assert!(response.success);

    let opts = UploadOptions::new("x", "a.txt").with_identifier("my-item");
    let err = client.upload(opts).await.unwrap_err();
    assert!(matches!(err, ArchiveError::Config(_)));

    lookup.assert_async().await;
    upload.assert_async().await;
}

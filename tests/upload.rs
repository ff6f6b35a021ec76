mod common;

use common::{client_for, spawn_mock, EMAIL, PASSWORD};
use cvking_tools::upload::{upload_file, UploadFile, BYTES_PER_MB, MIME_PDF};
use cvking_tools::UploadError;

#[tokio::test]
async fn uploads_file_with_type_tag_and_returns_url() {
    let (base_url, state) = spawn_mock().await;
    let mut client = client_for(&base_url);
    client.login(EMAIL, PASSWORD).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, b"%PDF-1.4 test").unwrap();
    let file = UploadFile::from_path(&path, None).unwrap();

    let url = upload_file(&client, &file, "cv", None).await.unwrap();

    assert_eq!(url, "/uploads/cv/resume.pdf");
    let recorded = state.requests().pop().unwrap();
    assert_eq!(recorded.path, "/upload");
    assert_eq!(recorded.body["content_type"], MIME_PDF);
    assert_eq!(recorded.body["size"], 13);
    assert_eq!(recorded.body["type"], "cv");
}

#[tokio::test]
async fn oversized_file_never_reaches_the_server() {
    let (base_url, state) = spawn_mock().await;
    let client = client_for(&base_url);
    let file = UploadFile::new("big.pdf", MIME_PDF, vec![0u8; (6 * BYTES_PER_MB) as usize]);

    let err = upload_file(&client, &file, "cv", None).await.unwrap_err();

    assert!(matches!(err, UploadError::TooLarge { max_mb: 5 }));
    assert!(state.requests().is_empty());
}

#[tokio::test]
async fn unsupported_type_never_reaches_the_server() {
    let (base_url, state) = spawn_mock().await;
    let client = client_for(&base_url);
    let file = UploadFile::new("photo.png", "image/png", vec![1, 2, 3]);

    let err = upload_file(&client, &file, "cv", None).await.unwrap_err();

    assert!(matches!(err, UploadError::UnsupportedType(_)));
    assert!(state.requests().is_empty());
}

#[tokio::test]
async fn response_without_url_is_missing_url_error() {
    let (base_url, _state) = spawn_mock().await;
    let client = client_for(&format!("{}/missing-url", base_url));
    let file = UploadFile::new("resume.pdf", MIME_PDF, b"%PDF-1.4".to_vec());

    let err = upload_file(&client, &file, "cv", None).await.unwrap_err();

    assert!(matches!(err, UploadError::MissingUrl), "{err:?}");
}

#[tokio::test]
async fn url_inside_data_envelope_is_returned() {
    let (base_url, _state) = spawn_mock().await;
    let client = client_for(&format!("{}/enveloped", base_url));
    let file = UploadFile::new("resume.pdf", MIME_PDF, b"%PDF-1.4".to_vec());

    let url = upload_file(&client, &file, "cv", None).await.unwrap();

    assert_eq!(url, "/files/resume.pdf");
}

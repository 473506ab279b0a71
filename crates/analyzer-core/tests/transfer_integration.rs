//! Integration tests for [`HttpExtractor`] against a stub extraction service.
//!
//! Each test starts a `wiremock` server standing in for the service and
//! drives the full upload -> session -> display path.

use std::time::Duration;

use analyzer_core::{
    Completion, DisplayContent, Extractor, HttpExtractor, SelectedFile, Session, UploadError,
    upload_path,
};
use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn extractor_for(server: &MockServer) -> HttpExtractor {
    HttpExtractor::new(
        Some(format!("{}/api/analyze", server.uri())),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn dropped_pdf_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains(r#"name="file"; filename="report.pdf""#))
        .and(body_string_contains("%PDF-1.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "extracted_text": "Line1\nLine2",
            "full_text_length": 11,
            "word_count": 2,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("report.pdf");
    std::fs::write(&pdf, b"%PDF-1.7\n...").unwrap();

    let extractor = extractor_for(&server);
    let mut session = Session::new();
    let id = session.begin_upload("report.pdf");
    let outcome = upload_path(&extractor, &pdf).await;
    session.complete(id, outcome);

    assert_eq!(
        session.display(),
        DisplayContent::Text("Line1\nLine2".to_string())
    );
    let lines: Vec<&str> = session.text().unwrap().lines().collect();
    assert_eq!(lines, vec!["Line1", "Line2"]);
}

#[tokio::test]
async fn empty_text_shows_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"extracted_text": ""})),
        )
        .mount(&server)
        .await;

    let resp = extractor_for(&server)
        .extract(SelectedFile::from_bytes("blank.png", vec![0x89, b'P', b'N', b'G']))
        .await
        .unwrap();
    assert_eq!(resp.extracted_text.as_deref(), Some(""));

    let mut session = Session::new();
    let id = session.begin_upload("blank.png");
    session.complete::<UploadError>(id, Ok(resp));
    assert_eq!(session.display(), DisplayContent::Placeholder);
}

#[tokio::test]
async fn missing_field_shows_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .mount(&server)
        .await;

    let resp = extractor_for(&server)
        .extract(SelectedFile::from_bytes("a.pdf", b"%PDF-".to_vec()))
        .await
        .unwrap();
    assert!(resp.extracted_text.is_none());

    let mut session = Session::new();
    let id = session.begin_upload("a.pdf");
    session.complete::<UploadError>(id, Ok(resp));
    assert_eq!(session.display(), DisplayContent::Placeholder);
}

#[tokio::test]
async fn service_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            serde_json::json!({"error": "No text could be extracted from the file"}),
        ))
        .mount(&server)
        .await;

    let err = extractor_for(&server)
        .extract(SelectedFile::from_bytes("a.pdf", b"%PDF-".to_vec()))
        .await
        .unwrap_err();
    match &err {
        UploadError::Status { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "No text could be extracted from the file");
        }
        other => panic!("expected Status error, got {other:?}"),
    }

    let mut session = Session::new();
    let id = session.begin_upload("a.pdf");
    session.complete::<UploadError>(id, Err(err));
    assert_eq!(
        session.display().render_plain(),
        "Upload failed: server returned 400: No text could be extracted from the file. Try again."
    );
}

#[tokio::test]
async fn non_json_error_body_is_used_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway\n"))
        .mount(&server)
        .await;

    let err = extractor_for(&server)
        .extract(SelectedFile::from_bytes("a.pdf", vec![]))
        .await
        .unwrap_err();
    assert!(
        matches!(&err, UploadError::Status { status: 502, message } if message == "Bad Gateway")
    );
}

#[tokio::test]
async fn malformed_success_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = extractor_for(&server)
        .extract(SelectedFile::from_bytes("a.pdf", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let extractor = HttpExtractor::new(
        Some(format!("http://127.0.0.1:{port}/api/analyze")),
        Duration::from_secs(2),
    )
    .unwrap();

    let err = extractor
        .extract(SelectedFile::from_bytes("a.pdf", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::Transport(_)));
}

#[tokio::test]
async fn overlapping_uploads_keep_latest_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains(r#"filename="slow.pdf""#))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"extracted_text": "slow"}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains(r#"filename="fast.pdf""#))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"extracted_text": "fast"})),
        )
        .mount(&server)
        .await;

    let extractor = extractor_for(&server);
    let mut session = Session::new();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    for name in ["slow.pdf", "fast.pdf"] {
        let id = session.begin_upload(name);
        let extractor = extractor.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = extractor
                .extract(SelectedFile::from_bytes(name, vec![]))
                .await;
            let _ = tx.send((name, id, outcome));
        });
    }
    drop(tx);

    // Replies are applied in the order they come off the wire
    let mut arrivals = Vec::new();
    while let Some((name, id, outcome)) = rx.recv().await {
        arrivals.push((name, session.complete(id, outcome)));
    }

    assert_eq!(
        arrivals,
        vec![("fast.pdf", Completion::Applied), ("slow.pdf", Completion::Stale)]
    );
    assert_eq!(session.text(), Some("fast"));
}

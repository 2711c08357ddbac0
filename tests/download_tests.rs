//! Document downloads and per-class batches.

use academy_dl::{ClassArgs, ClassEntry, Error, PortalClientBuilder, Status};
use reqwest::header::HeaderValue;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::fixtures::*;
use common::helpers::*;

#[tokio::test]
async fn test_disposition_filename_beats_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DOWNLOAD_PATH}aaaa1111")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"PK\x03\x04slides".to_vec(), "application/pdf")
                .insert_header(
                    "content-disposition",
                    "attachment; filename*=UTF-8''Unit%202%20Slides.pptx",
                ),
        )
        .mount(&server)
        .await;

    let temp_dir = create_temp_dir();
    let client = create_test_client(&server);
    let saved = client
        .download_all(&["aaaa1111".to_string()], 1, "Intro to Sets", temp_dir.path())
        .await
        .expect("download");

    assert_eq!(saved, vec![temp_dir.path().join("Unit 2 Slides.pptx")]);
    assert_file_content(&saved[0], b"PK\x03\x04slides");
}

#[tokio::test]
async fn test_raw_utf8_disposition_filename_is_kept() {
    let server = MockServer::start().await;
    let disposition =
        HeaderValue::from_bytes("attachment; filename=\"Ünit 1 Notes.pptx\"".as_bytes())
            .expect("obs-text header value");
    Mock::given(method("GET"))
        .and(path(format!("{DOWNLOAD_PATH}aaaa1111")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"PK\x03\x04notes".to_vec(), "application/pdf")
                .insert_header("content-disposition", disposition),
        )
        .mount(&server)
        .await;

    let temp_dir = create_temp_dir();
    let client = create_test_client(&server);
    let saved = client
        .download_all(&["aaaa1111".to_string()], 1, "Intro", temp_dir.path())
        .await
        .expect("download");

    assert_eq!(saved, vec![temp_dir.path().join("Ünit 1 Notes.pptx")]);
}

#[tokio::test]
async fn test_multiple_documents_get_numbered_names() {
    let server = MockServer::start().await;
    mount_pdf(&server, "aaaa1111", b"%PDF-1.4 first").await;
    mount_pdf(&server, "bbbb2222", b"%PDF-1.4 second").await;

    let temp_dir = create_temp_dir();
    let out_dir = temp_dir.path().join("nested").join("unit2");
    let client = create_test_client(&server);
    let ids = vec!["aaaa1111".to_string(), "bbbb2222".to_string()];
    let saved = client
        .download_all(&ids, 4, "Venn Diagrams", &out_dir)
        .await
        .expect("download");

    assert_eq!(saved.len(), 2);
    assert_eq!(
        list_file_names(&out_dir),
        vec!["04_1_Venn_Diagrams.pdf", "04_2_Venn_Diagrams.pdf"]
    );
}

#[tokio::test]
async fn test_failed_documents_are_skipped() {
    let server = MockServer::start().await;
    mount_pdf(&server, "aaaa1111", b"%PDF-1.4").await;
    Mock::given(method("GET"))
        .and(path(format!("{DOWNLOAD_PATH}dead0000")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{DOWNLOAD_PATH}beef0000")))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let temp_dir = create_temp_dir();
    let client = create_test_client(&server);
    let ids = vec![
        "dead0000".to_string(),
        "aaaa1111".to_string(),
        "beef0000".to_string(),
    ];
    let saved = client
        .download_all(&ids, 2, "Set Operations", temp_dir.path())
        .await
        .expect("download");

    assert_eq!(saved, vec![temp_dir.path().join("02_2_Set_Operations.pdf")]);
}

#[tokio::test]
async fn test_fetch_document_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DOWNLOAD_PATH}dead0000")))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{DOWNLOAD_PATH}beef0000")))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    match client.fetch_document("dead0000").await.unwrap_err() {
        Error::DownloadFailed { id, reason } => {
            assert_eq!(id, "dead0000");
            assert!(reason.contains("403"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let err = client.fetch_document("beef0000").await.unwrap_err();
    assert!(matches!(err, Error::DownloadFailed { .. }));
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_download_classes_reports_each_selection() {
    init_tracing();
    let server = MockServer::start().await;
    mount_profile(&server).await;
    mount_preview(&server, "c0ffee01", &preview_with("aaaa1111")).await;
    mount_preview(&server, "c0ffee02", PREVIEW_EMPTY).await;
    mount_action(&server, "343", PREVIEW_EMPTY).await;
    mount_pdf(&server, "aaaa1111", b"%PDF-1.4").await;

    let classes = vec![
        create_class_entry("Intro to Sets", "c0ffee01", "1"),
        create_class_entry("Set Operations", "c0ffee02", "2"),
        ClassEntry {
            title: String::new(),
            resource_counts: Vec::new(),
            args: ClassArgs::default(),
        },
    ];

    let temp_dir = create_temp_dir();
    let client = create_test_client(&server);
    let summaries = client
        .download_classes(&classes, &[1, 2, 3, 7], temp_dir.path())
        .await;

    assert_eq!(summaries.len(), 4);
    assert_eq!(summaries[0].status(), &Status::Success);
    assert_eq!(
        summaries[0].saved(),
        &[temp_dir.path().join("01_Intro_to_Sets.pdf")]
    );
    assert_eq!(summaries[1].status(), &Status::NoDocuments);
    assert_eq!(summaries[2].title(), "class_3");
    assert_eq!(summaries[2].status(), &Status::NoDocuments);
    assert!(matches!(summaries[3].status(), Status::Skipped(_)));
    assert_eq!(summaries[3].index(), 7);
}

#[tokio::test]
async fn test_download_classes_partial_batch() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    mount_preview(&server, "c0ffee01", PREVIEW_TWO_DOCS).await;
    mount_pdf(&server, "aaaa1111", b"%PDF-1.4").await;
    Mock::given(method("GET"))
        .and(path(format!("{DOWNLOAD_PATH}bbbb2222")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp_dir = create_temp_dir();
    let client = create_test_client(&server);
    let classes = vec![create_class_entry("Intro to Sets", "c0ffee01", "1")];
    let summaries = client.download_classes(&classes, &[1], temp_dir.path()).await;

    assert_eq!(summaries[0].status(), &Status::Partial);
    assert_eq!(summaries[0].failed(), &["bbbb2222".to_string()]);
    assert_file_exists(&temp_dir.path().join("01_1_Intro_to_Sets.pdf"));
}

fn class_without_handler() -> ClassEntry {
    ClassEntry {
        title: "Orientation".into(),
        resource_counts: Vec::new(),
        args: ClassArgs::default(),
    }
}

#[tokio::test]
async fn test_batch_pause_only_between_classes() {
    let pause = Duration::from_millis(200);
    let server = MockServer::start().await;
    let client = PortalClientBuilder::hidden()
        .base_url(server.uri())
        .batch_pause(pause)
        .build()
        .expect("client");
    let temp_dir = create_temp_dir();
    let classes = vec![class_without_handler(), class_without_handler(), class_without_handler()];

    let started = Instant::now();
    let summaries = client.download_classes(&classes, &[1], temp_dir.path()).await;
    assert_eq!(summaries.len(), 1);
    assert!(started.elapsed() < pause, "no pause before the first class");

    let started = Instant::now();
    let summaries = client
        .download_classes(&classes, &[1, 2, 3], temp_dir.path())
        .await;
    let elapsed = started.elapsed();
    assert_eq!(summaries.len(), 3);
    assert!(elapsed >= pause * 2, "two pauses expected, took {elapsed:?}");
    assert!(elapsed < pause * 3, "no pause after the last class, took {elapsed:?}");
}

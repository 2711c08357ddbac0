use super::fixtures::*;
use academy_dl::{ClassArgs, ClassEntry, PortalClient, PortalClientBuilder};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LOGIN_PAGE_PATH: &str = "/Academy/";
pub const LOGIN_POST_PATH: &str = "/Academy/j_spring_security_check";
pub const PROFILE_PATH: &str = "/Academy/s/studentProfilePESU";
pub const SEMESTERS_PATH: &str = "/Academy/a/studentProfilePESU/getStudentSemestersPESU";
pub const DISPATCH_PATH: &str = "/Academy/s/studentProfilePESUAdmin";
pub const DOWNLOAD_PATH: &str = "/Academy/a/referenceMeterials/downloadslidecoursedoc/";

pub const TEST_USERNAME: &str = "PES1UG20CS001";
pub const TEST_PASSWORD: &str = "hunter2";

/// Installs a test subscriber honouring `RUST_LOG`; repeated calls are fine.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a client pointed at the mock server with hidden progress bars
/// and no pause between classes.
pub fn create_test_client(server: &MockServer) -> PortalClient {
    PortalClientBuilder::hidden()
        .base_url(server.uri())
        .batch_pause(Duration::ZERO)
        .timeout(Duration::from_secs(5))
        .download_timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client")
}

/// A class entry carrying the full handler arguments.
pub fn create_class_entry(title: &str, uuid: &str, class_no: &str) -> ClassEntry {
    ClassEntry {
        title: title.to_string(),
        resource_counts: vec!["-".into(), "-".into(), "1".into()],
        args: ClassArgs {
            uuid: Some(uuid.to_string()),
            course_id: Some("9001".to_string()),
            unit_id: Some("500".to_string()),
            class_no: Some(class_no.to_string()),
            resource_type: Some("2".to_string()),
        },
    }
}

// === Mock Helpers ===

pub async fn mount_login_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(LOGIN_PAGE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(LOGIN_PAGE)
                .insert_header("set-cookie", "JSESSIONID=test-session; Path=/"),
        )
        .mount(server)
        .await;
}

pub async fn mount_login_post(server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path(LOGIN_POST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(PROFILE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .mount(server)
        .await;
}

/// Mounts a dispatch GET answering `body` for the given `actionType`.
pub async fn mount_action(server: &MockServer, action: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(DISPATCH_PATH))
        .and(query_param("actionType", action))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mounts the preview answer of one class uuid.
pub async fn mount_preview(server: &MockServer, uuid: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(DISPATCH_PATH))
        .and(query_param("actionType", "60"))
        .and(query_param("unitid", uuid))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mounts a PDF document without a `Content-Disposition` header.
pub async fn mount_pdf(server: &MockServer, id: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("{DOWNLOAD_PATH}{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(content.to_vec(), "application/pdf"))
        .mount(server)
        .await;
}

// === Assertion Helpers ===

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file holds exactly `expected`
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = fs::read(path).expect("Failed to read file");
    assert_eq!(content, expected, "Content mismatch at path: {:?}", path);
}

/// Names of the files in `dir`, sorted.
pub fn list_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

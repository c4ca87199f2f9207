//! Tests for writing generated documents to disk

mod common;

use common::finished_session;
use tempfile::TempDir;
use veo_prompt::prompt::PromptDocument;
use veo_prompt::report::{default_export_path, export_document};

#[test]
fn test_export_writes_document_with_trailing_newline() {
    let session = finished_session("Glacier");
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("glacier.json");

    export_document(session.generated_document(), &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, format!("{}\n", session.generated_document()));

    let parsed: PromptDocument = serde_json::from_str(&written).unwrap();
    assert_eq!(Some(&parsed), session.document());
}

#[test]
fn test_export_creates_parent_directories() {
    let session = finished_session("Glacier");
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a").join("b").join("doc.json");

    export_document(session.generated_document(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_export_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("doc.json");
    std::fs::write(&path, "stale").unwrap();

    let session = finished_session("Fresh");
    export_document(session.generated_document(), &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Fresh"));
    assert!(!written.contains("stale"));
}

#[test]
fn test_default_export_path_is_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = default_export_path(temp_dir.path());

    assert_eq!(path.parent(), Some(temp_dir.path()));
    let name = path.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("veo3_prompt_"));
    assert!(name.ends_with(".json"));
}

//! Tests for reading CLI inputs from disk.

use seo_kit::audit::audit_text;
use seo_kit::input::read_input;
use seo_kit::keywords::catalog;
use seo_kit::parse::extract_page_text;
use seo_kit::{analyze_all, WarningType};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_read_text_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "USB not recognized after the update.").unwrap();
    writeln!(file, "Open Device Manager and check the USB controller now.").unwrap();

    let text = read_input(file.path()).unwrap();
    let results = analyze_all(&text, &["device manager", "usb controller"]);
    assert_eq!(results[0].count, 1);
    assert_eq!(results[1].count, 1);
}

#[test]
fn test_missing_file_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.html");
    let err = read_input(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("missing.html"), "{}", message);
}

#[test]
fn test_html_file_body_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.html");
    std::fs::write(
        &path,
        r#"<html><head><title>USB Fix</title><script>var usb = 1;</script></head>
        <body><h1>USB troubleshooting</h1><style>p { color: red }</style>
        <p>Update the usb driver.</p></body></html>"#,
    )
    .unwrap();

    let page = extract_page_text(&read_input(&path).unwrap());
    assert_eq!(page.title.as_deref(), Some("USB Fix"));
    assert!(page.body_text.contains("USB troubleshooting"));
    assert!(page.body_text.contains("Update the usb driver."));
    assert!(!page.body_text.contains("color"));
    assert!(!page.body_text.contains("var usb"));
}

#[test]
fn test_audit_empty_file() {
    let file = NamedTempFile::new().unwrap();
    let report = audit_text(&read_input(file.path()).unwrap(), catalog());
    assert_eq!(report.word_count, 0);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].warning, WarningType::EmptyBody);
}

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use predicates::prelude::*;
use tempfile::TempDir;

fn resumetrics(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("resumetrics").unwrap();
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .arg("--database")
        .arg(dir.path().join("resumes.db"));
    cmd
}

fn write_config(dir: &TempDir) {
    fs::write(dir.path().join("config.json"), "{}").unwrap();
}

/// Single-page PDF with one text line per entry.
fn write_pdf(path: &Path, lines: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let text = format!("{} ", line);
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new("Td", vec![72.into(), (720 - 14 * i as i64).into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(text)]));
        operations.push(Operation::new("ET", vec![]));
    }

    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        Content { operations }.encode().unwrap(),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

#[test]
fn parse_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    write_config(&dir);

    resumetrics(&dir)
        .args(["parse", "missing.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn parse_prints_extracted_fields() {
    let dir = TempDir::new().unwrap();
    write_config(&dir);
    write_pdf(
        &dir.path().join("jane.pdf"),
        &["Jane Doe", "jane@example.com", "Python and Git, 4 years of experience"],
    );

    resumetrics(&dir)
        .args(["parse", "jane.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"email\": \"jane@example.com\""))
        .stdout(predicate::str::contains("\"skills\": \"git, python\""))
        .stdout(predicate::str::contains("\"experience\": 4"));
}

#[test]
fn ingest_reports_rejected_upload() {
    let dir = TempDir::new().unwrap();
    write_config(&dir);
    fs::write(dir.path().join("resume.txt"), "Jane Doe").unwrap();

    resumetrics(&dir)
        .args(["ingest", "resume.txt", "--continue-on-error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not a PDF file"))
        .stdout(predicate::str::contains("1 failed"));

    resumetrics(&dir)
        .args(["ingest", "resume.txt"])
        .assert()
        .failure();
}

#[test]
fn ingest_then_report() {
    let dir = TempDir::new().unwrap();
    write_config(&dir);
    write_pdf(
        &dir.path().join("a.pdf"),
        &["Jane Doe", "jane@example.com", "Python and SQL, 3 years of experience"],
    );
    write_pdf(
        &dir.path().join("b.pdf"),
        &["John Roe", "john@example.com", "Python, 8 years of experience"],
    );
    write_pdf(
        &dir.path().join("c.pdf"),
        &["Jane Doe", "jane@example.com", "Java"],
    );

    resumetrics(&dir)
        .args(["ingest", "*.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 saved, 1 duplicates"));

    let charts = dir.path().join("charts");
    resumetrics(&dir)
        .args(["report", "--output", "report.json", "--html", "dashboard.html"])
        .arg("--charts-dir")
        .arg(&charts)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(report["skills_data"][0]["skill"], "python");
    assert_eq!(report["skills_data"][0]["count"], 2);
    assert_eq!(report["exp_data"], serde_json::json!([3, 8]));

    let html = fs::read_to_string(dir.path().join("dashboard.html")).unwrap();
    assert!(html.contains("data:image/png;base64,"));
    assert!(charts.join("skills.png").is_file());
    assert!(charts.join("experience.png").is_file());
}

#[test]
fn report_on_empty_database() {
    let dir = TempDir::new().unwrap();
    write_config(&dir);

    resumetrics(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"skills_data\": []"))
        .stdout(predicate::str::contains("\"exp_data\": []"));
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();

    resumetrics(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"top_skills\": 10"));

    resumetrics(&dir)
        .args(["config", "set", "analytics.top_skills", "5"])
        .assert()
        .success();

    resumetrics(&dir)
        .args(["config", "get", "analytics.top_skills"])
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));

    resumetrics(&dir)
        .args(["config", "set", "analytics.no_such_key", "1"])
        .assert()
        .failure();
}

use std::fs;
use std::path::Path;
use tempfile::tempdir;

use file_etl::errors::Error;
use file_etl::extract::{SourceFormat, extract_file};
use file_etl::table::Value;

fn write_source(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_extract_csv_file() {
    let temp_dir = tempdir().unwrap();
    let path = write_source(
        temp_dir.path(),
        "source1.csv",
        "name,height,weight\nalex,65.78,112.99\njamie,71.52,136.49\n",
    );

    let table = extract_file(&path).unwrap();
    assert_eq!(table.columns(), ["name", "height", "weight"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.value(1, "height"), Some(&Value::Float(71.52)));
    assert_eq!(table.value(0, "name"), Some(&Value::Text("alex".to_string())));
}

#[test]
fn test_extract_json_lines_file() {
    let temp_dir = tempdir().unwrap();
    let path = write_source(
        temp_dir.path(),
        "source2.json",
        "{\"name\":\"alex\",\"height\":65.78}\n\n{\"name\":\"sam\",\"weight\":120,\"active\":true}\n",
    );

    let table = extract_file(&path).unwrap();
    assert_eq!(table.columns(), ["name", "height", "weight", "active"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.value(0, "weight"), None);
    assert_eq!(table.value(1, "weight"), Some(&Value::Integer(120)));
    assert_eq!(table.value(1, "active"), Some(&Value::Boolean(true)));
}

#[test]
fn test_extract_xml_file() {
    let temp_dir = tempdir().unwrap();
    let path = write_source(
        temp_dir.path(),
        "source3.xml",
        r#"<?xml version="1.0"?>
<data>
    <row name="alex" height="65.78" weight="112.99"/>
    <row name="jamie &amp; co" height="71.52">
        <note ignored="yes"/>
    </row>
</data>
"#,
    );

    let table = extract_file(&path).unwrap();
    assert_eq!(table.columns(), ["name", "height", "weight"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.value(1, "name"), Some(&Value::Text("jamie & co".to_string())));
    assert_eq!(table.value(1, "weight"), None);
    assert!(!table.has_column("ignored"));
}

#[test]
fn test_extract_ignores_extension_case() {
    let temp_dir = tempdir().unwrap();
    let path = write_source(temp_dir.path(), "UPPER.CSV", "height\n60\n");

    assert_eq!(SourceFormat::from_path(&path).unwrap(), SourceFormat::Csv);
    assert_eq!(extract_file(&path).unwrap().row_count(), 1);
}

#[test]
fn test_extract_unsupported_file() {
    let temp_dir = tempdir().unwrap();
    let path = write_source(temp_dir.path(), "data.txt", "height\n60\n");

    let error = extract_file(&path).unwrap_err();
    assert!(
        matches!(error, Error::UnsupportedFormat { .. }),
        "Expected an unsupported format error, got: {error}"
    );
    assert!(error.to_string().contains("data.txt"));
}

#[test]
fn test_extract_missing_file() {
    let temp_dir = tempdir().unwrap();
    let error = extract_file(&temp_dir.path().join("absent.csv")).unwrap_err();
    assert!(
        matches!(error, Error::FileOperation { .. }),
        "Expected a file operation error, got: {error}"
    );
}

#[test]
fn test_extract_malformed_json_line_reports_line_number() {
    let temp_dir = tempdir().unwrap();
    let path = write_source(
        temp_dir.path(),
        "broken.json",
        "{\"height\":60}\n{\"height\":\n",
    );

    let error = extract_file(&path).unwrap_err();
    assert!(
        error.to_string().contains("line 2"),
        "Error message should name the bad line: {error}"
    );
}

#[test]
fn test_extract_xml_with_two_roots() {
    let temp_dir = tempdir().unwrap();
    let path = write_source(
        temp_dir.path(),
        "twice.xml",
        "<data><row height=\"60\"/></data><data/>",
    );

    let error = extract_file(&path).unwrap_err();
    assert!(
        error.to_string().contains("more than one root"),
        "Error message should mention the extra root: {error}"
    );
}

#[test]
fn test_extract_header_only_csv() {
    let temp_dir = tempdir().unwrap();
    let path = write_source(temp_dir.path(), "empty.csv", "height,weight\n");

    let table = extract_file(&path).unwrap();
    assert_eq!(table.columns(), ["height", "weight"]);
    assert!(table.is_empty());
}

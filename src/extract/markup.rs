//! XML extraction
//!
//! The immediate children of the root element become records; each child's
//! attributes are its fields. Text and deeper elements are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::errors::{Result, file_operation_error, xml_parsing_error, xml_structure_error};
use crate::table::{Cell, RecordTable, Value};

pub fn extract_xml(path: &Path) -> Result<RecordTable> {
    let file = File::open(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "open"))?;
    parse_xml(BufReader::new(file), path)
}

/// Parses an XML document into a record table
///
/// Columns are the union of attribute names in first-seen order. `path` is
/// only used in error messages.
pub fn parse_xml<R: BufRead>(source: R, path: &Path) -> Result<RecordTable> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut table = RecordTable::new();
    let mut buffer = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader
            .read_event_into(&mut buffer)
            .map_err(|e| xml_parsing_error(e, path.to_path_buf()))?
        {
            Event::Start(element) => {
                match depth {
                    0 => open_root(&mut seen_root, path)?,
                    1 => table.push_record(attribute_record(&element, path)?),
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(element) => match depth {
                0 => open_root(&mut seen_root, path)?,
                1 => table.push_record(attribute_record(&element, path)?),
                _ => {}
            },
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }

        buffer.clear();
    }

    if !seen_root {
        return Err(xml_structure_error(
            path.to_path_buf(),
            "document has no root element",
        ));
    }
    if depth != 0 {
        return Err(xml_structure_error(
            path.to_path_buf(),
            "document ended before the root element was closed",
        ));
    }

    Ok(table)
}

fn open_root(seen_root: &mut bool, path: &Path) -> Result<()> {
    if *seen_root {
        return Err(xml_structure_error(
            path.to_path_buf(),
            "found more than one root element",
        ));
    }
    *seen_root = true;
    Ok(())
}

/// Collects the attributes of one child element as `(name, cell)` pairs
fn attribute_record(element: &BytesStart, path: &Path) -> Result<Vec<(String, Cell)>> {
    element
        .attributes()
        .map(|attribute| {
            let attribute = attribute.map_err(|e| xml_parsing_error(e, path.to_path_buf()))?;
            let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|e| xml_parsing_error(e, path.to_path_buf()))?;
            Ok((name, Value::infer(&value)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<RecordTable> {
        parse_xml(text.as_bytes(), Path::new("test.xml"))
    }

    #[test]
    fn test_parse_xml_children_attributes() {
        let table = parse(
            r#"<?xml version="1.0"?>
<people>
    <person name="ann" height="60"/>
    <person name="bob" weight="150.5">
        <note>ignored</note>
    </person>
</people>"#,
        )
        .unwrap();

        assert_eq!(table.columns(), ["name", "height", "weight"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.value(0, "height"), Some(&Value::Integer(60)));
        assert_eq!(table.value(1, "weight"), Some(&Value::Float(150.5)));
        assert_eq!(table.value(1, "height"), None);
    }

    #[test]
    fn test_nested_elements_are_not_records() {
        let table = parse(r#"<root><a x="1"><b y="2"/></a></root>"#).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.columns(), ["x"]);
    }

    #[test]
    fn test_child_without_attributes_is_an_empty_row() {
        let table = parse(r#"<root><a/><a k="v"/></root>"#).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.value(0, "k"), None);
        assert_eq!(table.value(1, "k"), Some(&Value::Text("v".into())));
    }

    #[test]
    fn test_attribute_values_are_unescaped() {
        let table = parse(r#"<root><a note="fish &amp; chips"/></root>"#).unwrap();
        assert_eq!(
            table.value(0, "note"),
            Some(&Value::Text("fish & chips".into()))
        );
    }

    #[test]
    fn test_empty_root() {
        let table = parse("<root/>").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let error = parse("<?xml version=\"1.0\"?>").unwrap_err();
        assert!(error.to_string().contains("no root element"));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse("<root><a x=\"1\"></root>").is_err());
        assert!(parse("<root><a/>").is_err());
    }
}

use phone_extractor::adapters::writer::{export_phone_numbers, SHEET_NAME};
use std::io::{Cursor, Read};
use zip::ZipArchive;

#[test]
fn test_export_is_well_formed_xlsx_package() {
    let numbers = vec!["9876543210".to_string(), "98765 43210".to_string()];
    let payload = export_phone_numbers(&numbers).unwrap();

    let mut archive = ZipArchive::new(Cursor::new(payload)).unwrap();
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();

    assert!(names.contains(&"[Content_Types].xml".to_string()));
    assert!(names.contains(&"xl/workbook.xml".to_string()));
    assert!(names.contains(&"xl/worksheets/sheet1.xml".to_string()));
    assert!(!names.contains(&"xl/worksheets/sheet2.xml".to_string()));

    let mut workbook_xml = String::new();
    archive
        .by_name("xl/workbook.xml")
        .unwrap()
        .read_to_string(&mut workbook_xml)
        .unwrap();
    assert!(workbook_xml.contains(&format!("name=\"{}\"", SHEET_NAME)));

    let mut shared_strings = String::new();
    archive
        .by_name("xl/sharedStrings.xml")
        .unwrap()
        .read_to_string(&mut shared_strings)
        .unwrap();
    assert!(shared_strings.contains("Phone Numbers"));
    assert!(shared_strings.contains("9876543210"));
    assert!(shared_strings.contains("98765 43210"));
}

#[test]
fn test_export_single_number_has_header_and_one_row() {
    let payload = export_phone_numbers(&["1111122222".to_string()]).unwrap();

    let mut archive = ZipArchive::new(Cursor::new(payload)).unwrap();
    let mut sheet_xml = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut sheet_xml)
        .unwrap();

    assert_eq!(sheet_xml.matches("<row ").count(), 2);
    assert!(sheet_xml.contains("<dimension ref=\"A1:A2\""));
}

use calamine::{open_workbook_auto, Data, Reader};
use phone_extractor::{CliConfig, EtlEngine, EtlError, LocalStorage, PhonePipeline, RunOutcome};
use rust_xlsxwriter::Workbook;
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

fn write_contacts_workbook(path: &Path) {
    let mut workbook = Workbook::new();

    let customers = workbook.add_worksheet();
    customers.set_name("Customers").unwrap();
    customers.write_string(0, 0, "Name").unwrap();
    customers.write_string(0, 1, "Phone").unwrap();
    customers.write_string(1, 0, "Asha").unwrap();
    customers.write_string(1, 1, "Call 9876543210 now").unwrap();
    customers.write_string(2, 0, "Ravi").unwrap();
    customers.write_number(2, 1, 1234567890.0).unwrap();
    customers.write_string(3, 0, "Meera").unwrap();
    customers.write_string(3, 1, "123456789").unwrap();

    let leads = workbook.add_worksheet();
    leads.set_name("Leads").unwrap();
    leads.write_string(0, 0, "98765 43210 extra").unwrap();
    leads.write_string(1, 0, "dup 9876543210").unwrap();
    leads.write_string(5, 3, "987-654-3210").unwrap();

    workbook.save(path).unwrap();
}

fn config_for(input: &Path, output_dir: &Path) -> CliConfig {
    CliConfig {
        input_path: input.to_str().unwrap().to_string(),
        output_path: Some(output_dir.to_str().unwrap().to_string()),
        sort: true,
        ..CliConfig::default()
    }
}

fn read_output_column(path: &Path) -> (Vec<String>, Vec<Data>) {
    let mut workbook = open_workbook_auto(path).unwrap();
    let names = workbook.sheet_names();
    let range = workbook.worksheet_range(&names[0]).unwrap();
    assert_eq!(range.width(), 1);
    let column = range.rows().map(|row| row[0].clone()).collect();
    (names, column)
}

#[tokio::test]
async fn test_end_to_end_xlsx_extraction() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.xlsx");
    let output_dir = temp_dir.path().join("out");
    write_contacts_workbook(&input);

    let pipeline = PhonePipeline::new(LocalStorage::default(), config_for(&input, &output_dir));
    let outcome = EtlEngine::new(pipeline).run().await.unwrap();

    assert_eq!(
        outcome.numbers(),
        ["1234567890", "98765 43210", "9876543210"]
    );

    let output_path = output_dir.join("extracted_phone_numbers.xlsx");
    assert_eq!(outcome.output_path(), Some(output_path.to_str().unwrap()));
    assert!(output_path.exists());

    let (names, column) = read_output_column(&output_path);
    assert_eq!(names, vec!["Phone Numbers".to_string()]);
    assert_eq!(
        column,
        vec![
            Data::String("Phone Numbers".to_string()),
            Data::String("1234567890".to_string()),
            Data::String("98765 43210".to_string()),
            Data::String("9876543210".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_end_to_end_csv_extraction() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("leads.csv");
    std::fs::write(
        &input,
        "name,phone,notes\nAsha,9876543210,\nRavi,98765 43210,call 9876543210 again\n",
    )
    .unwrap();

    let mut config = config_for(&input, temp_dir.path());
    config.sort = false;
    config.file_name = Some("numbers.xlsx".to_string());

    let pipeline = PhonePipeline::new(LocalStorage::default(), config);
    let outcome = EtlEngine::new(pipeline).run().await.unwrap();

    let numbers: HashSet<&str> = outcome.numbers().iter().map(String::as_str).collect();
    assert_eq!(numbers, HashSet::from(["9876543210", "98765 43210"]));

    let (_, column) = read_output_column(&temp_dir.path().join("numbers.xlsx"));
    assert_eq!(column.len(), 3);
    assert_eq!(column[0], Data::String("Phone Numbers".to_string()));

    let exported: HashSet<String> = column[1..].iter().map(|cell| cell.to_string()).collect();
    assert_eq!(
        exported,
        HashSet::from(["9876543210".to_string(), "98765 43210".to_string()])
    );
}

#[tokio::test]
async fn test_no_matches_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.csv");
    std::fs::write(&input, "name,phone\nAsha,123456789\nRavi,n/a\n").unwrap();
    let output_dir = temp_dir.path().join("out");

    let pipeline = PhonePipeline::new(LocalStorage::default(), config_for(&input, &output_dir));
    let outcome = EtlEngine::new(pipeline).run().await.unwrap();

    assert_eq!(outcome, RunOutcome::NoMatches);
    assert!(!output_dir.join("extracted_phone_numbers.xlsx").exists());
}

#[tokio::test]
async fn test_empty_csv_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("blank.csv");
    std::fs::write(&input, "").unwrap();

    let pipeline = PhonePipeline::new(LocalStorage::default(), config_for(&input, temp_dir.path()));
    let outcome = EtlEngine::new(pipeline).run().await.unwrap();

    assert_eq!(outcome, RunOutcome::NoMatches);
}

#[tokio::test]
async fn test_corrupt_workbook_reports_file_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.xlsx");
    std::fs::write(&input, b"this is not a spreadsheet").unwrap();
    let output_dir = temp_dir.path().join("out");

    let pipeline = PhonePipeline::new(LocalStorage::default(), config_for(&input, &output_dir));
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, EtlError::FileReadError { .. }));
    assert!(err.user_friendly_message().starts_with("Error reading the file:"));
    assert_eq!(err.exit_code(), 1);
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_missing_input_reports_file_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("nowhere.xlsx");

    let pipeline = PhonePipeline::new(LocalStorage::default(), config_for(&input, temp_dir.path()));
    let result = EtlEngine::new(pipeline).run().await;

    assert!(matches!(result, Err(EtlError::FileReadError { .. })));
}

#[tokio::test]
async fn test_repeated_runs_yield_same_numbers() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.xlsx");
    write_contacts_workbook(&input);

    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut config = config_for(&input, temp_dir.path());
        config.sort = false;
        let pipeline = PhonePipeline::new(LocalStorage::default(), config);
        let outcome = EtlEngine::new(pipeline).run().await.unwrap();
        let numbers: HashSet<String> = outcome.numbers().iter().cloned().collect();
        runs.push(numbers);
    }

    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[0].len(), 3);
}

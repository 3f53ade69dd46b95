use crate::domain::model::{CellValue, Sheet};
use crate::utils::error::{EtlError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader, SheetType};
use std::io::Cursor;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Workbook,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(InputFormat::Workbook),
            _ => Err(EtlError::file_read(format!(
                "unsupported file format '{}'",
                path
            ))),
        }
    }
}

/// 依副檔名解析成工作表清單；任何解析失敗都回報為 FileReadError
pub fn read_sheets(path: &str, bytes: Vec<u8>) -> Result<Vec<Sheet>> {
    match InputFormat::from_path(path)? {
        InputFormat::Csv => {
            let name = Path::new(path)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("Sheet1");
            Ok(vec![read_csv(name, &bytes)?])
        }
        InputFormat::Workbook => read_workbook(bytes),
    }
}

pub fn read_workbook(bytes: Vec<u8>) -> Result<Vec<Sheet>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(EtlError::file_read)?;

    // 圖表工作表沒有儲存格，略過
    let sheet_names: Vec<String> = workbook
        .sheets_metadata()
        .iter()
        .filter(|meta| matches!(meta.typ, SheetType::WorkSheet))
        .map(|meta| meta.name.clone())
        .collect();

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in sheet_names {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(EtlError::file_read)?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(convert_value).collect())
            .collect();

        tracing::debug!(
            "Loaded sheet '{}' ({} rows x {} columns)",
            sheet_name,
            range.height(),
            range.width()
        );
        sheets.push(Sheet::new(sheet_name, rows));
    }

    Ok(sheets)
}

pub fn read_csv(sheet_name: &str, bytes: &[u8]) -> Result<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    // 非 UTF-8 位元組以替代字元保留，不讓整個檔案失敗
    for record in reader.byte_records() {
        let record = record.map_err(EtlError::file_read)?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(String::from_utf8_lossy(field).into_owned())
                    }
                })
                .collect(),
        );
    }

    tracing::debug!("Loaded CSV '{}' ({} rows)", sheet_name, rows.len());
    Ok(Sheet::new(sheet_name, rows))
}

fn convert_value(value: &Data) -> CellValue {
    match value {
        Data::Empty => CellValue::Empty,
        Data::Bool(v) => CellValue::Bool(*v),
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::String(v) => CellValue::Text(v.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::DateTime(v) => CellValue::DateTime(v.as_f64().to_string()),
        Data::DateTimeIso(v) => CellValue::DateTime(v.clone()),
        Data::DurationIso(v) => CellValue::DateTime(v.clone()),
    }
}

use crate::utils::error::Result;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

pub const SHEET_NAME: &str = "Phone Numbers";
pub const HEADER: &str = "Phone Numbers";
pub const DEFAULT_FILE_NAME: &str = "extracted_phone_numbers.xlsx";
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 單欄表格：A1 為標題，其後每列一個號碼
pub fn export_phone_numbers(numbers: &[String]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_column_width(0, 20)?;
    worksheet.write_string_with_format(0, 0, HEADER, &header_format)?;

    for (index, number) in numbers.iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        worksheet.write_string(row, 0, number)?;
    }

    let payload = workbook.save_to_buffer()?;
    tracing::debug!(
        "Encoded {} numbers into {} byte workbook",
        numbers.len(),
        payload.len()
    );
    Ok(payload)
}

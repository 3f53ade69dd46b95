use crate::domain::model::CellValue;
use regex::Regex;
use std::sync::LazyLock;

/// 「12345 67890」或「1234567890」，前後需為字詞邊界
pub const PHONE_PATTERN: &str = r"\b\d{5}\s\d{5}\b|\b\d{10}\b";

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern must compile"));

/// 由左至右回傳所有不重疊的符合字串
pub fn extract_from_text(text: &str) -> Vec<String> {
    PHONE_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn extract_phone_numbers(cell: &CellValue) -> Vec<String> {
    match cell {
        CellValue::Text(text) => extract_from_text(text),
        other => extract_from_text(&other.to_string()),
    }
}

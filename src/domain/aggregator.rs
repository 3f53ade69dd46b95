use crate::domain::extractor::extract_phone_numbers;
use crate::domain::model::{MatchSet, Sheet};

/// 掃描所有工作表的每個儲存格，收集後去重
pub fn collect_phone_numbers(sheets: &[Sheet]) -> MatchSet {
    let mut all_numbers = Vec::new();

    for sheet in sheets {
        let before = all_numbers.len();

        for row in &sheet.rows {
            for cell in row {
                all_numbers.extend(extract_phone_numbers(cell));
            }
        }

        tracing::debug!(
            "Sheet '{}': scanned {} cells, found {} matches",
            sheet.name,
            sheet.cell_count(),
            all_numbers.len() - before
        );
    }

    let total = all_numbers.len();
    let matches: MatchSet = all_numbers.into_iter().collect();
    tracing::debug!("Deduplicated {} matches into {} numbers", total, matches.len());

    matches
}

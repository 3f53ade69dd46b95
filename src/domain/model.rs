use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// 試算表儲存格的純量值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(String),
    Error(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::DateTime(s) | CellValue::Error(s) => f.write_str(s),
            CellValue::Int(v) => write!(f, "{}", v),
            // 整數值的浮點數輸出為 1234567890 而非 1234567890.0
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// 去重後的號碼集合；不保證順序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    numbers: HashSet<String>,
}

impl MatchSet {
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn contains(&self, number: &str) -> bool {
        self.numbers.contains(number)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.numbers.into_iter().collect()
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut numbers = self.into_vec();
        numbers.sort();
        numbers
    }
}

impl FromIterator<String> for MatchSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            numbers: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MatchSet {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub output_path: String,
    pub numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    NoMatches,
    Exported(ExportSummary),
}

impl RunOutcome {
    pub fn numbers(&self) -> &[String] {
        match self {
            RunOutcome::NoMatches => &[],
            RunOutcome::Exported(summary) => &summary.numbers,
        }
    }

    pub fn output_path(&self) -> Option<&str> {
        match self {
            RunOutcome::NoMatches => None,
            RunOutcome::Exported(summary) => Some(summary.output_path.as_str()),
        }
    }
}

/// `--json` 模式輸出的報表
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: String,
    pub count: usize,
    pub numbers: Vec<String>,
    pub output: Option<String>,
    pub mime_type: Option<&'static str>,
}

impl RunReport {
    pub fn new(input: &str, outcome: &RunOutcome, mime_type: &'static str) -> Self {
        Self {
            input: input.to_string(),
            count: outcome.numbers().len(),
            numbers: outcome.numbers().to_vec(),
            output: outcome.output_path().map(str::to_string),
            mime_type: outcome.output_path().map(|_| mime_type),
        }
    }

    pub fn to_json(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

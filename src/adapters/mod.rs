// Adapters layer: concrete implementations for external systems (spreadsheet formats, local storage).

pub mod reader;
pub mod storage;
pub mod writer;

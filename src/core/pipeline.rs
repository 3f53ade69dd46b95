use crate::adapters::{reader, writer};
use crate::core::{ConfigProvider, ExportSummary, MatchSet, Pipeline, Sheet, Storage};
use crate::domain::aggregator::collect_phone_numbers;
use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub struct PhonePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PhonePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_location(&self) -> String {
        Path::new(self.config.output_path())
            .join(self.config.output_file_name())
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PhonePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Sheet>> {
        let input = self.config.input_path();
        tracing::debug!("Reading spreadsheet from: {}", input);
        reader::InputFormat::from_path(input)?;

        // 找不到或讀不到輸入檔，一律視為讀檔錯誤
        let bytes = self.storage.read_file(input).await.map_err(|e| match e {
            EtlError::IoError(io) => EtlError::file_read(format!("cannot open '{}': {}", input, io)),
            other => other,
        })?;

        tracing::debug!("Read {} bytes", bytes.len());
        reader::read_sheets(input, bytes)
    }

    async fn transform(&self, sheets: Vec<Sheet>) -> Result<MatchSet> {
        Ok(collect_phone_numbers(&sheets))
    }

    async fn load(&self, matches: MatchSet) -> Result<ExportSummary> {
        let numbers = if self.config.sort_output() {
            matches.into_sorted_vec()
        } else {
            matches.into_vec()
        };

        let payload = writer::export_phone_numbers(&numbers)?;
        let output_path = self.output_location();

        tracing::debug!("Writing workbook ({} bytes) to storage", payload.len());
        self.storage.write_file(&output_path, &payload).await?;

        Ok(ExportSummary {
            output_path,
            numbers,
        })
    }
}

use crate::core::{Pipeline, RunOutcome};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 解析 → 擷取 → 去重；沒有任何號碼時不產生輸出檔
    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("🚀 Starting phone number extraction");

        let sheets = self.pipeline.extract().await?;
        let cells: usize = sheets.iter().map(|sheet| sheet.cell_count()).sum();
        tracing::info!("📄 Parsed {} sheet(s), {} cells", sheets.len(), cells);

        let matches = self.pipeline.transform(sheets).await?;
        if matches.is_empty() {
            tracing::info!("No phone numbers found");
            return Ok(RunOutcome::NoMatches);
        }
        tracing::info!("🔍 Extracted {} unique phone numbers", matches.len());

        let summary = self.pipeline.load(matches).await?;
        tracing::info!("📁 Output saved to: {}", summary.output_path);

        Ok(RunOutcome::Exported(summary))
    }
}

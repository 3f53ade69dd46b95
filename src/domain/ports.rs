use crate::domain::model::{ExportSummary, MatchSet, Sheet};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file_name(&self) -> &str;
    fn sort_output(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Sheet>>;
    async fn transform(&self, sheets: Vec<Sheet>) -> Result<MatchSet>;
    async fn load(&self, matches: MatchSet) -> Result<ExportSummary>;
}

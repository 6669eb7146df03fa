use crate::domain::model::{OutputFiles, Person, ReportConfig, ReportSet};
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
    fn output_files(&self) -> OutputFiles;
    fn report_config(&self) -> Result<ReportConfig>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Person>>;
    async fn transform(&self, people: &[Person]) -> Result<ReportSet>;
    /// Returns the paths that were written.
    async fn load(&self, reports: ReportSet) -> Result<Vec<String>>;
}

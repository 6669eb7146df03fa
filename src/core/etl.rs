use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load in order. Returns the written output paths.
    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting training report run");

        // Extract
        let people = self.pipeline.extract().await?;
        tracing::info!("Loaded {} people", people.len());
        self.monitor.log_stats("Extract");

        // Transform
        let reports = self.pipeline.transform(&people).await?;
        tracing::info!(
            "Built reports: {} training types counted, {} fiscal year rosters, {} people flagged for expiration",
            reports.completion_counts.len(),
            reports.fiscal_year_roster.len(),
            reports.expiring.len()
        );
        self.monitor.log_stats("Transform");

        // Load
        let written = self.pipeline.load(reports).await?;
        tracing::info!("Outputs saved to: {}", written.join(", "));
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(written)
    }
}

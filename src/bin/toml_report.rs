use clap::Parser;
use training_report::core::ConfigProvider;
use training_report::domain::dates::{one_month_after, FiscalYear};
use training_report::utils::{logger, validation::Validate};
use training_report::{EtlEngine, LocalStorage, ReportPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Training reports driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "report-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be produced without reading or writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based training report");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config)?;

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be read or written");
        perform_dry_run(&config)?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = ReportPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(written) => {
            tracing::info!("✅ Report run completed successfully!");
            println!("✅ Reports saved to: {}", written.join(", "));
        }
        Err(e) => {
            tracing::error!(
                "❌ Report run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) -> anyhow::Result<()> {
    let report = config.report_config()?;

    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    println!("  Input: {}", config.input_path());
    println!("  Output: {}", config.output_path());
    println!("  Fiscal Year: {}", report.fiscal_year);
    println!("  Reference Date: {}", report.reference_date);
    println!();

    Ok(())
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let report = config.report_config()?;
    let fiscal_year = FiscalYear::new(report.fiscal_year)?;
    let files = config.output_files();

    println!("🔍 Dry Run Analysis:");
    println!();
    println!("📚 Fiscal year roster ({} to {}):", fiscal_year.start(), fiscal_year.end());
    for name in &report.training_names {
        println!("  - {}", name);
    }

    println!();
    println!("⏰ Expiration window:");
    println!(
        "  expired before {}, expiring soon through {}",
        report.reference_date,
        one_month_after(report.reference_date)
    );

    println!();
    println!("💾 Outputs:");
    let base = std::path::Path::new(config.output_path());
    for name in [&files.counts, &files.fiscal_year, &files.expiring] {
        println!("  {}", base.join(name).display());
    }

    println!();
    println!("✅ Dry run analysis complete.");

    Ok(())
}

use clap::Parser;
use trebuchet::utils::logger;
use trebuchet::{CalibrationEngine, CliConfig, FileLineSource, StdoutSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_format);

    tracing::info!("Starting trebuchet calibration");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let source = FileLineSource::new(config.input.clone());
    let mut engine = CalibrationEngine::new(source, StdoutSink::new(), config.aggregator());

    match engine.run().await {
        Ok(report) => {
            if !report.skipped.is_empty() {
                tracing::warn!("⚠️ Skipped lines: {:?}", report.skipped);
            }
        }
        Err(e) => {
            tracing::error!("❌ Calibration failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

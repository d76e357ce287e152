use acceptance_runner::domain::model::RunStamp;
use acceptance_runner::utils::{logger, validation::Validate};
use acceptance_runner::{
    CliConfig, LocalPublisher, ProcessRunner, ReportEngine, Result, RunSettings, TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting acceptance-runner");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<()> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Some(TomlConfig::from_file(path)?)
        }
        None => None,
    };

    let settings = RunSettings::resolve(cli.overrides(), file);
    settings.validate()?;
    tracing::info!("🔗 Base URL: {}", settings.base_url);

    let engine = ReportEngine::new(settings, ProcessRunner::new(), LocalPublisher::new());

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the runner will not be launched");
        println!("{}", engine.dry_run(RunStamp::now())?);
        return Ok(());
    }

    let summary = engine.run().await?;
    println!("✅ Acceptance run {} passed", summary.stamp);
    for path in &summary.published {
        println!("📄 {}", path.display());
    }
    Ok(())
}

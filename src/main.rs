use anyhow::Context;
use clap::Parser;
use phone_extractor::adapters::writer::XLSX_MIME_TYPE;
use phone_extractor::utils::{logger, validation::Validate};
use phone_extractor::{
    CliConfig, EtlEngine, EtlError, LocalStorage, PhonePipeline, RunOutcome, RunReport, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 載入 TOML 配置，命令列參數優先
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        let file_config = TomlConfig::from_file(&path).and_then(|file_config| {
            file_config.validate()?;
            Ok(file_config)
        });
        match file_config {
            Ok(file_config) => config.apply_file_config(&file_config),
            Err(e) => exit_with(&e),
        }
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let input = config.input_path.clone();
    let json = config.json;

    let pipeline = PhonePipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new(pipeline);

    let outcome = match engine.run().await {
        Ok(outcome) => outcome,
        Err(e) => exit_with(&e),
    };

    if json {
        let report = RunReport::new(&input, &outcome, XLSX_MIME_TYPE);
        let rendered = report.to_json().context("failed to render JSON report")?;
        println!("{}", rendered);
        return Ok(());
    }

    match &outcome {
        RunOutcome::NoMatches => println!("No phone numbers found."),
        RunOutcome::Exported(summary) => {
            println!("{} phone numbers extracted:", summary.numbers.len());
            for number in &summary.numbers {
                println!("{}", number);
            }
            println!("📁 Saved to: {}", summary.output_path);
        }
    }

    Ok(())
}

fn exit_with(e: &EtlError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

use clap::Parser;
use coin_change::app::format::format_currency;
use coin_change::domain::ports::ConfigProvider;
use coin_change::utils::logger;
use coin_change::{ChangeEngine, ChangeError, ChangeRequest, CliConfig, OutputFormat};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), ChangeError> {
    let settings = cli.settings()?;
    let engine = ChangeEngine::from_config(&settings)?;

    if cli.list_sets {
        for set in engine.registry().sets() {
            let values: Vec<String> = set
                .denominations
                .iter()
                .map(|d| format_currency(*d, set.symbol.as_deref()))
                .collect();
            println!("{:<8} {}", set.name, values.join(", "));
        }
        println!("{:<8} comma-separated values via --custom", "Custom");
        return Ok(());
    }

    let format = settings.output()?;
    let request = ChangeRequest::new(
        settings.currency(),
        settings.custom_denominations(),
        cli.amount.as_deref().unwrap_or_default(),
    );

    let report = engine.run(&request).await?;
    print!("{}", report.render(format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

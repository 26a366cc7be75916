use clap::Parser;
use decomment::utils::{logger, validation::Validate};
use decomment::{run_demo, CliConfig, Command, LocalStorage, StripConfig, StripEngine};
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    match config.command() {
        Command::Demo => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_demo(&mut out)?;
        }
        Command::Strip(args) => {
            let result = match args.resolve() {
                Ok(strip_config) => strip(strip_config).await,
                Err(e) => Err(e),
            };

            if let Err(e) = result {
                tracing::error!("❌ Strip failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        }
    }

    Ok(())
}

async fn strip(config: StripConfig) -> decomment::Result<()> {
    tracing::debug!("Strip config: {:?}", config);
    config.validate()?;

    let engine = StripEngine::new(LocalStorage::default());
    let run = engine.run(&config).await?;

    if run.report.output.is_none() {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(run.text.as_bytes())?;
        out.flush()?;
    }

    if config.report {
        eprintln!("{}", serde_json::to_string_pretty(&run.report)?);
    }

    Ok(())
}

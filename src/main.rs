use clap::Parser;
use i18n_strip::config::cli::LogFormat;
use i18n_strip::utils::{logger, validation::Validate};
use i18n_strip::{CliArgs, LocalStorage, StripEngine, StripError};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    match args.log_format {
        LogFormat::Text => logger::init_cli_logger(args.verbose)?,
        LogFormat::Json => logger::init_json_logger(args.verbose)?,
    }

    tracing::info!("🚀 Starting i18n-strip");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.strip_config() {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(e);
    }

    let engine = StripEngine::new(LocalStorage::new(), config).with_dry_run(args.dry_run);

    match engine.run() {
        Ok(report) => {
            tracing::info!(
                "✅ Done: {} of {} lines removed",
                report.removed_lines,
                report.total_lines
            );
            if args.json {
                match report.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => fail(e),
                }
            } else if report.dry_run {
                println!("Dry run: would remove {} lines.", report.removed_lines);
            } else {
                println!("Successfully removed lines.");
            }
        }
        Err(e) => {
            if let StripError::AnchorMismatch { mismatches } = &e {
                for mismatch in mismatches {
                    println!("{}", mismatch);
                }
            }
            tracing::error!(
                "❌ Strip failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(e);
        }
    }

    Ok(())
}

fn fail(e: StripError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

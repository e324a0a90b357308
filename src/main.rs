use clap::Parser;
use numprep::utils::{logger, validation::Validate};
use numprep::{CliConfig, PrepEngine, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting numprep CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("Loading inputs from {}", path);
            let config = match TomlConfig::from_path(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Failed to load {}: {}", path, e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = config.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            PrepEngine::new(config).run()
        }
        None => PrepEngine::new(cli).run(),
    };

    match result {
        Ok(report) => {
            tracing::info!(
                "Preparation finished: {} values kept, input {}",
                report.doubled.len(),
                if report.valid { "valid" } else { "invalid" }
            );
        }
        Err(e) => {
            tracing::error!("Preparation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

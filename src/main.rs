use clap::Parser;
use doorstep_booking::utils::{logger, validation::Validate};
use doorstep_booking::{
    run_checks, BookingEngine, Catalog, CatalogConfig, CliConfig, CurrencyFormatter, SarFormatter,
    StubGateway,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting doorstep-booking preflight");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = match &config.catalog {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path);
            CatalogConfig::from_file(path)?.into_catalog()?
        }
        None => Catalog::builtin(),
    };

    let formatter = SarFormatter::new(config.locale.clone(), config.currency.clone());
    let results = run_checks(&catalog, &formatter);
    let mut failed = 0;
    for check in &results {
        if check.passed {
            println!("✔ {} — {}", check.name, check.detail);
        } else {
            failed += 1;
            tracing::error!("Integrity check failed: {} — {}", check.name, check.detail);
            println!("✘ {} — {}", check.name, check.detail);
        }
    }

    if failed > 0 {
        eprintln!("❌ {} integrity check(s) failed", failed);
        std::process::exit(2);
    }
    println!("✅ All {} integrity checks passed", results.len());

    if config.demo {
        let gateway = StubGateway::new(Duration::from_millis(config.delay_ms));
        let mut engine = BookingEngine::new(catalog, gateway)?;

        engine.set_date(chrono::Local::now().date_naive());
        engine.set_time("5:30 م");
        engine.set_address("الرياض، حي النرجس، شارع الياسمين");
        engine.set_phone("0500000000");

        let price = engine.current_price()?;
        println!(
            "Trial booking: {} — {} ({})",
            engine.draft().category_id(),
            engine.draft().tier_label(),
            formatter.format(price)
        );

        let confirmation = engine.submit().await?;
        println!("✅ Booking confirmed: {}", confirmation.booking_id);
    }

    Ok(())
}

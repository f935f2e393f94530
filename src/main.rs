use clap::Parser;
use travel_booking::core::report;
use travel_booking::utils::error::ErrorSeverity;
use travel_booking::utils::{logger, validation::Validate};
use travel_booking::{BookingError, Catalog, CatalogConfig, CliConfig};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting travel-booking");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), BookingError> {
    tracing::info!("📁 Loading catalog from: {}", config.catalog);
    let catalog_config = CatalogConfig::from_file(&config.catalog)?;
    catalog_config.validate()?;

    if config.dry_run {
        display_catalog_summary(&catalog_config);
        return Ok(());
    }

    let catalog = Catalog::from_config(&catalog_config)?;
    let summary = catalog.apply_bookings(&catalog_config)?;
    tracing::debug!("Booking summary: {:?}", summary);

    println!("{}", report::render(&catalog, config.format)?);
    Ok(())
}

fn display_catalog_summary(config: &CatalogConfig) {
    println!("📋 Catalog Summary:");
    println!("  Destinations: {}", config.destinations.len());
    println!("  Activities: {}", config.activity_count());
    println!("  Packages: {}", config.packages.len());
    for package in &config.packages {
        println!(
            "    - {} (capacity {}): {}",
            package.name,
            package.capacity,
            package.destinations.join(", ")
        );
    }
    println!("  Passengers: {}", config.passengers.len());
    println!("  Enrollments: {}", config.enrollments.len());
    println!("  Sign-ups: {}", config.signups.len());
    println!("  🔍 DRY RUN - no bookings applied");
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::CatalogConfig, ReportFormat};
pub use core::{BookingSummary, Catalog};
pub use domain::{
    shared, Activity, AvailableActivity, Describe, Destination, Passenger, PassengerNumber,
    Shared, Tier, TierKind, TravelPackage,
};
pub use utils::error::{BookingError, Result};

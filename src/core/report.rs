//! Read-only projections of a [`Catalog`] for display and export.

use crate::config::ReportFormat;
use crate::core::catalog::Catalog;
use crate::domain::{format_amount, AvailableActivity, Describe, Passenger, TierKind, TravelPackage};
use crate::utils::error::{BookingError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassengerEntry {
    pub name: String,
    pub number: String,
    pub tier: TierKind,
    pub balance: Option<f64>,
}

impl From<&Passenger> for PassengerEntry {
    fn from(passenger: &Passenger) -> Self {
        Self {
            name: passenger.name().to_string(),
            number: passenger.number().to_string(),
            tier: passenger.kind(),
            balance: passenger.balance(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageReport {
    pub name: String,
    pub capacity: usize,
    pub destinations: Vec<String>,
    pub passengers: Vec<PassengerEntry>,
    pub available_activities: Vec<AvailableActivity>,
}

impl From<&TravelPackage> for PackageReport {
    fn from(package: &TravelPackage) -> Self {
        Self {
            name: package.name().to_string(),
            capacity: package.capacity(),
            destinations: package
                .itinerary()
                .iter()
                .map(|d| d.borrow().name().to_string())
                .collect(),
            passengers: package
                .passengers()
                .iter()
                .map(|p| PassengerEntry::from(&*p.borrow()))
                .collect(),
            available_activities: package.available_activities(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub generated_at: DateTime<Utc>,
    pub packages: Vec<PackageReport>,
    pub passengers: Vec<PassengerEntry>,
}

impl CatalogReport {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            generated_at: Utc::now(),
            packages: catalog
                .packages()
                .iter()
                .map(|p| PackageReport::from(&*p.borrow()))
                .collect(),
            passengers: catalog
                .passengers()
                .iter()
                .map(|p| PassengerEntry::from(&*p.borrow()))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AvailableActivityRow<'a> {
    package: &'a str,
    destination: &'a str,
    activity: &'a str,
    description: &'a str,
    cost: f64,
    capacity: usize,
    current_count: usize,
    spaces_available: usize,
}

pub fn render(catalog: &Catalog, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(catalog)),
        ReportFormat::Json => render_json(catalog),
        ReportFormat::Csv => render_csv(catalog),
    }
}

pub fn render_text(catalog: &Catalog) -> String {
    let mut out = String::new();

    for package in catalog.packages() {
        let package = package.borrow();

        out.push_str(&format!("\nItinerary of {}:\n", package.name()));
        for destination in package.itinerary() {
            out.push_str(&destination.borrow().describe());
        }

        out.push_str(&format!("\nPassenger List of {}:\n", package.name()));
        out.push_str(&package.describe());

        out.push_str(&format!("\nAvailable Activities in {}:\n", package.name()));
        out.push_str(&available_activities_text(&package));
    }

    out.push_str("\nPassenger Details:\n");
    for passenger in catalog.passengers() {
        out.push_str(&passenger.borrow().describe());
    }

    out
}

/// One block per activity that still has room, with its remaining spaces.
pub fn available_activities_text(package: &TravelPackage) -> String {
    let mut out = String::new();
    for entry in package.available_activities() {
        out.push_str(&format!(
            "Destination: {}\nActivity Name: {}\nDescription: {}\nCost: {}\nCapacity: {}\nCurrent Count: {}\nSpaces Available: {}\n",
            entry.destination,
            entry.activity,
            entry.description,
            format_amount(entry.cost),
            entry.capacity,
            entry.current_count,
            entry.spaces_available
        ));
    }
    out
}

pub fn render_json(catalog: &Catalog) -> Result<String> {
    let report = CatalogReport::from_catalog(catalog);
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Available activities of every package as CSV, one row per package/activity.
/// The header row is written even when nothing is available.
pub fn render_csv(catalog: &Catalog) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record([
        "package",
        "destination",
        "activity",
        "description",
        "cost",
        "capacity",
        "current_count",
        "spaces_available",
    ])?;

    for package in catalog.packages() {
        let package = package.borrow();
        for entry in package.available_activities() {
            writer.serialize(AvailableActivityRow {
                package: package.name(),
                destination: &entry.destination,
                activity: &entry.activity,
                description: &entry.description,
                cost: entry.cost,
                capacity: entry.capacity,
                current_count: entry.current_count,
                spaces_available: entry.spaces_available,
            })?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BookingError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| BookingError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

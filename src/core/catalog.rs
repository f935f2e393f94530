use crate::config::toml_config::CatalogConfig;
use crate::domain::{shared, Activity, Destination, Passenger, Shared, TierKind, TravelPackage};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use serde::Serialize;

/// Outcome counts of a booking run. Rejections are normal business results
/// (full, duplicate, insufficient balance), not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub enrollments_accepted: usize,
    pub enrollments_rejected: usize,
    pub signups_accepted: usize,
    pub signups_rejected: usize,
}

/// Every package, destination and passenger of one catalog, wired together.
///
/// Destinations are shared between the packages that list them, so a
/// sign-up is visible from every package's reports.
#[derive(Debug, Default)]
pub struct Catalog {
    destinations: Vec<Shared<Destination>>,
    packages: Vec<Shared<TravelPackage>>,
    passengers: Vec<Shared<Passenger>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the object graph described by `config`. No bookings are made.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;

        let mut catalog = Self::new();

        for destination_config in &config.destinations {
            let mut destination = Destination::new(&destination_config.name);
            for activity in &destination_config.activities {
                destination.add_activity(shared(Activity::new(
                    &activity.name,
                    &activity.description,
                    activity.cost,
                    activity.capacity,
                )?));
            }
            catalog.destinations.push(shared(destination));
        }

        for passenger in &config.passengers {
            let built = match passenger.tier {
                TierKind::Standard => Passenger::standard(
                    &passenger.name,
                    passenger.number.as_str(),
                    *validate_required_field("passengers.balance", &passenger.balance)?,
                )?,
                TierKind::Gold => Passenger::gold(
                    &passenger.name,
                    passenger.number.as_str(),
                    *validate_required_field("passengers.balance", &passenger.balance)?,
                )?,
                TierKind::Premium => Passenger::premium(&passenger.name, passenger.number.as_str()),
            };
            catalog.passengers.push(shared(built));
        }

        for package_config in &config.packages {
            let mut package = TravelPackage::new(&package_config.name, package_config.capacity);
            for name in &package_config.destinations {
                package.add_destination(catalog.require_destination(name)?);
            }
            catalog.packages.push(shared(package));
        }

        tracing::info!(
            "Catalog loaded: {} packages, {} destinations, {} activities, {} passengers",
            catalog.packages.len(),
            catalog.destinations.len(),
            config.activity_count(),
            catalog.passengers.len()
        );

        Ok(catalog)
    }

    /// Runs the enrollments and then the sign-ups listed in `config`, in file order.
    pub fn apply_bookings(&self, config: &CatalogConfig) -> Result<BookingSummary> {
        let mut summary = BookingSummary::default();

        for enrollment in &config.enrollments {
            if self.enroll(&enrollment.package, &enrollment.passenger)? {
                summary.enrollments_accepted += 1;
            } else {
                tracing::warn!(
                    "Enrollment of {} in '{}' rejected",
                    enrollment.passenger,
                    enrollment.package
                );
                summary.enrollments_rejected += 1;
            }
        }

        for signup in &config.signups {
            if self.sign_up(&signup.passenger, &signup.destination, &signup.activity)? {
                summary.signups_accepted += 1;
            } else {
                tracing::warn!(
                    "Sign-up of {} for '{}' at {} rejected",
                    signup.passenger,
                    signup.activity,
                    signup.destination
                );
                summary.signups_rejected += 1;
            }
        }

        tracing::info!(
            "Bookings applied: {}/{} enrollments, {}/{} sign-ups accepted",
            summary.enrollments_accepted,
            config.enrollments.len(),
            summary.signups_accepted,
            config.signups.len()
        );

        Ok(summary)
    }

    pub fn enroll(&self, package_name: &str, passenger_number: &str) -> Result<bool> {
        let package = self.require_package(package_name)?;
        let passenger = self.require_passenger(passenger_number)?;
        let accepted = package.borrow_mut().add_passenger(passenger);
        Ok(accepted)
    }

    pub fn sign_up(
        &self,
        passenger_number: &str,
        destination_name: &str,
        activity_name: &str,
    ) -> Result<bool> {
        let passenger = self.require_passenger(passenger_number)?;
        let activity = self
            .require_destination(destination_name)?
            .borrow()
            .activity(activity_name)
            .ok_or_else(|| BookingError::UnknownReference {
                kind: "activity".to_string(),
                key: format!("{}/{}", destination_name, activity_name),
            })?;

        let accepted = passenger
            .borrow_mut()
            .sign_up_for_activity(&mut activity.borrow_mut());
        Ok(accepted)
    }

    pub fn destination(&self, name: &str) -> Option<Shared<Destination>> {
        self.destinations
            .iter()
            .find(|d| d.borrow().name() == name)
            .cloned()
    }

    pub fn package(&self, name: &str) -> Option<Shared<TravelPackage>> {
        self.packages
            .iter()
            .find(|p| p.borrow().name() == name)
            .cloned()
    }

    pub fn passenger(&self, number: &str) -> Option<Shared<Passenger>> {
        self.passengers
            .iter()
            .find(|p| p.borrow().number().as_str() == number)
            .cloned()
    }

    pub fn destinations(&self) -> &[Shared<Destination>] {
        &self.destinations
    }

    pub fn packages(&self) -> &[Shared<TravelPackage>] {
        &self.packages
    }

    pub fn passengers(&self) -> &[Shared<Passenger>] {
        &self.passengers
    }

    fn require_destination(&self, name: &str) -> Result<Shared<Destination>> {
        self.destination(name).ok_or_else(|| unknown("destination", name))
    }

    fn require_package(&self, name: &str) -> Result<Shared<TravelPackage>> {
        self.package(name).ok_or_else(|| unknown("package", name))
    }

    fn require_passenger(&self, number: &str) -> Result<Shared<Passenger>> {
        self.passenger(number).ok_or_else(|| unknown("passenger", number))
    }
}

fn unknown(kind: &str, key: &str) -> BookingError {
    BookingError::UnknownReference {
        kind: kind.to_string(),
        key: key.to_string(),
    }
}

use crate::domain::TierKind;
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_required_field,
    validate_unique_keys, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A catalog file: what is on sale, who is travelling and what they book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub destinations: Vec<DestinationConfig>,
    #[serde(default)]
    pub packages: Vec<PackageConfig>,
    #[serde(default)]
    pub passengers: Vec<PassengerConfig>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentConfig>,
    #[serde(default)]
    pub signups: Vec<SignupConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    pub name: String,
    #[serde(default)]
    pub activities: Vec<ActivityConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cost: f64,
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    pub name: String,
    pub capacity: usize,
    #[serde(default)]
    pub destinations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerConfig {
    pub name: String,
    pub number: String,
    pub tier: TierKind,
    pub balance: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentConfig {
    pub package: String,
    pub passenger: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupConfig {
    pub passenger: String,
    pub destination: String,
    pub activity: String,
}

impl CatalogConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| BookingError::ConfigError {
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn destination(&self, name: &str) -> Option<&DestinationConfig> {
        self.destinations.iter().find(|d| d.name == name)
    }

    pub fn activity_count(&self) -> usize {
        self.destinations.iter().map(|d| d.activities.len()).sum()
    }

    fn validate_entries(&self) -> Result<()> {
        for destination in &self.destinations {
            validate_non_empty_string("destinations.name", &destination.name)?;
            for activity in &destination.activities {
                validate_non_empty_string("destinations.activities.name", &activity.name)?;
                validate_non_negative("destinations.activities.cost", activity.cost)?;
            }
        }

        for package in &self.packages {
            validate_non_empty_string("packages.name", &package.name)?;
        }

        for passenger in &self.passengers {
            validate_non_empty_string("passengers.name", &passenger.name)?;
            validate_non_empty_string("passengers.number", &passenger.number)?;
            if passenger.tier.carries_balance() {
                let balance = validate_required_field("passengers.balance", &passenger.balance)?;
                validate_non_negative("passengers.balance", *balance)?;
            } else if passenger.balance.is_some() {
                return Err(BookingError::ConfigValidationError {
                    field: "passengers.balance".to_string(),
                    message: format!(
                        "{} passenger {} cannot carry a balance",
                        passenger.tier, passenger.number
                    ),
                });
            }
        }

        validate_unique_keys(
            "destinations.name",
            self.destinations.iter().map(|d| d.name.as_str()),
        )?;
        validate_unique_keys("packages.name", self.packages.iter().map(|p| p.name.as_str()))?;
        validate_unique_keys(
            "passengers.number",
            self.passengers.iter().map(|p| p.number.as_str()),
        )?;

        Ok(())
    }

    fn validate_references(&self) -> Result<()> {
        let passengers: HashMap<&str, &PassengerConfig> = self
            .passengers
            .iter()
            .map(|p| (p.number.as_str(), p))
            .collect();

        for package in &self.packages {
            for destination in &package.destinations {
                if self.destination(destination).is_none() {
                    return Err(unknown("destination", destination));
                }
            }
        }

        for enrollment in &self.enrollments {
            if !self.packages.iter().any(|p| p.name == enrollment.package) {
                return Err(unknown("package", &enrollment.package));
            }
            if !passengers.contains_key(enrollment.passenger.as_str()) {
                return Err(unknown("passenger", &enrollment.passenger));
            }
        }

        for signup in &self.signups {
            if !passengers.contains_key(signup.passenger.as_str()) {
                return Err(unknown("passenger", &signup.passenger));
            }
            let destination = self
                .destination(&signup.destination)
                .ok_or_else(|| unknown("destination", &signup.destination))?;
            if !destination.activities.iter().any(|a| a.name == signup.activity) {
                return Err(unknown(
                    "activity",
                    &format!("{}/{}", signup.destination, signup.activity),
                ));
            }
        }

        Ok(())
    }
}

fn unknown(kind: &str, key: &str) -> BookingError {
    BookingError::UnknownReference {
        kind: kind.to_string(),
        key: key.to_string(),
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_entries()?;
        self.validate_references()
    }
}

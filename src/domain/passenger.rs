use crate::domain::activity::Activity;
use crate::domain::format_amount;
use crate::domain::ports::Describe;
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::validate_non_negative;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Gold passengers pay 90% of the listed cost.
pub const GOLD_DISCOUNT_RATE: f64 = 0.9;

/// Identity key of a passenger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerNumber(String);

impl PassengerNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PassengerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PassengerNumber {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

impl From<String> for PassengerNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    Standard,
    Gold,
    Premium,
}

impl TierKind {
    pub fn carries_balance(&self) -> bool {
        !matches!(self, TierKind::Premium)
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TierKind::Standard => "Standard",
            TierKind::Gold => "Gold",
            TierKind::Premium => "Premium",
        };
        f.write_str(label)
    }
}

/// Fare class of a passenger, with the state each class needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Tier {
    Standard { balance: f64 },
    Gold { balance: f64 },
    Premium,
}

impl Tier {
    pub fn kind(&self) -> TierKind {
        match self {
            Tier::Standard { .. } => TierKind::Standard,
            Tier::Gold { .. } => TierKind::Gold,
            Tier::Premium => TierKind::Premium,
        }
    }

    /// What this tier actually pays for something listed at `listed_cost`.
    pub fn effective_cost(&self, listed_cost: f64) -> f64 {
        match self {
            Tier::Standard { .. } => listed_cost,
            Tier::Gold { .. } => listed_cost * GOLD_DISCOUNT_RATE,
            Tier::Premium => 0.0,
        }
    }

    fn balance(&self) -> Option<f64> {
        match self {
            Tier::Standard { balance } | Tier::Gold { balance } => Some(*balance),
            Tier::Premium => None,
        }
    }
}

/// A traveller. Equality and hashing use the passenger number only.
#[derive(Debug, Clone)]
pub struct Passenger {
    name: String,
    number: PassengerNumber,
    tier: Tier,
}

impl Passenger {
    pub fn standard(
        name: impl Into<String>,
        number: impl Into<PassengerNumber>,
        balance: f64,
    ) -> Result<Self> {
        validate_non_negative("balance", balance)?;
        Ok(Self::with_tier(name, number, Tier::Standard { balance }))
    }

    pub fn gold(
        name: impl Into<String>,
        number: impl Into<PassengerNumber>,
        balance: f64,
    ) -> Result<Self> {
        validate_non_negative("balance", balance)?;
        Ok(Self::with_tier(name, number, Tier::Gold { balance }))
    }

    pub fn premium(name: impl Into<String>, number: impl Into<PassengerNumber>) -> Self {
        Self::with_tier(name, number, Tier::Premium)
    }

    fn with_tier(name: impl Into<String>, number: impl Into<PassengerNumber>, tier: Tier) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            tier,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &PassengerNumber {
        &self.number
    }

    pub fn tier(&self) -> &Tier {
        &self.tier
    }

    pub fn kind(&self) -> TierKind {
        self.tier.kind()
    }

    /// `None` for tiers that never pay.
    pub fn balance(&self) -> Option<f64> {
        self.tier.balance()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_balance(&mut self, new_balance: f64) -> Result<()> {
        validate_non_negative("balance", new_balance)?;
        match &mut self.tier {
            Tier::Standard { balance } | Tier::Gold { balance } => {
                *balance = new_balance;
                Ok(())
            }
            Tier::Premium => Err(BookingError::invalid_argument(
                "balance",
                "Premium passengers do not carry a balance",
            )),
        }
    }

    pub fn effective_cost(&self, activity: &Activity) -> f64 {
        self.tier.effective_cost(activity.cost())
    }

    /// Signs this passenger up for `activity`, paying the tier's effective cost.
    ///
    /// Balance-carrying tiers must afford the effective cost out of their
    /// current balance. The activity has the final say on capacity and
    /// duplicates, and the balance is debited only once it has accepted.
    pub fn sign_up_for_activity(&mut self, activity: &mut Activity) -> bool {
        let cost = self.effective_cost(activity);

        if let Some(balance) = self.balance() {
            if !activity.is_available() || balance < cost {
                tracing::debug!(
                    "Passenger {} not eligible for '{}' (balance {}, cost {}, available {})",
                    self.number,
                    activity.name(),
                    balance,
                    cost,
                    activity.is_available()
                );
                return false;
            }
        }

        if !activity.sign_up(self) {
            return false;
        }

        if let Tier::Standard { balance } | Tier::Gold { balance } = &mut self.tier {
            *balance -= cost;
        }

        tracing::debug!(
            "Passenger {} ({}) signed up for '{}' paying {}",
            self.number,
            self.tier.kind(),
            activity.name(),
            cost
        );
        true
    }
}

impl PartialEq for Passenger {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Passenger {}

impl Hash for Passenger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl Describe for Passenger {
    fn describe(&self) -> String {
        let mut out = format!(
            "Name: {}\nPassenger Number: {}\nTier: {}\n",
            self.name,
            self.number,
            self.tier.kind()
        );
        if let Some(balance) = self.balance() {
            out.push_str(&format!("Balance: {}\n", format_amount(balance)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diving() -> Activity {
        Activity::new("Diving", "Scuba diving", 100.0, 5).unwrap()
    }

    #[test]
    fn test_standard_pays_listed_cost() {
        let mut passenger = Passenger::standard("John Doe", "P123", 500.0).unwrap();
        let mut activity = diving();

        assert!(passenger.sign_up_for_activity(&mut activity));
        assert_eq!(passenger.balance(), Some(400.0));
        assert_eq!(activity.current_count(), 1);
    }

    #[test]
    fn test_gold_pays_discounted_cost() {
        let mut passenger = Passenger::gold("Jane Doe", "P456", 700.0).unwrap();
        let mut activity = diving();

        assert_eq!(passenger.effective_cost(&activity), 90.0);
        assert!(passenger.sign_up_for_activity(&mut activity));
        assert_eq!(passenger.balance(), Some(610.0));
    }

    #[test]
    fn test_gold_rejected_below_discounted_cost() {
        let mut passenger = Passenger::gold("Jane Doe", "P456", 80.0).unwrap();
        let mut activity = diving();

        assert!(!passenger.sign_up_for_activity(&mut activity));
        assert_eq!(passenger.balance(), Some(80.0));
        assert_eq!(activity.current_count(), 0);
    }

    #[test]
    fn test_gold_with_exact_discounted_balance() {
        let mut passenger = Passenger::gold("Jane Doe", "P456", 90.0).unwrap();
        let mut activity = diving();

        assert!(passenger.sign_up_for_activity(&mut activity));
        assert_eq!(passenger.balance(), Some(0.0));
    }

    #[test]
    fn test_premium_signs_up_for_free() {
        let mut passenger = Passenger::premium("Steve Smith", "P789");
        let mut activity = Activity::new("Skiing", "Icy skiing", 120.0, 1).unwrap();

        assert!(passenger.sign_up_for_activity(&mut activity));
        assert_eq!(passenger.balance(), None);
        assert_eq!(passenger.effective_cost(&activity), 0.0);
    }

    #[test]
    fn test_no_debit_when_already_signed_up() {
        let mut passenger = Passenger::standard("John Doe", "P123", 500.0).unwrap();
        let mut activity = diving();

        assert!(passenger.sign_up_for_activity(&mut activity));
        assert!(!passenger.sign_up_for_activity(&mut activity));
        assert_eq!(passenger.balance(), Some(400.0));
        assert_eq!(activity.current_count(), 1);
    }

    #[test]
    fn test_set_balance_validation() {
        let mut passenger = Passenger::standard("John Doe", "12345", 1000.0).unwrap();
        assert!(passenger.set_balance(-100.0).is_err());
        assert_eq!(passenger.balance(), Some(1000.0));
        assert!(passenger.set_balance(250.0).is_ok());
        assert_eq!(passenger.balance(), Some(250.0));

        let mut premium = Passenger::premium("Jim Doe", "11121");
        assert!(matches!(
            premium.set_balance(10.0),
            Err(BookingError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_negative_opening_balance_rejected() {
        assert!(Passenger::standard("John Doe", "P1", -1.0).is_err());
        assert!(Passenger::gold("John Doe", "P1", -1.0).is_err());
    }

    #[test]
    fn test_infinite_balance_rejected() {
        assert!(matches!(
            Passenger::standard("John Doe", "P1", f64::INFINITY),
            Err(BookingError::InvalidArgument { .. })
        ));
        assert!(Passenger::gold("John Doe", "P1", f64::INFINITY).is_err());

        let mut passenger = Passenger::standard("John Doe", "P1", 100.0).unwrap();
        assert!(passenger.set_balance(f64::INFINITY).is_err());
        assert_eq!(passenger.balance(), Some(100.0));
    }

    #[test]
    fn test_identity_is_passenger_number() {
        let a = Passenger::standard("John Doe", "P1", 10.0).unwrap();
        let b = Passenger::premium("Someone Else", "P1");
        let c = Passenger::standard("John Doe", "P2", 10.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_describe_includes_balance_only_when_carried() {
        let standard = Passenger::standard("John Doe", "P123", 500.0).unwrap();
        let premium = Passenger::premium("Steve Smith", "P789");

        assert!(standard.describe().contains("Balance: 500.00"));
        assert!(premium.describe().contains("Tier: Premium"));
        assert!(!premium.describe().contains("Balance"));
    }
}

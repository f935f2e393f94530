use crate::domain::format_amount;
use crate::domain::passenger::{Passenger, PassengerNumber};
use crate::domain::ports::Describe;
use crate::utils::error::Result;
use crate::utils::validation::{validate_at_least, validate_at_most, validate_non_negative};
use std::collections::HashSet;

/// A capacity-limited activity offered at a destination.
///
/// `current_count` never exceeds `capacity`. Sign-ups go through
/// [`Activity::sign_up`], which keeps the count and the roster in step.
#[derive(Debug, Clone)]
pub struct Activity {
    name: String,
    description: String,
    cost: f64,
    capacity: usize,
    current_count: usize,
    signed_up: HashSet<PassengerNumber>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cost: f64,
        capacity: usize,
    ) -> Result<Self> {
        validate_non_negative("cost", cost)?;
        Ok(Self {
            name: name.into(),
            description: description.into(),
            cost,
            capacity,
            current_count: 0,
            signed_up: HashSet::new(),
        })
    }

    pub fn is_available(&self) -> bool {
        self.current_count < self.capacity
    }

    pub fn remaining_spaces(&self) -> usize {
        self.capacity.saturating_sub(self.current_count)
    }

    pub fn is_signed_up(&self, number: &PassengerNumber) -> bool {
        self.signed_up.contains(number)
    }

    /// Records `passenger` if there is room and they are not already on the
    /// roster. Returns `false` without touching any state otherwise.
    pub fn sign_up(&mut self, passenger: &Passenger) -> bool {
        if !self.is_available() {
            tracing::debug!("Activity '{}' is full ({})", self.name, self.capacity);
            return false;
        }
        if self.signed_up.contains(passenger.number()) {
            tracing::debug!(
                "Passenger {} already signed up for '{}'",
                passenger.number(),
                self.name
            );
            return false;
        }

        self.signed_up.insert(passenger.number().clone());
        self.current_count += 1;
        true
    }

    pub fn signed_up_passengers(&self) -> impl Iterator<Item = &PassengerNumber> + '_ {
        self.signed_up.iter()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn current_count(&self) -> usize {
        self.current_count
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_cost(&mut self, cost: f64) -> Result<()> {
        validate_non_negative("cost", cost)?;
        self.cost = cost;
        Ok(())
    }

    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        validate_at_least("capacity", capacity, self.current_count)?;
        self.capacity = capacity;
        Ok(())
    }

    /// Overrides the head count, e.g. for places sold outside this system.
    /// The roster of signed-up passengers is left as is, so lowering the count
    /// lets later sign-ups push `signed_up_passengers().count()` past `capacity()`.
    pub fn set_current_count(&mut self, current_count: usize) -> Result<()> {
        validate_at_most("current_count", current_count, self.capacity)?;
        self.current_count = current_count;
        Ok(())
    }
}

impl Describe for Activity {
    fn describe(&self) -> String {
        format!(
            "Activity Name: {}\nDescription: {}\nCost: {}\nCapacity: {}\nCurrent Count: {}\n",
            self.name,
            self.description,
            format_amount(self.cost),
            self.capacity,
            self.current_count
        )
    }
}

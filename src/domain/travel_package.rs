use crate::domain::destination::Destination;
use crate::domain::passenger::{Passenger, PassengerNumber};
use crate::domain::ports::Describe;
use crate::domain::Shared;
use crate::utils::error::Result;
use crate::utils::validation::validate_at_least;
use serde::Serialize;

/// An activity that still has room, as seen from a package's itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableActivity {
    pub destination: String,
    pub activity: String,
    pub description: String,
    pub cost: f64,
    pub capacity: usize,
    pub current_count: usize,
    pub spaces_available: usize,
}

/// A sellable trip: an itinerary of destinations plus a capacity-limited
/// passenger list.
///
/// Membership is independent of activity sign-ups. Removing a passenger
/// leaves their activity places and balance untouched.
#[derive(Debug, Clone)]
pub struct TravelPackage {
    name: String,
    capacity: usize,
    itinerary: Vec<Shared<Destination>>,
    passengers: Vec<Shared<Passenger>>,
}

impl TravelPackage {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
            itinerary: Vec::new(),
            passengers: Vec::new(),
        }
    }

    pub fn add_destination(&mut self, destination: Shared<Destination>) {
        self.itinerary.push(destination);
    }

    /// Removes the first destination equal (by name) to `destination`.
    pub fn remove_destination(&mut self, destination: &Destination) -> bool {
        match self
            .itinerary
            .iter()
            .position(|d| *d.borrow() == *destination)
        {
            Some(index) => {
                self.itinerary.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn add_passenger(&mut self, passenger: Shared<Passenger>) -> bool {
        let number = passenger.borrow().number().clone();
        if self.contains_passenger(&number) {
            tracing::debug!("Passenger {} already in package '{}'", number, self.name);
            return false;
        }
        if self.passengers.len() >= self.capacity {
            tracing::debug!(
                "Package '{}' is full ({} passengers)",
                self.name,
                self.capacity
            );
            return false;
        }

        self.passengers.push(passenger);
        true
    }

    pub fn remove_passenger(&mut self, passenger: &Passenger) -> bool {
        match self
            .passengers
            .iter()
            .position(|p| p.borrow().number() == passenger.number())
        {
            Some(index) => {
                self.passengers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains_passenger(&self, number: &PassengerNumber) -> bool {
        self.passengers
            .iter()
            .any(|p| p.borrow().number() == number)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn itinerary(&self) -> &[Shared<Destination>] {
        &self.itinerary
    }

    pub fn passengers(&self) -> &[Shared<Passenger>] {
        &self.passengers
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        validate_at_least("capacity", capacity, self.passengers.len())?;
        self.capacity = capacity;
        Ok(())
    }

    /// Activities across the whole itinerary that can still take a passenger.
    pub fn available_activities(&self) -> Vec<AvailableActivity> {
        let mut available = Vec::new();
        for destination in &self.itinerary {
            let destination = destination.borrow();
            for (dest, activity) in destination.activity_pairs() {
                let activity = activity.borrow();
                if activity.is_available() {
                    available.push(AvailableActivity {
                        destination: dest.name().to_string(),
                        activity: activity.name().to_string(),
                        description: activity.description().to_string(),
                        cost: activity.cost(),
                        capacity: activity.capacity(),
                        current_count: activity.current_count(),
                        spaces_available: activity.remaining_spaces(),
                    });
                }
            }
        }
        available
    }
}

impl Describe for TravelPackage {
    fn describe(&self) -> String {
        let mut out = format!(
            "Travel Package Name: {}\nPassenger Capacity: {}\nNumber of Passengers: {}\n",
            self.name,
            self.capacity,
            self.passengers.len()
        );
        for passenger in &self.passengers {
            let passenger = passenger.borrow();
            out.push_str(&format!(
                "Name: {}, Passenger Number: {}\n",
                passenger.name(),
                passenger.number()
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::Activity;
    use crate::domain::shared;

    fn standard(number: &str) -> Shared<Passenger> {
        shared(Passenger::standard("John Doe", number, 1000.0).unwrap())
    }

    #[test]
    fn test_new_package_is_empty() {
        let package = TravelPackage::new("Summer Adventure", 10);
        assert_eq!(package.name(), "Summer Adventure");
        assert_eq!(package.capacity(), 10);
        assert!(package.itinerary().is_empty());
        assert!(package.passengers().is_empty());
    }

    #[test]
    fn test_add_and_remove_destination() {
        let mut package = TravelPackage::new("Summer Adventure", 10);
        package.add_destination(shared(Destination::new("Paris")));
        package.add_destination(shared(Destination::new("Paris")));
        assert_eq!(package.itinerary().len(), 2);

        assert!(package.remove_destination(&Destination::new("Paris")));
        assert_eq!(package.itinerary().len(), 1);
        assert!(package.remove_destination(&Destination::new("Paris")));
        assert!(!package.remove_destination(&Destination::new("Paris")));
    }

    #[test]
    fn test_add_passenger_rejects_duplicates_and_overflow() {
        let mut package = TravelPackage::new("Summer Adventure", 2);
        let first = standard("12345");

        assert!(package.add_passenger(first.clone()));
        assert!(!package.add_passenger(first.clone()));
        assert!(!package.add_passenger(shared(Passenger::premium("Clone", "12345"))));
        assert!(package.add_passenger(standard("67890")));
        assert!(!package.add_passenger(standard("13579")));
        assert_eq!(package.passengers().len(), 2);
    }

    #[test]
    fn test_remove_passenger_by_identity() {
        let mut package = TravelPackage::new("Summer Adventure", 10);
        let passenger = standard("12345");
        package.add_passenger(passenger.clone());

        assert!(package.remove_passenger(&passenger.borrow()));
        assert!(!package.contains_passenger(&PassengerNumber::from("12345")));
        assert!(!package.remove_passenger(&passenger.borrow()));
    }

    #[test]
    fn test_removing_passenger_keeps_their_bookings() {
        let mut package = TravelPackage::new("Summer Adventure", 10);
        let passenger = standard("12345");
        let activity = shared(Activity::new("Diving", "", 100.0, 5).unwrap());
        package.add_passenger(passenger.clone());
        passenger
            .borrow_mut()
            .sign_up_for_activity(&mut activity.borrow_mut());

        assert!(package.remove_passenger(&passenger.borrow()));
        assert_eq!(passenger.borrow().balance(), Some(900.0));
        assert_eq!(activity.borrow().current_count(), 1);
    }

    #[test]
    fn test_set_capacity_boundary() {
        let mut package = TravelPackage::new("Summer Adventure", 10);
        package.add_passenger(standard("1"));
        package.add_passenger(standard("2"));

        assert!(package.set_capacity(1).is_err());
        assert_eq!(package.capacity(), 10);
        assert!(package.set_capacity(2).is_ok());
        assert_eq!(package.capacity(), 2);
    }

    #[test]
    fn test_available_activities_reflect_sign_ups() {
        let mut package = TravelPackage::new("Trip to Bali", 10);
        let bali = shared(Destination::new("Bali"));
        let diving = shared(Activity::new("Diving", "Scuba", 100.0, 1).unwrap());
        let surfing = shared(Activity::new("Surfing", "Waves", 50.0, 10).unwrap());
        bali.borrow_mut().add_activity(diving.clone());
        bali.borrow_mut().add_activity(surfing.clone());
        package.add_destination(bali);

        assert_eq!(package.available_activities().len(), 2);

        let mut guest = Passenger::premium("Steve Smith", "P789");
        guest.sign_up_for_activity(&mut diving.borrow_mut());
        guest.sign_up_for_activity(&mut surfing.borrow_mut());

        let available = package.available_activities();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].destination, "Bali");
        assert_eq!(available[0].activity, "Surfing");
        assert_eq!(available[0].spaces_available, 9);
    }

    #[test]
    fn test_roster_description() {
        let mut package = TravelPackage::new("Trip to Bali", 10);
        package.add_passenger(standard("P123"));

        let text = package.describe();
        assert!(text.contains("Travel Package Name: Trip to Bali"));
        assert!(text.contains("Number of Passengers: 1"));
        assert!(text.contains("Name: John Doe, Passenger Number: P123"));
    }
}

// Domain layer: booking entities and the reporting capability they share.
// No I/O here; everything is an in-memory, single-threaded object graph.

pub mod activity;
pub mod destination;
pub mod passenger;
pub mod ports;
pub mod travel_package;

use std::cell::RefCell;
use std::rc::Rc;

pub use activity::Activity;
pub use destination::Destination;
pub use passenger::{Passenger, PassengerNumber, Tier, TierKind};
pub use ports::Describe;
pub use travel_package::{AvailableActivity, TravelPackage};

/// Handle for an entity held by several owners at once (a destination listed
/// in two packages, a passenger enrolled in a package and kept by the caller).
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Money is printed with two decimals in every text report.
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub mod catalog;
pub mod report;

pub use crate::domain::{Describe, Shared};
pub use crate::utils::error::Result;
pub use catalog::{BookingSummary, Catalog};

pub mod dto;

pub use dto::{candidate_destinations, WorkLocation, WorkLocationsResponse};

pub mod dto;

pub use dto::{CompaniesResponse, Company};

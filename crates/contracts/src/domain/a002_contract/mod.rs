pub mod dto;

pub use dto::{Contract, ContractsResponse};

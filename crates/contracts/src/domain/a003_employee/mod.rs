pub mod dto;

pub use dto::{ContractSummary, Employee, EmployeesResponse, PositionSummary, WorkLocationSummary};

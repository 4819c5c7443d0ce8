pub mod a001_company;
pub mod a002_contract;
pub mod a003_employee;
pub mod a004_work_location;
pub mod a005_request;

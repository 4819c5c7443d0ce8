pub mod dto;

pub use dto::{DateRange, MonthlyHiring, ReportFilters, ReportStats};

pub mod d100_management_reports;

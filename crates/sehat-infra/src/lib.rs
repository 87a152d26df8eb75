//! Infrastructure layer for sehat-checker

pub mod fleet_csv;

//! Provider directory, county pages, and eligibility screener for Georgia Pediatric
//! Program (GAPP) families.

pub mod config;
pub mod directory;
pub mod error;
pub mod reference;
pub mod screener;
pub mod telemetry;

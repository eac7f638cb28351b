//! Servicios del sistema
//!
//! Lógica de reportes y la demo de flota sobre los modelos.

pub mod fleet_service;
pub mod report_service;

pub use fleet_service::{build_demo_fleet, drive_all, run_demo};
pub use report_service::{print_vehicle_report, write_report, write_vehicle_report, write_vehicle_report_json};

//! Modelo de vehículos con despacho polimórfico
//!
//! Un `Vehicle` base, dos variantes especializadas (`Car`, `ElectricScooter`)
//! y un reporte que recorre la flota a través de `dyn VehicleLike`.

pub mod config;
pub mod dto;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{FleetConfig, ReportFormat};
pub use models::{Car, ElectricScooter, Vehicle, VehicleLike};
pub use services::{print_vehicle_report, run_demo};
pub use utils::errors::{ConfigError, VehicleError, VehicleResult};

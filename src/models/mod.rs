//! Modelos del sistema
//!
//! Este módulo contiene el vehículo base y sus variantes especializadas,
//! todas detrás de la capacidad común `VehicleLike`.

pub mod vehicle;
pub mod car;
pub mod electric_scooter;

pub use car::Car;
pub use electric_scooter::ElectricScooter;
pub use vehicle::{Vehicle, VehicleLike};

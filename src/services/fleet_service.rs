//! Servicio de demostración de flota
//!
//! Construye la flota de ejemplo, conduce cada vehículo, escribe el reporte y
//! verifica si el vehículo en el índice 1 necesita carga.

use anyhow::{anyhow, Context, Result};
use std::io::Write;
use tracing::info;

use crate::config::FleetConfig;
use crate::models::{Car, ElectricScooter, Vehicle, VehicleLike};
use crate::services::report_service::write_report;
use crate::utils::errors::VehicleResult;

/// Índice del vehículo cuya batería se verifica al final de la demo
pub const CHARGING_CHECK_INDEX: usize = 1;

/// Flota de ejemplo: Car, ElectricScooter y un Vehicle parseado desde texto
pub fn build_demo_fleet() -> VehicleResult<Vec<Box<dyn VehicleLike>>> {
    let vehicles: Vec<Box<dyn VehicleLike>> = vec![
        Box::new(Car::new("Toyota", "Corolla", 2020, 50.0)),
        Box::new(ElectricScooter::with_battery("Xiaomi", "M365", 2021, 85.0)),
        Box::new(Vehicle::from_string("Honda-Civic-2019")?),
    ];
    Ok(vehicles)
}

pub fn drive_all(vehicles: &mut [Box<dyn VehicleLike>], distance: f64) {
    for vehicle in vehicles.iter_mut() {
        vehicle.drive(distance);
    }
}

/// Ejecuta la demo completa y la escribe en `out`
pub fn run_demo<W: Write>(config: &FleetConfig, out: &mut W) -> Result<Vec<Box<dyn VehicleLike>>> {
    let mut vehicles = build_demo_fleet().context("Error construyendo la flota de ejemplo")?;
    info!("🚚 Flota de ejemplo con {} vehículos", vehicles.len());

    drive_all(&mut vehicles, config.demo_distance_km);
    info!("🛣️ Cada vehículo recorrió {} km", config.demo_distance_km);

    write_report(out, &vehicles, config.report_format).context("Error escribiendo el reporte")?;

    let battery = vehicles
        .get(CHARGING_CHECK_INDEX)
        .and_then(|vehicle| vehicle.battery_percentage())
        .ok_or_else(|| anyhow!("El vehículo en el índice {} no tiene batería", CHARGING_CHECK_INDEX))?;

    writeln!(out)?;
    writeln!(
        out,
        "Scooter needs charging {}",
        ElectricScooter::is_charging_required(battery)
    )?;

    Ok(vehicles)
}

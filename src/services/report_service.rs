//! Servicio de reportes de flota
//!
//! Recorre una colección heterogénea de vehículos en orden y escribe el resumen
//! de cada uno con despacho dinámico (`dyn VehicleLike`).

use std::io::{self, Write};

use crate::config::ReportFormat;
use crate::dto::VehicleReportEntry;
use crate::models::VehicleLike;

/// Imprime el reporte de vehículos en stdout, una línea por vehículo
pub fn print_vehicle_report(vehicles: &[Box<dyn VehicleLike>]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_vehicle_report(&mut handle, vehicles)
}

pub fn write_vehicle_report<W: Write>(out: &mut W, vehicles: &[Box<dyn VehicleLike>]) -> io::Result<()> {
    for vehicle in vehicles {
        writeln!(out, "{}", vehicle.get_info())?;
    }
    Ok(())
}

/// Escribe el reporte como un array JSON, en el mismo orden de entrada
pub fn write_vehicle_report_json<W: Write>(out: &mut W, vehicles: &[Box<dyn VehicleLike>]) -> io::Result<()> {
    let entries: Vec<VehicleReportEntry> = vehicles
        .iter()
        .map(|vehicle| VehicleReportEntry::from(&**vehicle))
        .collect();

    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)
}

pub fn write_report<W: Write>(
    out: &mut W,
    vehicles: &[Box<dyn VehicleLike>],
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_vehicle_report(out, vehicles),
        ReportFormat::Json => write_vehicle_report_json(out, vehicles),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Car, ElectricScooter, Vehicle};

    fn sample_fleet() -> Vec<Box<dyn VehicleLike>> {
        let fleet: Vec<Box<dyn VehicleLike>> = vec![
            Box::new(ElectricScooter::with_battery("Xiaomi", "M365", 2021, 85.0)),
            Box::new(Vehicle::new("Honda", "Civic", 2019)),
            Box::new(Car::new("Toyota", "Corolla", 2020, 50.0)),
        ];
        fleet
    }

    #[test]
    fn test_text_report_keeps_order_and_overrides() {
        let mut out = Vec::new();
        write_vehicle_report(&mut out, &sample_fleet()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "2021 Xiaomi M365 | Mileage: 0 km | Battery: 85.0%",
                "2019 Honda Civic | Mileage: 0 km",
                "2020 Toyota Corolla | Mileage: 0 km | Fuel Capacity: 50 L",
            ]
        );
    }

    #[test]
    fn test_empty_report() {
        let mut out = Vec::new();
        write_vehicle_report(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_report(&mut out, &sample_fleet(), ReportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["vehicle_type"], "Electric Scooter");
        assert_eq!(entries[0]["battery_percentage"], 85.0);
        assert_eq!(entries[1]["vehicle_type"], "Generic Vehicle");
        assert!(entries[1].get("battery_percentage").is_none());
        assert_eq!(entries[2]["info"], "2020 Toyota Corolla | Mileage: 0 km | Fuel Capacity: 50 L");
    }
}

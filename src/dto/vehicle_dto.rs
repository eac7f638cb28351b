use serde::Serialize;

use crate::models::VehicleLike;

// Entrada del reporte de flota en formato JSON
#[derive(Debug, Serialize, PartialEq)]
pub struct VehicleReportEntry {
    pub vehicle_type: String,
    pub info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_percentage: Option<f64>,
}

impl From<&dyn VehicleLike> for VehicleReportEntry {
    fn from(vehicle: &dyn VehicleLike) -> Self {
        Self {
            vehicle_type: vehicle.vehicle_type().to_string(),
            info: vehicle.get_info(),
            battery_percentage: vehicle.battery_percentage(),
        }
    }
}

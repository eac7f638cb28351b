//! Modelo de ElectricScooter
//!
//! Vehicle con batería: conducir descuenta batería (1% cada 5 km) con piso en 0.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::vehicle::{Vehicle, VehicleLike};

pub const ELECTRIC_SCOOTER_TYPE: &str = "Electric Scooter";

/// Batería inicial por defecto (%)
pub const DEFAULT_BATTERY_PERCENTAGE: f64 = 100.0;

/// Consumo de batería por km recorrido (%)
pub const BATTERY_DRAIN_PER_KM: f64 = 0.2;

/// Por debajo de este porcentaje hay que cargar
pub const CHARGING_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricScooter {
    #[serde(flatten)]
    inner: Vehicle,
    battery_percentage: f64,
}

impl ElectricScooter {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i64) -> Self {
        Self::with_battery(make, model, year, DEFAULT_BATTERY_PERCENTAGE)
    }

    pub fn with_battery(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i64,
        battery_percentage: f64,
    ) -> Self {
        Self::with_battery_and_mileage(make, model, year, battery_percentage, 0.0)
    }

    pub fn with_battery_and_mileage(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i64,
        battery_percentage: f64,
        mileage: f64,
    ) -> Self {
        Self {
            inner: Vehicle::with_mileage(make, model, year, mileage),
            battery_percentage,
        }
    }

    /// Verificar si se requiere carga
    pub fn is_charging_required(battery_percentage: f64) -> bool {
        battery_percentage < CHARGING_THRESHOLD
    }
}

impl VehicleLike for ElectricScooter {
    fn vehicle_type(&self) -> &'static str {
        ELECTRIC_SCOOTER_TYPE
    }

    fn base(&self) -> &Vehicle {
        &self.inner
    }

    fn base_mut(&mut self) -> &mut Vehicle {
        &mut self.inner
    }

    /// La batería se recalcula aun cuando la distancia no es positiva: solo hay
    /// piso en 0, sin techo, así que una distancia negativa la aumenta.
    fn drive(&mut self, distance: f64) {
        self.inner.drive(distance);
        self.battery_percentage = (self.battery_percentage - distance * BATTERY_DRAIN_PER_KM).max(0.0);
        debug!("🔋 {} {} batería: {:.1}%", self.inner.make, self.inner.model, self.battery_percentage);
    }

    fn get_info(&self) -> String {
        let base_info = self.inner.get_info();
        format!("{} | Battery: {:.1}%", base_info, self.battery_percentage)
    }

    fn battery_percentage(&self) -> Option<f64> {
        Some(self.battery_percentage)
    }
}

impl fmt::Display for ElectricScooter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self as &dyn VehicleLike, f)
    }
}

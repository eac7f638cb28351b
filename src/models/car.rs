//! Modelo de Car
//!
//! Vehicle con capacidad de combustible; conduce igual que el vehículo base.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::vehicle::{Vehicle, VehicleLike};

pub const CAR_TYPE: &str = "Car";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(flatten)]
    inner: Vehicle,
    /// Capacidad del tanque (litros), fija desde la construcción
    fuel_capacity: f64,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i64, fuel_capacity: f64) -> Self {
        Self::with_mileage(make, model, year, fuel_capacity, 0.0)
    }

    pub fn with_mileage(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i64,
        fuel_capacity: f64,
        mileage: f64,
    ) -> Self {
        Self {
            inner: Vehicle::with_mileage(make, model, year, mileage),
            fuel_capacity,
        }
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.fuel_capacity
    }
}

impl VehicleLike for Car {
    fn vehicle_type(&self) -> &'static str {
        CAR_TYPE
    }

    fn base(&self) -> &Vehicle {
        &self.inner
    }

    fn base_mut(&mut self) -> &mut Vehicle {
        &mut self.inner
    }

    fn get_info(&self) -> String {
        let base_info = self.inner.get_info();
        format!("{} | Fuel Capacity: {} L", base_info, self.fuel_capacity)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self as &dyn VehicleLike, f)
    }
}

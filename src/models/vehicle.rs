//! Modelo de Vehicle
//!
//! Este módulo contiene el struct base `Vehicle` y el trait `VehicleLike`,
//! la capacidad común que comparten todas las variantes (Car, ElectricScooter).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::utils::errors::{VehicleError, VehicleResult};

/// Etiqueta fija del vehículo genérico
pub const GENERIC_VEHICLE_TYPE: &str = "Generic Vehicle";

/// Separador del formato de texto 'Make-Model-Year'
const TEXT_DELIMITER: char = '-';

/// Capacidad común de todos los vehículos.
///
/// Las variantes embeben un `Vehicle` base y lo exponen con `base`/`base_mut`;
/// los métodos por defecto delegan en él y cada variante sobrescribe solo lo
/// que cambia.
pub trait VehicleLike: fmt::Debug {
    /// Etiqueta fija de la variante ("Generic Vehicle", "Car", "Electric Scooter")
    fn vehicle_type(&self) -> &'static str;

    fn base(&self) -> &Vehicle;

    fn base_mut(&mut self) -> &mut Vehicle;

    /// Conducir `distance` km
    fn drive(&mut self, distance: f64) {
        self.base_mut().drive(distance);
    }

    /// Resumen legible del vehículo
    fn get_info(&self) -> String {
        self.base().get_info()
    }

    /// Porcentaje de batería, solo para variantes eléctricas
    fn battery_percentage(&self) -> Option<f64> {
        None
    }
}

impl<'a> fmt::Display for dyn VehicleLike + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.vehicle_type(), self.get_info())
    }
}

/// Vehicle base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: i64,
    /// Kilometraje acumulado (km)
    pub mileage: f64,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i64) -> Self {
        Self::with_mileage(make, model, year, 0.0)
    }

    pub fn with_mileage(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i64,
        mileage: f64,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            mileage,
        }
    }

    /// Incrementa el kilometraje; distancias no positivas se ignoran
    pub fn drive(&mut self, distance: f64) {
        if distance > 0.0 {
            self.mileage += distance;
            debug!("🚗 {} {} recorrió {} km (total {} km)", self.make, self.model, distance, self.mileage);
        } else {
            warn!("⚠️ Distancia ignorada para {} {}: {}", self.make, self.model, distance);
        }
    }

    pub fn get_info(&self) -> String {
        format!("{} {} {} | Mileage: {} km", self.year, self.make, self.model, self.mileage)
    }

    /// Crea un Vehicle desde un texto 'Make-Model-Year'
    pub fn from_string(text: &str) -> VehicleResult<Self> {
        let parts: Vec<&str> = text.split(TEXT_DELIMITER).collect();

        let [make, model, year] = parts.as_slice() else {
            return Err(VehicleError::MalformedText {
                input: text.to_string(),
                parts: parts.len(),
            });
        };

        let year = year.trim().parse::<i64>().map_err(|source| VehicleError::InvalidYear {
            input: text.to_string(),
            source,
        })?;

        debug!("📝 Vehicle parseado desde '{}'", text);
        Ok(Self::new(*make, *model, year))
    }
}

impl FromStr for Vehicle {
    type Err = VehicleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl VehicleLike for Vehicle {
    fn vehicle_type(&self) -> &'static str {
        GENERIC_VEHICLE_TYPE
    }

    fn base(&self) -> &Vehicle {
        self
    }

    fn base_mut(&mut self) -> &mut Vehicle {
        self
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self as &dyn VehicleLike, f)
    }
}

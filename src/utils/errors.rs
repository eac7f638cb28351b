//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema: el fallo al construir
//! un vehículo desde texto y los valores de configuración inválidos.

use std::num::ParseIntError;
use thiserror::Error;

/// Errores del modelo de vehículos
#[derive(Error, Debug)]
pub enum VehicleError {
    #[error("Malformed vehicle text '{input}': expected 'Make-Model-Year', got {parts} part(s)")]
    MalformedText { input: String, parts: usize },

    #[error("Invalid year in vehicle text '{input}': {source}")]
    InvalidYear {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errores de configuración del entorno
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Resultado tipado para operaciones sobre vehículos
pub type VehicleResult<T> = Result<T, VehicleError>;

/// Función helper para crear errores de configuración
pub fn invalid_config(key: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VehicleError::MalformedText { input: "BadInput".to_string(), parts: 1 };
        assert_eq!(
            err.to_string(),
            "Malformed vehicle text 'BadInput': expected 'Make-Model-Year', got 1 part(s)"
        );

        let err = invalid_config("FLEET_LOG_LEVEL", "loud", "unknown level");
        assert_eq!(err.to_string(), "Invalid value for FLEET_LOG_LEVEL: 'loud' (unknown level)");
    }

    #[test]
    fn test_invalid_year_keeps_source() {
        use std::error::Error as _;

        let source = "notayear".parse::<i32>().unwrap_err();
        let err = VehicleError::InvalidYear { input: "Honda-Civic-notayear".to_string(), source };
        assert!(err.source().is_some());
    }
}

//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración de la demo de flota. Todas las
//! variables son opcionales; un valor presente pero inválido es un error.

use std::env;
use std::str::FromStr;
use tracing::Level;

use crate::utils::errors::{invalid_config, ConfigError};

pub const DEMO_DISTANCE_KEY: &str = "FLEET_DEMO_DISTANCE_KM";
pub const REPORT_FORMAT_KEY: &str = "FLEET_REPORT_FORMAT";
pub const LOG_LEVEL_KEY: &str = "FLEET_LOG_LEVEL";

const DEFAULT_DEMO_DISTANCE_KM: f64 = 100.0;

/// Formato de salida del reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(invalid_config(REPORT_FORMAT_KEY, s, "expected 'text' or 'json'")),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone, PartialEq)]
pub struct FleetConfig {
    pub demo_distance_km: f64,
    pub report_format: ReportFormat,
    pub log_level: Level,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            demo_distance_km: DEFAULT_DEMO_DISTANCE_KM,
            report_format: ReportFormat::Text,
            log_level: Level::INFO,
        }
    }
}

impl FleetConfig {
    /// Cargar configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(DEMO_DISTANCE_KEY) {
            config.demo_distance_km = raw
                .trim()
                .parse()
                .map_err(|e: std::num::ParseFloatError| invalid_config(DEMO_DISTANCE_KEY, &raw, e.to_string()))?;
        }

        if let Some(raw) = lookup(REPORT_FORMAT_KEY) {
            config.report_format = raw.parse()?;
        }

        if let Some(raw) = lookup(LOG_LEVEL_KEY) {
            config.log_level = raw
                .trim()
                .parse()
                .map_err(|_| invalid_config(LOG_LEVEL_KEY, &raw, "expected trace, debug, info, warn or error"))?;
        }

        Ok(config)
    }
}

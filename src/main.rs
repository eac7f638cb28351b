use anyhow::Result;
use dotenvy::dotenv;
use std::io;
use tracing::info;

use vehicle_fleet::config::FleetConfig;
use vehicle_fleet::services::run_demo;

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = FleetConfig::from_env()?;

    // Configurar logging (stderr, para no mezclarlo con el reporte)
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    info!("🚗 Vehicle Fleet - Demo de polimorfismo");
    info!("=======================================");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_demo(&config, &mut handle)?;

    info!("✅ Demo completada");
    Ok(())
}

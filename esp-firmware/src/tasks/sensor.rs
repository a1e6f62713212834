// Sensor Task - Hält die geteilten Messwerte frisch
use defmt::info;
use embassy_time::{Duration, Timer};
use esp_core::readings::sample;

use crate::READINGS;
use crate::config::SENSOR_SAMPLE_INTERVAL_SECS;
use crate::hal::Bme280Sensor;

/// Sensor Sampling Task
///
/// Liest in jedem Zyklus Temperatur und Feuchtigkeit (zwei unabhängige
/// Abfragen, in dieser Reihenfolge) und überschreibt die geteilte Zelle.
/// Zwischen den Zyklen schläft der Task für das feste Intervall. Läuft
/// endlos; es gibt keinen Fehlerpfad.
///
/// # Parameter
/// - `i2c_peripheral`: I2C0 Peripheral für den Sensor-Bus
/// - `sda`/`scl`: GPIO-Pins der I2C-Leitungen
#[embassy_executor::task]
pub async fn sensor_task(
    i2c_peripheral: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO6<'static>,
    scl: esp_hal::peripherals::GPIO7<'static>,
) {
    // Hardware initialisieren: I2C-Bus + BME280 (Init-Fehler sind fatal)
    let mut sensor = Bme280Sensor::new(i2c_peripheral, sda, scl);
    info!("Sensor: I2C driver initialized");

    loop {
        // Eine Diagnose-Zeile pro Zyklus mit beiden Werten
        let reading = sample(&mut sensor, &READINGS);
        info!(
            "Sensor: {} degrees C, {} % RH",
            reading.temperature, reading.humidity
        );

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_secs(SENSOR_SAMPLE_INTERVAL_SECS)).await;
    }
}

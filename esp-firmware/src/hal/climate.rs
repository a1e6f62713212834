// Temperatur-/Feuchtigkeits-Sensor hinter dem EnvironmentSensor Trait
//
// BME280 am blocking I2C-Master. Jede Trait-Abfrage ist eine eigene
// I2C-Transaktion - Temperatur und Feuchtigkeit werden nie als Paar
// gelesen, das Zeitfenster zwischen beiden bleibt erhalten.

use bme280::i2c::BME280;
use esp_core::EnvironmentSensor;
use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};

/// Real Hardware Sensor
pub struct Bme280Sensor {
    driver: BME280<I2c<'static, Blocking>>,
    delay: Delay,
}

impl Bme280Sensor {
    /// Initialisiert I2C-Bus und Sensor
    ///
    /// Ein Init-Fehler beim Boot ist fatal.
    pub fn new(
        i2c_peripheral: esp_hal::peripherals::I2C0<'static>,
        sda: esp_hal::peripherals::GPIO6<'static>,
        scl: esp_hal::peripherals::GPIO7<'static>,
    ) -> Self {
        let i2c = I2c::new(i2c_peripheral, I2cConfig::default())
            .expect("Failed to initialize I2C bus")
            .with_sda(sda)
            .with_scl(scl);

        let mut delay = Delay::new();
        let mut driver = BME280::new_primary(i2c);
        driver
            .init(&mut delay)
            .expect("Failed to initialize BME280 sensor");

        Self { driver, delay }
    }
}

impl EnvironmentSensor for Bme280Sensor {
    // Messfehler haben keinen eigenen Kanal: ein fehlgeschlagenes Messen
    // liefert 0.0 und ist stromabwärts von einer echten Messung nicht
    // unterscheidbar (siehe DESIGN.md).

    fn read_temperature(&mut self) -> f32 {
        self.driver
            .measure(&mut self.delay)
            .map(|m| m.temperature)
            .unwrap_or(0.0)
    }

    fn read_humidity(&mut self) -> f32 {
        self.driver
            .measure(&mut self.delay)
            .map(|m| m.humidity)
            .unwrap_or(0.0)
    }
}

//! Geteilte Sensor-Messwerte
//!
//! Genau ein Schreiber (Sensor-Task), beliebige Leser (HTTP-Responder).
//! Kein Locking, kein Warten auf Frische.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::traits::EnvironmentSensor;
use crate::types::EnvironmentReading;

/// Prozessweite Zelle für die jüngste Messung
///
/// Beide Felder sind unabhängige atomare Worte (f32 als Bitmuster).
/// Konsistenz-Vertrag: ein einzelner Wert kann nie teilweise geschrieben
/// gelesen werden, aber ein Leser darf eine Temperatur aus Zyklus N mit
/// einer Feuchtigkeit aus Zyklus N+1 paaren. Dieses Zeitfenster ist
/// akzeptiert: beide Werte sind unabhängig aussagekräftig und eine
/// Verzögerung von einer Sample-Periode ist für eine Status-Anzeige
/// tolerierbar.
pub struct SharedReadings {
    temperature_bits: AtomicU32,
    humidity_bits: AtomicU32,
}

impl SharedReadings {
    /// Startwert 0.0/0.0, wird vom Sampler fortlaufend überschrieben
    pub const fn new() -> Self {
        Self {
            temperature_bits: AtomicU32::new(0),
            humidity_bits: AtomicU32::new(0),
        }
    }

    pub fn store_temperature(&self, value: f32) {
        self.temperature_bits.store(value.to_bits(), Ordering::Relaxed);
    }

    pub fn store_humidity(&self, value: f32) {
        self.humidity_bits.store(value.to_bits(), Ordering::Relaxed);
    }

    pub fn temperature(&self) -> f32 {
        f32::from_bits(self.temperature_bits.load(Ordering::Relaxed))
    }

    pub fn humidity(&self) -> f32 {
        f32::from_bits(self.humidity_bits.load(Ordering::Relaxed))
    }

    /// Zwei unabhängige Loads - die Paarung kann Zyklen mischen
    pub fn snapshot(&self) -> EnvironmentReading {
        EnvironmentReading {
            temperature: self.temperature(),
            humidity: self.humidity(),
        }
    }
}

impl Default for SharedReadings {
    fn default() -> Self {
        Self::new()
    }
}

/// Ein Sample-Zyklus: Temperatur, dann Feuchtigkeit
///
/// Zwei unabhängige Sensor-Abfragen, jeder Wert wird sofort nach dem Lesen
/// veröffentlicht. Zwischen den beiden Stores ist die Zelle gemischt
/// sichtbar. Gibt das Paar für die Diagnose-Logzeile des Aufrufers zurück.
pub fn sample<S: EnvironmentSensor>(
    sensor: &mut S,
    readings: &SharedReadings,
) -> EnvironmentReading {
    let temperature = sensor.read_temperature();
    readings.store_temperature(temperature);

    let humidity = sensor.read_humidity();
    readings.store_humidity(humidity);

    EnvironmentReading {
        temperature,
        humidity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot_is_zero() {
        let readings = SharedReadings::new();
        let snap = readings.snapshot();
        assert_eq!(snap.temperature, 0.0);
        assert_eq!(snap.humidity, 0.0);
    }

    #[test]
    fn test_store_and_load_roundtrip() {
        let readings = SharedReadings::new();
        readings.store_temperature(23.5);
        readings.store_humidity(41.2);
        assert_eq!(readings.temperature(), 23.5);
        assert_eq!(readings.humidity(), 41.2);
    }

    #[test]
    fn test_snapshot_may_pair_across_updates() {
        let readings = SharedReadings::new();
        readings.store_temperature(1.0);
        readings.store_humidity(2.0);

        // Neuer Temperatur-Wert vor dem zugehörigen Feuchtigkeits-Wert:
        // der Snapshot mischt die Zyklen
        readings.store_temperature(3.0);
        let snap = readings.snapshot();
        assert_eq!(snap.temperature, 3.0);
        assert_eq!(snap.humidity, 2.0);
    }

    #[test]
    fn test_negative_values_survive_bit_cast() {
        let readings = SharedReadings::new();
        readings.store_temperature(-12.75);
        assert_eq!(readings.temperature(), -12.75);
    }
}

//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::PinLevel;

/// Fehler-Typ für Pin-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    SetFailed,
}

/// Trait für den digitalen Ausgang der Signal-LED
///
/// # Implementierungen
/// - **Production:** GpioIndicator (esp-hal GPIO Output)
/// - **Testing:** MockIndicator (in-memory Mock)
pub trait IndicatorPin: Send {
    /// Treibt den Pin auf den gegebenen Logik-Pegel
    ///
    /// # Fehlerbehandlung
    /// Gibt `PinError::SetFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set(&mut self, level: PinLevel) -> Result<(), PinError>;
}

/// Trait für den Temperatur-/Feuchtigkeits-Sensor
///
/// Zwei unabhängige Abfragen, keine gemeinsame Transaktion. Der Treiber
/// liefert immer einen Wert: ein Lesefehler ist von einer gültig
/// aussehenden Messung nicht unterscheidbar (bekannte, bewusst
/// beibehaltene Schwachstelle, siehe DESIGN.md).
///
/// # Implementierungen
/// - **Production:** Bme280Sensor (I2C)
/// - **Testing:** MockSensor (scripted Werte)
pub trait EnvironmentSensor: Send {
    /// Liest die Temperatur in Grad Celsius
    fn read_temperature(&mut self) -> f32;

    /// Liest die relative Luftfeuchtigkeit in Prozent
    fn read_humidity(&mut self) -> f32;
}

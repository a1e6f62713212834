// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    ConnectionState, EnvironmentReading, EnvironmentSensor, IndicatorPin, PinLevel, SharedReadings,
    StationEvent, StationMachine,
};

// Embassy Synchronisations-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::watch::Watch;

// ============================================================================
// Prozessweiter geteilter Zustand
// ============================================================================

/// Jüngste Sensor-Messung, geschrieben vom Sensor-Task, gelesen vom
/// HTTP-Responder. Konsistenz-Vertrag siehe `esp_core::readings`:
/// einzelne Werte sind atomar, die Paarung kann Sample-Zyklen mischen.
pub static READINGS: SharedReadings = SharedReadings::new();

/// Konnektivitäts-Latch: true sobald DHCP eine Adresse zugewiesen hat
///
/// Geschrieben nur vom Connection-Task. Andere Tasks könnten über
/// `CONNECTIVITY.receiver()` darauf warten; in diesem Kern blockiert
/// niemand darauf.
pub type ConnectivityWatch = Watch<CriticalSectionRawMutex, bool, 2>;
pub static CONNECTIVITY: ConnectivityWatch = Watch::new();

//! Core Types für den Klima-Monitor
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Logik-Pegel für den Signal-LED-Ausgang
///
/// Das HTTP-Token 'h' treibt den Pin auf Low, 'l' auf High. Die Zuordnung
/// hängt von der Verdrahtungs-Polarität ab und wird hier bewusst nicht
/// umgedeutet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

/// Zustand der WLAN-Station-Verbindung
///
/// Wird nur vom Connection-Manager mutiert; andere Komponenten lesen ihn
/// nicht, er bleibt zur Beobachtbarkeit erhalten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Connecting,
    Connected,
}

/// Netzwerk-Ereignisse die die Station-Zustandsmaschine treiben
///
/// Alle anderen Ereignisse des Netzwerk-Stacks werden ignoriert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationEvent {
    /// Station-Modus wurde gestartet
    StationStart,
    /// DHCP hat eine Adresse zugewiesen
    AddressAssigned,
    /// Verbindung zum Access Point verloren
    Disconnected,
}

/// Die jüngste Sensor-Messung (Temperatur in °C, Feuchtigkeit in % RH)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentReading {
    pub temperature: f32,
    pub humidity: f32,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PinLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinLevel::Low => defmt::write!(fmt, "Low"),
            PinLevel::High => defmt::write!(fmt, "High"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConnectionState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConnectionState::Idle => defmt::write!(fmt, "Idle"),
            ConnectionState::Connecting => defmt::write!(fmt, "Connecting"),
            ConnectionState::Connected => defmt::write!(fmt, "Connected"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StationEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            StationEvent::StationStart => defmt::write!(fmt, "StationStart"),
            StationEvent::AddressAssigned => defmt::write!(fmt, "AddressAssigned"),
            StationEvent::Disconnected => defmt::write!(fmt, "Disconnected"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EnvironmentReading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "EnvironmentReading {{ temperature: {}, humidity: {} }}",
            self.temperature,
            self.humidity
        )
    }
}

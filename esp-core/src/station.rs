//! Station-Zustandsmaschine für den WLAN-Beitritt
//!
//! Drei Zustände, drei Ereignisse, kein Endzustand. Die Regel "nach jedem
//! Disconnect sofort neu verbinden" ist hier eine prüfbare Transition statt
//! beiläufiger Code im Event-Handler.

use crate::types::{ConnectionState, StationEvent};

/// Aktion die der Aufrufer nach einer Transition ausführen soll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationAction {
    /// Einen (neuen) Verbindungsversuch starten
    Connect,
}

/// Zustandsmaschine des Connection-Managers
///
/// Läuft für die Prozess-Lebensdauer und pendelt nach dem Start zwischen
/// Connecting und Connected. Kein Backoff, kein Versuchslimit: ein
/// Fehlschlag löst nur den nächsten Versuch aus. Die Tests schreiben
/// dieses Verhalten fest.
pub struct StationMachine {
    state: ConnectionState,
}

impl StationMachine {
    pub const fn new() -> Self {
        Self {
            state: ConnectionState::Idle,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Konnektivitäts-Signal: eine Adresse wurde zugewiesen
    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Verarbeitet ein Netzwerk-Ereignis und liefert die Folge-Aktion
    ///
    /// - `StationStart` und `Disconnected` verlangen immer einen
    ///   Verbindungsversuch, unabhängig vom aktuellen Zustand.
    /// - `AddressAssigned` setzt nur das Konnektivitäts-Signal; der
    ///   Aufrufer loggt Gateway und Netzmaske (reine Diagnose).
    pub fn on_event(&mut self, event: StationEvent) -> Option<StationAction> {
        match event {
            StationEvent::StationStart => {
                self.state = ConnectionState::Connecting;
                Some(StationAction::Connect)
            }
            StationEvent::AddressAssigned => {
                self.state = ConnectionState::Connected;
                None
            }
            StationEvent::Disconnected => {
                self.state = ConnectionState::Connecting;
                Some(StationAction::Connect)
            }
        }
    }
}

impl Default for StationMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let machine = StationMachine::new();
        assert_eq!(machine.state(), ConnectionState::Idle);
        assert!(!machine.is_connected());
    }

    #[test]
    fn test_station_start_triggers_connect() {
        let mut machine = StationMachine::new();
        let action = machine.on_event(StationEvent::StationStart);
        assert_eq!(action, Some(StationAction::Connect));
        assert_eq!(machine.state(), ConnectionState::Connecting);
    }

    #[test]
    fn test_address_assigned_sets_connected() {
        let mut machine = StationMachine::new();
        machine.on_event(StationEvent::StationStart);
        let action = machine.on_event(StationEvent::AddressAssigned);
        assert_eq!(action, None);
        assert!(machine.is_connected());
    }

    #[test]
    fn test_disconnect_clears_signal_and_reconnects() {
        let mut machine = StationMachine::new();
        machine.on_event(StationEvent::StationStart);
        machine.on_event(StationEvent::AddressAssigned);

        let action = machine.on_event(StationEvent::Disconnected);
        assert_eq!(action, Some(StationAction::Connect));
        assert!(!machine.is_connected());
        assert_eq!(machine.state(), ConnectionState::Connecting);
    }
}

//! Integration Tests für die Station-Zustandsmaschine
//!
//! Diese Tests laufen auf dem Host (x86_64); sie schreiben insbesondere
//! das "immer sofort neu verbinden"-Verhalten fest.

use esp_core::{ConnectionState, StationAction, StationEvent, StationMachine};

#[test]
fn test_machine_starts_idle_and_unconnected() {
    let machine = StationMachine::new();
    assert_eq!(machine.state(), ConnectionState::Idle);
    assert!(!machine.is_connected());
}

#[test]
fn test_station_start_moves_to_connecting_with_connect_action() {
    let mut machine = StationMachine::new();
    let action = machine.on_event(StationEvent::StationStart);
    assert_eq!(action, Some(StationAction::Connect));
    assert_eq!(machine.state(), ConnectionState::Connecting);
    assert!(!machine.is_connected());
}

#[test]
fn test_address_assigned_sets_connectivity_signal() {
    let mut machine = StationMachine::new();
    machine.on_event(StationEvent::StationStart);

    let action = machine.on_event(StationEvent::AddressAssigned);
    assert_eq!(action, None);
    assert_eq!(machine.state(), ConnectionState::Connected);
    assert!(machine.is_connected());
}

#[test]
fn test_disconnect_clears_signal_and_demands_reconnect() {
    let mut machine = StationMachine::new();
    machine.on_event(StationEvent::StationStart);
    machine.on_event(StationEvent::AddressAssigned);

    let action = machine.on_event(StationEvent::Disconnected);
    assert_eq!(action, Some(StationAction::Connect));
    assert_eq!(machine.state(), ConnectionState::Connecting);
    assert!(!machine.is_connected());
}

#[test]
fn test_repeated_disconnects_never_go_idle() {
    // Beliebig viele Disconnects hintereinander: die Maschine verlangt
    // jedes Mal einen neuen Versuch und landet nie wieder in Idle.
    // Kein Backoff, kein Limit.
    let mut machine = StationMachine::new();
    machine.on_event(StationEvent::StationStart);

    for _ in 0..100 {
        let action = machine.on_event(StationEvent::Disconnected);
        assert_eq!(action, Some(StationAction::Connect));
        assert_eq!(machine.state(), ConnectionState::Connecting);
    }
}

#[test]
fn test_connect_disconnect_cycle() {
    // Lebenslauf: Connecting → Connected → Connecting → Connected → ...
    let mut machine = StationMachine::new();
    machine.on_event(StationEvent::StationStart);

    for _ in 0..5 {
        machine.on_event(StationEvent::AddressAssigned);
        assert!(machine.is_connected());

        machine.on_event(StationEvent::Disconnected);
        assert!(!machine.is_connected());
        assert_eq!(machine.state(), ConnectionState::Connecting);
    }
}

#[test]
fn test_disconnect_before_any_connection_still_reconnects() {
    // Auch ein Disconnect aus Idle heraus (z.B. fehlgeschlagener erster
    // Versuch) führt zu einem neuen Verbindungsversuch
    let mut machine = StationMachine::new();
    let action = machine.on_event(StationEvent::Disconnected);
    assert_eq!(action, Some(StationAction::Connect));
    assert_eq!(machine.state(), ConnectionState::Connecting);
}

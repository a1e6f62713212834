// WiFi Task - Verbindet mit WLAN und managed Connection
use defmt::{Debug2Format, error, info, warn};
use embassy_futures::select::{Either, select};
use embassy_net::{Runner, Stack};
use esp_core::{StationEvent, StationMachine};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent};

use crate::CONNECTIVITY;
use crate::config::{WIFI_PASSWORD, WIFI_SSID};

/// WiFi Connection Task
///
/// Treibt die Station-Zustandsmaschine aus esp-core:
/// - Startet den Station-Modus und verbindet mit dem Access Point
/// - Wartet auf die DHCP-Adresse und setzt das Konnektivitäts-Latch
/// - Reconnected nach jedem Disconnect sofort - kein Backoff, kein
///   Versuchslimit. Die Tests in esp-tests schreiben dieses Verhalten fest.
#[embassy_executor::task]
pub async fn connection_task(
    mut controller: WifiController<'static>,
    stack: &'static Stack<'static>,
) {
    info!("WiFi: Starting connection task");

    let mut machine = StationMachine::new();
    let link = CONNECTIVITY.sender();

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            info!("WiFi: Configuring and starting...");

            // Configure WiFi station mode
            let client_config = ModeConfig::Client(
                ClientConfig::default()
                    .with_ssid(WIFI_SSID.into())
                    .with_password(WIFI_PASSWORD.into()),
            );

            if let Err(e) = controller.set_config(&client_config) {
                error!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
                continue;
            }

            if let Err(e) = controller.start_async().await {
                error!("WiFi: Failed to start: {}", Debug2Format(&e));
                continue;
            }

            info!("WiFi: Started successfully");
            machine.on_event(StationEvent::StationStart);
        }

        // Connect to AP
        info!(
            "WiFi: Connecting to '{}' (state: {})...",
            WIFI_SSID,
            machine.state()
        );
        match controller.connect_async().await {
            Ok(_) => {
                info!("WiFi: Connected successfully!");
            }
            Err(e) => {
                // Fehlgeschlagener Versuch == Disconnect: der nächste
                // Versuch folgt sofort, ohne Wartezeit
                error!("WiFi: Connection failed: {}", Debug2Format(&e));
                machine.on_event(StationEvent::Disconnected);
                continue;
            }
        }

        // Auf die DHCP-Adresse warten; ein Disconnect währenddessen
        // startet sofort den nächsten Versuch
        match select(
            stack.wait_config_up(),
            controller.wait_for_event(WifiEvent::StaDisconnected),
        )
        .await
        {
            Either::First(_) => {}
            Either::Second(_) => {
                machine.on_event(StationEvent::Disconnected);
                link.send(false);
                warn!("WiFi: Disconnected while waiting for address, retrying");
                continue;
            }
        }

        machine.on_event(StationEvent::AddressAssigned);
        link.send(true);

        // Netzwerk-Parameter nur zur Diagnose, von keiner Logik konsumiert
        if let Some(config) = stack.config_v4() {
            info!("WiFi: Got IP address!");
            info!("  IP:      {}", Debug2Format(&config.address.address()));
            info!("  Netmask: {}", Debug2Format(&config.address.netmask()));
            info!("  Gateway: {}", Debug2Format(&config.gateway));
        }

        // Wait for disconnect
        info!("WiFi: Waiting for disconnect event...");
        controller.wait_for_event(WifiEvent::StaDisconnected).await;

        // Liefert immer StationAction::Connect - die nächste Runde
        // verbindet ohne Wartezeit neu
        let action = machine.on_event(StationEvent::Disconnected);
        link.send(false);
        warn!(
            "WiFi: Disconnected from AP, retrying (action: {})",
            Debug2Format(&action)
        );
    }
}

/// Network Task
///
/// Überwacht den Netzwerk-Stack:
/// - Prozessiert Netzwerk-Pakete
/// - Managed TCP/IP Stack
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

// HTTP Server Task - Serviert die Status-Seite und schaltet die LED
use defmt::{Debug2Format, info, warn};
use embassy_net::Stack;
use embassy_net::tcp::TcpSocket;
use embedded_io_async::Write;
use esp_core::{HTTP_HEADER, ServeResult, serve_request};

use crate::READINGS;
use crate::config::{HTTP_PORT, REQUEST_BUFFER_SIZE, TCP_RX_BUFFER_SIZE, TCP_TX_BUFFER_SIZE};
use crate::hal::GpioIndicator;

/// HTTP Server Task - läuft parallel zu anderen Tasks
///
/// Strikt sequentielle Accept-Schleife: genau EINE Verbindung zur Zeit,
/// ein zweiter Client wartet bis die vorige vollständig geschlossen ist.
/// Ein hängender Client blockiert damit alle weiteren - eine bewusste
/// Grenze dieses Designs, kein Versehen.
///
/// Pro Verbindung: ein blockierender Read für den ersten Chunk,
/// Klassifikation + Seitenaufbau + LED-Schaltung in esp-core, Antwort,
/// Schließen. Jeder Fehler beendet nur die aktuelle Verbindung; die
/// Schleife akzeptiert danach weiter.
///
/// # Parameter
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `indicator`: Signal-LED, einziger Schreiber ist dieser Task
#[embassy_executor::task]
pub async fn http_server_task(stack: &'static Stack<'static>, mut indicator: GpioIndicator) {
    info!("HTTP: Server task starting on port {}...", HTTP_PORT);

    // TCP-Buffers für den einen Socket
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    // Empfangs-Buffer für den ersten Request-Chunk
    let mut request_buf = [0u8; REQUEST_BUFFER_SIZE];

    loop {
        let mut socket = TcpSocket::new(*stack, &mut rx_buffer, &mut tx_buffer);

        if let Err(e) = socket.accept(HTTP_PORT).await {
            warn!("HTTP: Accept error: {}", Debug2Format(&e));
            continue;
        }
        info!(
            "HTTP: Connection from {}",
            Debug2Format(&socket.remote_endpoint())
        );

        serve_connection(&mut socket, &mut indicator, &mut request_buf).await;

        // Terminal für jeden Pfad: Verbindung schließen, Buffer fallen
        // mit dem Socket
        socket.close();
    }
}

/// Bearbeitet genau eine akzeptierte Verbindung
async fn serve_connection(
    socket: &mut TcpSocket<'_>,
    indicator: &mut GpioIndicator,
    request_buf: &mut [u8],
) {
    // Erster Chunk genügt - mehr wird nie gelesen
    let len = match socket.read(request_buf).await {
        Ok(0) => {
            info!("HTTP: Connection closed by client");
            return;
        }
        Ok(len) => len,
        Err(e) => {
            // Kein Retry, keine Antwort - nur diese Verbindung ist betroffen
            warn!("HTTP: Receive error: {}", Debug2Format(&e));
            return;
        }
    };

    match serve_request(&request_buf[..len], indicator, &READINGS) {
        ServeResult::Reply(page) => {
            // Header zuerst, dann die gerenderte Seite
            if let Err(e) = socket.write_all(HTTP_HEADER.as_bytes()).await {
                warn!("HTTP: Write error: {}", Debug2Format(&e));
                return;
            }
            if let Err(e) = socket.write_all(page.as_bytes()).await {
                warn!("HTTP: Write error: {}", Debug2Format(&e));
                return;
            }
            if let Err(e) = socket.flush().await {
                warn!("HTTP: Flush error: {}", Debug2Format(&e));
            }
        }
        ServeResult::Ignored => {
            // Kein GET: schließen ohne ein einziges Byte zu schreiben
            info!("HTTP: Request not recognized, closing without reply");
        }
        ServeResult::PageOverflow => {
            warn!("HTTP: Page buffer exhausted, closing without reply");
        }
    }
}

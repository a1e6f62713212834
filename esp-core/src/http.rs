//! HTTP-Subset: Request-Klassifikation und Seiten-Rendering
//!
//! Bewusst KEIN echter HTTP-Parser. Ein Request ist genau dann
//! beantwortbar, wenn er mindestens 5 Bytes lang ist und irgendwo das
//! Literal "GET /" enthält; das Aktions-Token steht immer am festen
//! Buffer-Offset 5. Diese Einschränkungen sind sichtbare Vertragsfläche,
//! keine versteckte Buffer-Arithmetik.

use core::fmt::Write;

use crate::readings::SharedReadings;
use crate::traits::IndicatorPin;
use crate::types::{EnvironmentReading, PinLevel};

/// Fixer Antwort-Header, für jeden beantwortbaren Request identisch
pub const HTTP_HEADER: &str = "HTTP/1.1 200 OK\r\nContent-type: text/html\r\n\r\n";

/// Markierung die einen Request als GET klassifiziert (Substring-Suche!)
pub const GET_MARKER: &[u8] = b"GET /";

/// Fester Offset des Aktions-Tokens im Empfangs-Buffer
///
/// Das ist Byte 5 des Buffers, nicht das Byte hinter dem Treffer der
/// Substring-Suche.
pub const ACTION_BYTE_OFFSET: usize = 5;

// Die HTML-Seite ist in zwei feste Fragmente geteilt, damit die
// Messwert-Zeile dazwischen dynamisch aufgebaut werden kann.
const PAGE_HEAD: &str = "<!DOCTYPE html><html>\n<head>\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n  <title>HELLO ESP32</title>\n</head>\n<body>\n\t\t<h1>Hello World, from ESP32!</h1>\n\t\t<br />\n";
const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Kapazität des Seiten-Buffers pro Request
pub const PAGE_CAPACITY: usize = 512;

/// Pro Request frisch aufgebauter Seiten-Buffer
///
/// Gehört ausschließlich der bearbeitenden Invocation und wird auf jedem
/// Ausgangs-Pfad mit ihr freigegeben.
pub type RenderedPage = heapless::String<PAGE_CAPACITY>;

/// Der Seiten-Buffer reicht nicht aus; der Request wird ohne Antwort
/// abgebrochen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOverflow;

/// Ergebnis der Klassifikation der ersten empfangenen Bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestClass {
    /// Kein GET: Verbindung schließen, kein Byte schreiben
    Ignore,
    /// GET: antworten, optional vorher den Pin treiben
    Get { actuator: Option<PinLevel> },
}

/// Klassifiziert einen Request anhand der ersten empfangenen Bytes
///
/// Token-Zuordnung an Byte 5: 'h' → Low, 'l' → High, alles andere lässt
/// den Pin unverändert. Die ≥5-Byte-Vorbedingung hält den Offset im
/// gültigen Bereich sobald dieser Zweig erreicht wird.
pub fn classify_request(buf: &[u8]) -> RequestClass {
    if buf.len() < GET_MARKER.len() || !contains_marker(buf) {
        return RequestClass::Ignore;
    }

    let actuator = match buf.get(ACTION_BYTE_OFFSET) {
        Some(b'h') => Some(PinLevel::Low),
        Some(b'l') => Some(PinLevel::High),
        _ => None,
    };
    RequestClass::Get { actuator }
}

fn contains_marker(buf: &[u8]) -> bool {
    buf.windows(GET_MARKER.len()).any(|w| w == GET_MARKER)
}

/// Baut die Antwort-Seite aus den festen Fragmenten und der Messwert-Zeile
///
/// Zwei Nachkommastellen, Dezimalpunkt unabhängig von jeder Locale.
pub fn render_page(reading: EnvironmentReading) -> Result<RenderedPage, PageOverflow> {
    let mut page = RenderedPage::new();
    page.push_str(PAGE_HEAD).map_err(|_| PageOverflow)?;
    write!(
        page,
        "\t\t<p>Temp = {:.2} Humidity = {:.2}\n",
        reading.temperature, reading.humidity
    )
    .map_err(|_| PageOverflow)?;
    page.push_str(PAGE_TAIL).map_err(|_| PageOverflow)?;
    Ok(page)
}

/// Ausgang der Request-Bearbeitung, vom Task geloggt und beantwortet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServeResult {
    /// Header + Seite senden; der Pin wurde ggf. bereits getrieben
    Reply(RenderedPage),
    /// Nicht als GET klassifiziert: schließen ohne Antwort
    Ignored,
    /// Seiten-Buffer erschöpft: schließen ohne Antwort
    PageOverflow,
}

/// Bearbeitet die empfangenen Bytes einer Verbindung
///
/// Klassifiziert, rendert den aktuellen Messwert-Snapshot und treibt bei
/// erkanntem Token den Pin genau einmal. Alle drei GET-Zweige liefern die
/// identische Seite; nur der Seiteneffekt unterscheidet sich. Ein
/// fehlgeschlagener Pin-Zugriff ändert die Antwort nicht.
pub fn serve_request<P: IndicatorPin>(
    request: &[u8],
    indicator: &mut P,
    readings: &SharedReadings,
) -> ServeResult {
    let actuator = match classify_request(request) {
        RequestClass::Ignore => return ServeResult::Ignored,
        RequestClass::Get { actuator } => actuator,
    };

    let page = match render_page(readings.snapshot()) {
        Ok(page) => page,
        Err(PageOverflow) => return ServeResult::PageOverflow,
    };

    if let Some(level) = actuator {
        let _ = indicator.set(level);
    }

    ServeResult::Reply(page)
}

// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Signal-LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Signal-LED (digitaler Ausgang)
pub const INDICATOR_GPIO_PIN: u8 = 4;

// ============================================================================
// Sensor Konfiguration
// ============================================================================

/// GPIO-Pin für die I2C-Datenleitung (SDA)
pub const I2C_SDA_GPIO_PIN: u8 = 6;

/// GPIO-Pin für die I2C-Taktleitung (SCL)
pub const I2C_SCL_GPIO_PIN: u8 = 7;

/// Abtast-Intervall des Sensors in Sekunden
pub const SENSOR_SAMPLE_INTERVAL_SECS: u64 = 5;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// Gesamt-Heap: ~100 KB für WiFi-Stack

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// TCP-Port des HTTP-Responders
pub const HTTP_PORT: u16 = 80;

/// Empfangs-Buffer für den ersten Chunk eines Requests in Bytes
/// Mehr wird nie gelesen - klassifiziert wird nur der erste Chunk
pub const REQUEST_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
/// Für eingehende TCP-Daten vom Client
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
/// Für ausgehende TCP-Daten zum Client
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

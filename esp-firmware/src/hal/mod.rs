// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus esp-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod climate;
pub mod indicator;

pub use climate::Bme280Sensor;
pub use indicator::GpioIndicator;

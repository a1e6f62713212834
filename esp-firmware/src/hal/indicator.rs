// Signal-LED hinter dem IndicatorPin Trait
//
// Kapselt den esp-hal GPIO-Ausgang, damit die Request-Bearbeitung in
// esp-core gegen den Trait arbeiten kann (Mock in den Host-Tests).

use esp_core::{IndicatorPin, PinError, PinLevel};
use esp_hal::gpio::Output;

/// Real Hardware Pin Writer
///
/// Der Pin wird in main() als Ausgang konstruiert (Default-Pegel Low)
/// und hier nur noch getrieben.
pub struct GpioIndicator {
    pin: Output<'static>,
}

impl GpioIndicator {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl IndicatorPin for GpioIndicator {
    fn set(&mut self, level: PinLevel) -> Result<(), PinError> {
        // esp-hal GPIO-Schreibzugriffe sind infallibel
        match level {
            PinLevel::Low => self.pin.set_low(),
            PinLevel::High => self.pin.set_high(),
        }
        Ok(())
    }
}

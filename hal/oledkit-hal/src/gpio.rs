//! GPIO pin abstractions
//!
//! Provides the digital output trait chip HALs implement, and the
//! [`ResetLine`] capability the display driver drives at power-on.

use core::convert::Infallible;

use embedded_hal::digital::PinState;

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Controller reset line
///
/// The display session only needs to drive the line to a level; how that
/// maps onto a GPIO API is decided by whichever implementation is injected
/// at construction.
pub trait ResetLine {
    /// Drive the line high (`true`) or low (`false`)
    fn set(&mut self, high: bool);
}

impl<T: ResetLine + ?Sized> ResetLine for &mut T {
    fn set(&mut self, high: bool) {
        T::set(self, high)
    }
}

/// Reset line backed by a crate-native [`OutputPin`]
#[derive(Debug)]
pub struct PinReset<P> {
    pin: P,
}

impl<P: OutputPin> PinReset<P> {
    /// Use `pin` as the reset line
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give back the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ResetLine for PinReset<P> {
    fn set(&mut self, high: bool) {
        self.pin.set_state(high);
    }
}

/// Reset line backed by an `embedded-hal` 1.0 output pin
///
/// Only infallible pins are accepted; the reset toggle has no error path.
#[derive(Debug)]
pub struct EmbeddedResetPin<P> {
    pin: P,
}

impl<P> EmbeddedResetPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    /// Use `pin` as the reset line
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give back the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> ResetLine for EmbeddedResetPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set(&mut self, high: bool) {
        match embedded_hal::digital::OutputPin::set_state(&mut self.pin, PinState::from(high)) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        changes: u8,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                changes: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.changes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.changes += 1;
        }
    }

    /// Mock embedded-hal pin
    struct MockEhPin {
        high: bool,
    }

    impl ErrorType for MockEhPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for MockEhPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_pin_reset_follows_level() {
        let mut reset = PinReset::new(MockPin::new());

        reset.set(true);
        assert!(reset.pin.high);

        reset.set(false);
        assert!(!reset.pin.high);

        assert_eq!(reset.into_inner().changes, 2);
    }

    #[test]
    fn test_embedded_reset_follows_level() {
        let mut reset = EmbeddedResetPin::new(MockEhPin { high: false });

        reset.set(true);
        assert!(reset.pin.high);

        reset.set(false);
        assert!(!reset.into_inner().high);
    }

    #[test]
    fn test_reset_line_through_mut_ref() {
        fn pulse<R: ResetLine>(mut line: R) {
            line.set(false);
            line.set(true);
        }

        let mut reset = PinReset::new(MockPin::new());
        pulse(&mut reset);
        assert!(reset.pin.high);
    }
}

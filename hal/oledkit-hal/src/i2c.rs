//! I2C bus abstractions
//!
//! The display only ever writes to the bus, so the trait is write-only.

/// I2C bus master
///
/// Provides the addressed write used to send command and data streams
/// to a peripheral.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write, sent as one transaction
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }
}

/// Adapter exposing an `embedded-hal` 1.0 blocking I2C peripheral as an [`I2cBus`]
#[derive(Debug)]
pub struct EmbeddedI2c<T> {
    inner: T,
}

impl<T> EmbeddedI2c<T> {
    /// Wrap an `embedded-hal` I2C peripheral
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Give back the wrapped peripheral
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: embedded_hal::i2c::I2c> I2cBus for EmbeddedI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write(&mut self.inner, address, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    /// Records the last write it sees
    struct MockI2c {
        address: u8,
        data: heapless::Vec<u8, 8>,
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl embedded_hal::i2c::I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            self.address = address;
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.data.clear();
                    self.data
                        .extend_from_slice(bytes)
                        .map_err(|_| ErrorKind::Overrun)?;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_embedded_adapter_forwards_write() {
        let mut bus = EmbeddedI2c::new(MockI2c {
            address: 0,
            data: heapless::Vec::new(),
        });

        bus.write(0x3C, &[0x00, 0xAF]).unwrap();

        let inner = bus.into_inner();
        assert_eq!(inner.address, 0x3C);
        assert_eq!(inner.data.as_slice(), &[0x00, 0xAF]);
    }

    #[test]
    fn test_mut_ref_is_a_bus() {
        let mut mock = EmbeddedI2c::new(MockI2c {
            address: 0,
            data: heapless::Vec::new(),
        });

        fn send<B: I2cBus>(mut bus: B) {
            let _ = bus.write(0x3D, &[0x40]);
        }

        send(&mut mock);
        assert_eq!(mock.into_inner().address, 0x3D);
    }
}

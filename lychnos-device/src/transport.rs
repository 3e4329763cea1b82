//! Transport seam to the vendor device driver
//!
//! The library never talks to the panel hardware itself. Everything
//! that touches the wire - opening the device, shipping framebuffers,
//! reading the button status word - is delegated to an implementation
//! of [`DeviceTransport`] wrapping the vendor driver.

use lychnos_display::BUFFER_SIZE;

/// Errors surfaced by a transport implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Device is not open or has disconnected
    NotConnected,
    /// The driver refused the operation
    Rejected,
    /// Underlying I/O failure
    Io,
}

/// Trait for vendor device driver access
///
/// Implementations wrap the native driver for one attached panel; the
/// vendor's device index, handles and wire protocol stay behind this
/// trait. All calls are synchronous pass-throughs that complete in one
/// driver round trip.
pub trait DeviceTransport {
    /// Open the device
    fn open(&mut self) -> Result<(), TransportError>;

    /// Close the device
    fn close(&mut self) -> Result<(), TransportError>;

    /// Hand a finished framebuffer to the driver
    ///
    /// The buffer is in the panel's band-packed layout and is borrowed
    /// only for the duration of the call.
    fn send_framebuffer(&mut self, fb: &[u8; BUFFER_SIZE]) -> Result<(), TransportError>;

    /// Read the current button status word
    ///
    /// Bits 0-2 report the three front buttons (1 = pressed); the
    /// remaining bits are reserved and must be ignored.
    fn button_status(&mut self) -> Result<u8, TransportError>;
}

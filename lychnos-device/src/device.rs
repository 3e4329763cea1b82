//! Device session
//!
//! [`Device`] owns the transport and the persistent drawing buffer,
//! mirroring the two ways the panel is used: draw pixels locally and
//! flush, or decode a whole bitmap and show it in one step. A failed
//! decode never disturbs the image already on screen.

use lychnos_display::{Bitmap, DecodeError, Framebuffer};

use crate::buttons::{Button, ButtonPoller};
use crate::transport::{DeviceTransport, TransportError};

/// Errors from session operations spanning both layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// The bitmap stream could not be decoded
    Decode(DecodeError),
    /// The transport rejected or failed the operation
    Transport(TransportError),
}

impl From<DecodeError> for DeviceError {
    fn from(err: DecodeError) -> Self {
        DeviceError::Decode(err)
    }
}

impl From<TransportError> for DeviceError {
    fn from(err: TransportError) -> Self {
        DeviceError::Transport(err)
    }
}

/// Session wrapper for one attached panel
pub struct Device<T> {
    transport: T,
    buffer: Framebuffer,
    poller: ButtonPoller,
}

impl<T: DeviceTransport> Device<T> {
    /// Create a session over a transport
    ///
    /// The drawing buffer starts with every pixel off; nothing is sent
    /// until the first flush.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            buffer: Framebuffer::new(),
            poller: ButtonPoller::new(),
        }
    }

    /// Open the device (lifecycle pass-through)
    pub fn open(&mut self) -> Result<(), TransportError> {
        self.transport.open()
    }

    /// Close the device (lifecycle pass-through)
    pub fn close(&mut self) -> Result<(), TransportError> {
        self.transport.close()
    }

    /// Set or clear one pixel of the persistent drawing buffer
    ///
    /// Changes become visible on the next [`Device::flush`].
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        self.buffer.set_pixel(x, y, on);
    }

    /// Reset the drawing buffer to every pixel off
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Send the persistent drawing buffer to the panel
    pub fn flush(&mut self) -> Result<(), TransportError> {
        self.transport.send_framebuffer(self.buffer.as_bytes())
    }

    /// Decode a bitmap stream and show it
    ///
    /// The stream is decoded and packed into a fresh buffer first; the
    /// persistent buffer is replaced only after the decode fully
    /// succeeds, so a bad stream leaves the current image intact.
    pub fn show_bitmap(&mut self, bytes: &[u8]) -> Result<(), DeviceError> {
        let bitmap = Bitmap::decode(bytes)?;
        self.buffer = Framebuffer::from_bitmap(&bitmap);
        self.flush()?;
        Ok(())
    }

    /// Run one button poll tick
    ///
    /// Reads the status word and reports at most one press per button
    /// to the caller-supplied listener, with repeat suppression. Call
    /// at roughly [`crate::buttons::POLL_INTERVAL_MS`].
    pub fn poll_buttons(
        &mut self,
        listener: &mut impl FnMut(Button),
    ) -> Result<(), TransportError> {
        let status = self.transport.button_status()?;
        for button in self.poller.update(status) {
            listener(button);
        }
        Ok(())
    }

    /// The persistent drawing buffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.buffer
    }

    /// Consume the session, returning the transport
    pub fn release(self) -> T {
        self.transport
    }
}

//! Device session layer for the Lychnos OLED panel
//!
//! This crate contains everything that faces the attached device
//! without touching the wire itself:
//!
//! - [`DeviceTransport`] trait wrapping the vendor driver
//! - Button status decoding with repeat suppression
//! - [`Device`], the session owning the persistent drawing buffer
//!
//! # Architecture
//!
//! ```text
//! Application
//!         ↓ draw / show_bitmap / poll_buttons
//! Device session (this crate)
//!         ↓ lychnos-display (decode + pack)
//!         ↓ DeviceTransport trait
//! Vendor driver (external)
//! ```
//!
//! The vendor driver owns connection lifecycle and event delivery
//! mechanics; this crate only prepares bytes and interprets the polled
//! button status word.

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod device;
pub mod transport;

// Re-export key types
pub use buttons::{Button, ButtonPoller, HOLDOFF_POLLS, POLL_INTERVAL_MS};
pub use device::{Device, DeviceError};
pub use transport::{DeviceTransport, TransportError};

//! Image pipeline for the Lychnos OLED panel
//!
//! This crate converts an uncompressed 1-bit Windows bitmap into the
//! panel's native framebuffer layout. It is the pure core of the
//! library: no I/O, no device handling, just byte-level transforms.
//!
//! # Pipeline
//!
//! ```text
//! ┌────────────┬──────────────────┬──────────────┬─────────────────┐
//! │ BMP bytes  │ Bitmap::decode   │ Bitmap (1024 │ Framebuffer::   │
//! │ (stream)   │ ───────────────► │ file-order   │ from_bitmap ──► │
//! │            │                  │ bytes)       │ panel layout    │
//! └────────────┴──────────────────┴──────────────┴─────────────────┘
//! ```
//!
//! The bitmap is stored bottom-up with MSB-first pixel packing; the
//! framebuffer is band-packed (one byte per column of 8 rows). The
//! orientation flip and the bit-address transform both happen during
//! packing, driven by `Bitmap::pixel`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bitmap;
pub mod framebuffer;

pub use bitmap::{Bitmap, BitmapHeader, DecodeError};
pub use framebuffer::{Framebuffer, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};

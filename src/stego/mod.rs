// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! LSB steganography over raster RGB images.
//!
//! Data flow on encode:
//!
//! ```text
//! text -> bits -> frame (markers) -> plan (whole repetitions) -> slot writes
//! ```
//!
//! and on decode:
//!
//! ```text
//! slot reads -> bits -> locate frame -> text
//! ```
//!
//! Every variant (channel subset, marker scheme, overflow handling) is a
//! [`CodecConfig`] value rather than a separate code path.

pub mod error;
pub mod message;
pub mod bits;
pub mod channel;
pub mod raster;
pub mod capacity;
pub mod marker;
pub mod config;
mod pipeline;

pub use error::{Result, StegoError};
pub use message::Message;
pub use channel::{clamp_channel, Channel, ChannelSet};
pub use raster::{PixelImage, RgbBuffer, Slot, SlotCursor};
pub use capacity::{capacity_slots, plan, EncodingPlan, OverflowPolicy, RepeatPolicy};
pub use marker::MarkerPolicy;
pub use config::CodecConfig;
pub use pipeline::{decode, encode, encode_planned, read_all_bits, EncodeReport};

/// Number of LSB slots `image` offers under `config`.
pub fn image_capacity<I: PixelImage + ?Sized>(image: &I, config: &CodecConfig) -> usize {
    capacity_slots(image.width(), image.height(), &config.channels)
}

/// Largest message (in bytes) that still fits once into `image` under
/// `config`, or 0 if not even an empty frame fits.
pub fn max_message_len<I: PixelImage + ?Sized>(image: &I, config: &CodecConfig) -> usize {
    let overhead = config.markers.frame(&[]).len();
    image_capacity(image, config).saturating_sub(overhead) / 8
}

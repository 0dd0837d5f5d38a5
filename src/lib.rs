// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! # lsb-core
//!
//! Pure-Rust LSB steganography for hiding text messages in decoded RGB
//! pixel data. The message is framed with start/end markers, repeated as
//! many whole times as the image allows, and written into the least
//! significant bit of each selected colour channel in raster order.
//! Decoding reads every LSB back, finds the frame and returns the text.
//!
//! This is not encryption: anyone who knows the scheme can read the
//! message. Image file I/O is left to the caller through the
//! [`PixelImage`] trait; enable the `image` feature for implementations on
//! `image::RgbImage` and `image::RgbaImage`.
//!
//! # Quick start
//!
//! ```rust
//! use lsb_core::{decode, encode, CodecConfig, RgbBuffer};
//!
//! let mut img = RgbBuffer::filled(64, 64, [120, 80, 200]);
//! let config = CodecConfig::default();
//! encode(&mut img, "secret message", &config).unwrap();
//! assert_eq!(decode(&img, &config).unwrap(), "secret message");
//! ```

pub mod stego;
#[cfg(feature = "image")]
mod adapter;

pub use stego::{decode, encode, encode_planned, read_all_bits, EncodeReport};
pub use stego::{image_capacity, max_message_len};
pub use stego::{CodecConfig, MarkerPolicy, OverflowPolicy, RepeatPolicy};
pub use stego::{Channel, ChannelSet, PixelImage, RgbBuffer, Slot, SlotCursor};
pub use stego::{Message, Result, StegoError};
pub use stego::bits::{bits_to_text, text_to_bits};

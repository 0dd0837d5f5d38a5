// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! LSB encode/decode pipeline.
//!
//! Encode:
//! 1. Frame the message according to the marker policy.
//! 2. Plan whole repetitions against the image capacity (fails before any
//!    pixel is touched).
//! 3. Write the replicated bits into successive slots in raster order.
//!
//! Decode:
//! 1. Read the LSB of every slot into a fresh bit buffer.
//! 2. Locate the framed message and decode its text.

use crate::stego::capacity::{self, capacity_slots};
use crate::stego::channel::ChannelSet;
use crate::stego::config::CodecConfig;
use crate::stego::error::Result;
use crate::stego::message::Message;
use crate::stego::raster::{read_lsb, write_lsb, PixelImage, SlotCursor};

/// Summary of a completed encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeReport {
    /// Whole copies of the framed message written.
    pub repetitions: usize,
    /// Slots whose LSB was (re)written.
    pub bits_written: usize,
    /// Slots after the last copy, left exactly as they were.
    pub unused_slots: usize,
}

/// Hide `message` in `image`.
///
/// The message is framed, repeated as often as the configuration allows and
/// written into the LSBs of the configured channels. Only the LSB of the
/// first `bits_written` slots can change.
///
/// # Errors
/// [`StegoError::CapacityExceeded`](crate::StegoError::CapacityExceeded) if
/// the framed message does not fit once and the overflow policy is
/// `Reject`. The image is unmodified in that case.
pub fn encode<I>(
    image: &mut I,
    message: impl AsRef<[u8]>,
    config: &CodecConfig,
) -> Result<EncodeReport>
where
    I: PixelImage + ?Sized,
{
    let framed = config.markers.frame(message.as_ref());
    let capacity = capacity_slots(image.width(), image.height(), &config.channels);
    let plan = capacity::plan(framed.len(), capacity, config.repeat, config.overflow)?;

    log::debug!(
        "encode: {}x{} image, {} slots, frame {} bits x {} copies, {} unused",
        image.width(),
        image.height(),
        capacity,
        plan.framed_bits,
        plan.repetitions,
        plan.unused_slots()
    );

    let bits = plan.replicate(&framed);
    let bits_written = encode_planned(image, &bits, &config.channels);

    Ok(EncodeReport {
        repetitions: plan.repetitions,
        bits_written,
        unused_slots: plan.unused_slots(),
    })
}

/// Write `bits` into successive slots of `image` in raster order and leave
/// every remaining slot unmodified. Returns the number of bits written,
/// which is less than `bits.len()` only if the image runs out of slots.
pub fn encode_planned<I>(image: &mut I, bits: &[u8], channels: &ChannelSet) -> usize
where
    I: PixelImage + ?Sized,
{
    let slots = SlotCursor::over(&*image, channels);
    let mut written = 0;
    for (slot, &bit) in slots.zip(bits) {
        write_lsb(image, slot, bit);
        written += 1;
    }
    written
}

/// Recover the hidden message from `image`.
///
/// Always scans every slot; the message position is not known in advance.
///
/// # Errors
/// [`StegoError::MarkerNotFound`](crate::StegoError::MarkerNotFound) if no
/// complete frame is present.
pub fn decode<I>(image: &I, config: &CodecConfig) -> Result<Message>
where
    I: PixelImage + ?Sized,
{
    let bits = read_all_bits(image, &config.channels);
    let result = config.markers.locate(&bits);
    match &result {
        Ok(m) => log::debug!("decode: scanned {} slots, recovered {} bytes", bits.len(), m.len()),
        Err(e) => log::debug!("decode: scanned {} slots, {e}", bits.len()),
    }
    result
}

/// LSB of every slot in raster order.
pub fn read_all_bits<I>(image: &I, channels: &ChannelSet) -> Vec<u8>
where
    I: PixelImage + ?Sized,
{
    SlotCursor::over(image, channels).map(|slot| read_lsb(image, slot)).collect()
}

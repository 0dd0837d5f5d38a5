// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Capacity planning.
//!
//! Decides how many whole copies of the framed message fit into the image's
//! LSB slots. The plan never includes a partial copy: slots after the last
//! full repetition are left untouched by the encoder.

use crate::stego::channel::ChannelSet;
use crate::stego::error::{Result, StegoError};

/// How many copies of the framed message to embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatPolicy {
    /// As many whole copies as fit.
    #[default]
    Fill,
    /// Exactly one copy.
    Once,
}

/// What to do when not even one framed copy fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Fail with [`StegoError::CapacityExceeded`] before touching the image.
    #[default]
    Reject,
    /// Embed nothing and report success with zero copies.
    Skip,
}

/// Number of LSB slots in a `width` x `height` image under `channels`.
/// Saturates instead of overflowing on absurd dimensions.
pub fn capacity_slots(width: u32, height: u32, channels: &ChannelSet) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(channels.len())
}

/// Result of capacity planning for one encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingPlan {
    /// Length of one framed copy in bits.
    pub framed_bits: usize,
    /// Whole copies to embed.
    pub repetitions: usize,
    /// Total slots available.
    pub capacity: usize,
}

impl EncodingPlan {
    /// Bits the encoder will write.
    pub fn payload_bits(&self) -> usize {
        self.framed_bits * self.repetitions
    }

    /// Slots left unmodified after the last copy.
    pub fn unused_slots(&self) -> usize {
        self.capacity - self.payload_bits()
    }

    /// Concatenate `framed` `repetitions` times.
    pub fn replicate(&self, framed: &[u8]) -> Vec<u8> {
        debug_assert_eq!(framed.len(), self.framed_bits, "framed length mismatch");
        framed.repeat(self.repetitions)
    }
}

/// Plan how many copies of a `framed_bits`-long frame fit in `capacity` slots.
///
/// An empty frame yields an empty plan.
///
/// # Errors
/// [`StegoError::CapacityExceeded`] if zero copies fit and `overflow` is
/// [`OverflowPolicy::Reject`].
pub fn plan(
    framed_bits: usize,
    capacity: usize,
    repeat: RepeatPolicy,
    overflow: OverflowPolicy,
) -> Result<EncodingPlan> {
    if framed_bits == 0 {
        return Ok(EncodingPlan { framed_bits, repetitions: 0, capacity });
    }

    let fit = capacity / framed_bits;
    if fit == 0 {
        match overflow {
            OverflowPolicy::Reject => {
                return Err(StegoError::CapacityExceeded {
                    needed: framed_bits,
                    available: capacity,
                });
            }
            OverflowPolicy::Skip => {
                log::warn!("frame of {framed_bits} bits exceeds {capacity} slots, writing nothing");
            }
        }
    }

    let repetitions = match repeat {
        RepeatPolicy::Fill => fit,
        RepeatPolicy::Once => fit.min(1),
    };

    Ok(EncodingPlan { framed_bits, repetitions, capacity })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_copies_only() {
        let p = plan(10, 35, RepeatPolicy::Fill, OverflowPolicy::Reject).unwrap();
        assert_eq!(p.repetitions, 3);
        assert_eq!(p.payload_bits(), 30);
        assert_eq!(p.unused_slots(), 5);
    }

    #[test]
    fn exact_fit_has_no_remainder() {
        let p = plan(12, 12, RepeatPolicy::Fill, OverflowPolicy::Reject).unwrap();
        assert_eq!(p.repetitions, 1);
        assert_eq!(p.unused_slots(), 0);
    }

    #[test]
    fn once_caps_repetitions() {
        let p = plan(8, 100, RepeatPolicy::Once, OverflowPolicy::Reject).unwrap();
        assert_eq!(p.repetitions, 1);
        assert_eq!(p.unused_slots(), 92);
    }

    #[test]
    fn too_long_rejected() {
        let r = plan(13, 12, RepeatPolicy::Fill, OverflowPolicy::Reject);
        assert_eq!(r, Err(StegoError::CapacityExceeded { needed: 13, available: 12 }));
    }

    #[test]
    fn too_long_skipped() {
        let p = plan(13, 12, RepeatPolicy::Fill, OverflowPolicy::Skip).unwrap();
        assert_eq!(p.repetitions, 0);
        assert_eq!(p.payload_bits(), 0);
        assert_eq!(p.unused_slots(), 12);
    }

    #[test]
    fn empty_frame_is_empty_plan() {
        let p = plan(0, 12, RepeatPolicy::Fill, OverflowPolicy::Reject).unwrap();
        assert_eq!(p.repetitions, 0);
        assert!(p.replicate(&[]).is_empty());
    }

    #[test]
    fn replicate_concatenates_in_order() {
        let p = plan(3, 7, RepeatPolicy::Fill, OverflowPolicy::Reject).unwrap();
        assert_eq!(p.replicate(&[1, 0, 1]), vec![1, 0, 1, 1, 0, 1]);
    }

    #[test]
    fn capacity_counts_channels() {
        assert_eq!(capacity_slots(2, 2, &ChannelSet::rgb()), 12);
        assert_eq!(capacity_slots(2, 2, &ChannelSet::blue_only()), 4);
        assert_eq!(capacity_slots(0, 100, &ChannelSet::rgb()), 0);
    }
}

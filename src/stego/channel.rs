// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Colour channels and ordered channel selections.

use core::fmt;

use crate::stego::error::{Result, StegoError};

/// One colour component of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Index of this channel in an interleaved RGB(A) pixel.
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
        };
        f.write_str(c)
    }
}

/// Clamp an arbitrary channel value into `0..=255`.
///
/// Image providers may hand out out-of-range values; the slot stream clamps
/// them before reading or rewriting the LSB instead of failing.
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Non-empty ordered selection of channels visited for every pixel.
///
/// The order is significant: it is the order in which slots of one pixel
/// appear in the raster stream. Duplicates are dropped, first occurrence
/// wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelSet {
    channels: Vec<Channel>,
}

impl ChannelSet {
    /// Build a channel set from an ordered list.
    ///
    /// # Errors
    /// [`StegoError::EmptyChannelSet`] if `channels` is empty.
    pub fn new(channels: &[Channel]) -> Result<Self> {
        let mut unique = Vec::with_capacity(channels.len());
        for &c in channels {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        if unique.is_empty() {
            return Err(StegoError::EmptyChannelSet);
        }
        Ok(Self { channels: unique })
    }

    /// `{R, G, B}` in that order.
    pub fn rgb() -> Self {
        Self { channels: vec![Channel::Red, Channel::Green, Channel::Blue] }
    }

    /// `{B}` alone.
    pub fn blue_only() -> Self {
        Self { channels: vec![Channel::Blue] }
    }

    pub fn as_slice(&self) -> &[Channel] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Always `false` for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::rgb()
    }
}

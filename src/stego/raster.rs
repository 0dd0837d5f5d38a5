// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Raster-order view over an image's channel slots.
//!
//! The codec never touches pixel storage directly. It walks [`Slot`]s
//! produced by a [`SlotCursor`] (rows top to bottom, pixels left to right,
//! channels in [`ChannelSet`] order) and reads or rewrites only the LSB of
//! each slot through the [`PixelImage`] trait.

use crate::stego::capacity::capacity_slots;
use crate::stego::channel::{clamp_channel, Channel, ChannelSet};

/// Decoded RGB image as seen by the codec.
///
/// Implementors own file formats and storage; the codec only needs these
/// four operations. Coordinates passed in are always within
/// `0..width()` x `0..height()`.
pub trait PixelImage {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Current value of one channel. Values outside `0..=255` are allowed
    /// and clamped by the stream.
    fn get_channel(&self, x: u32, y: u32, channel: Channel) -> i32;

    fn set_channel(&mut self, x: u32, y: u32, channel: Channel, value: u8);
}

/// One LSB carrier: a channel of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub x: u32,
    pub y: u32,
    pub channel: Channel,
}

/// Lazy, forward-only iterator over every slot of a `width` x `height`
/// image in raster order.
///
/// A cursor is consumed once; build a new one to restart.
#[derive(Debug, Clone)]
pub struct SlotCursor<'a> {
    channels: &'a [Channel],
    width: u32,
    x: u32,
    y: u32,
    c: usize,
    remaining: usize,
}

impl<'a> SlotCursor<'a> {
    pub fn new(width: u32, height: u32, channels: &'a ChannelSet) -> Self {
        Self {
            channels: channels.as_slice(),
            width,
            x: 0,
            y: 0,
            c: 0,
            remaining: capacity_slots(width, height, channels),
        }
    }

    /// Cursor over all slots of `image`.
    pub fn over<I: PixelImage + ?Sized>(image: &I, channels: &'a ChannelSet) -> Self {
        Self::new(image.width(), image.height(), channels)
    }
}

impl Iterator for SlotCursor<'_> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        if self.remaining == 0 {
            return None;
        }
        let slot = Slot { x: self.x, y: self.y, channel: self.channels[self.c] };

        self.remaining -= 1;
        self.c += 1;
        if self.c == self.channels.len() {
            self.c = 0;
            self.x += 1;
            if self.x == self.width {
                self.x = 0;
                self.y += 1;
            }
        }
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SlotCursor<'_> {}

/// Read the LSB of a slot.
pub fn read_lsb<I: PixelImage + ?Sized>(image: &I, slot: Slot) -> u8 {
    clamp_channel(image.get_channel(slot.x, slot.y, slot.channel)) & 1
}

/// Replace the LSB of a slot with `bit`, keeping the upper 7 bits.
pub fn write_lsb<I: PixelImage + ?Sized>(image: &mut I, slot: Slot, bit: u8) {
    let old = clamp_channel(image.get_channel(slot.x, slot.y, slot.channel));
    image.set_channel(slot.x, slot.y, slot.channel, (old & 0xFE) | (bit & 1));
}

/// In-memory interleaved RGB image, 3 bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbBuffer {
    /// Black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0, 0, 0])
    }

    /// Image with every pixel set to `rgb`.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 3);
        for _ in 0..pixels {
            data.extend_from_slice(&rgb);
        }
        Self { width, height, data }
    }

    /// Image whose pixels are produced by `f(x, y)`.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { width, height, data }
    }

    /// Wrap an existing RGB buffer. Returns `None` if `data` is not exactly
    /// `width * height * 3` bytes long.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?.checked_mul(3)?;
        (data.len() == expected).then_some(Self { width, height, data })
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }
}

impl PixelImage for RgbBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_channel(&self, x: u32, y: u32, channel: Channel) -> i32 {
        self.data[self.offset(x, y) + channel.index()] as i32
    }

    fn set_channel(&mut self, x: u32, y: u32, channel: Channel, value: u8) {
        let i = self.offset(x, y) + channel.index();
        self.data[i] = value;
    }
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Codec configuration.
//!
//! Every encoder variant (all channels or blue only, bit markers
//! or text delimiters, fail or silently skip on overflow) is one
//! [`CodecConfig`] value driving the same encode/decode path. Encoder and
//! decoder must use the same channel set and marker policy.

use crate::stego::capacity::{OverflowPolicy, RepeatPolicy};
use crate::stego::channel::ChannelSet;
use crate::stego::marker::MarkerPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodecConfig {
    pub channels: ChannelSet,
    pub markers: MarkerPolicy,
    pub repeat: RepeatPolicy,
    pub overflow: OverflowPolicy,
}

impl CodecConfig {
    /// RGB slots, `*****` / `|||||` bit markers, fill capacity, reject
    /// oversized messages. Same as `Default`.
    pub fn fixed_pattern() -> Self {
        Self::default()
    }

    /// RGB slots framed with the `*|*|*|*|*` text delimiter.
    pub fn text_delimiter() -> Self {
        Self { markers: MarkerPolicy::text_delimiter(), ..Self::default() }
    }

    /// Fixed-pattern markers on the blue channel only.
    pub fn blue_only() -> Self {
        Self { channels: ChannelSet::blue_only(), ..Self::default() }
    }

    /// A single unframed copy. Decoding returns every whole byte before the
    /// trailing run of 0x00 or 0xFF fill.
    pub fn unframed() -> Self {
        Self { markers: MarkerPolicy::Unframed, repeat: RepeatPolicy::Once, ..Self::default() }
    }

    /// Fixed-pattern markers that embed nothing, instead of failing, when the
    /// message does not fit.
    pub fn legacy() -> Self {
        Self { overflow: OverflowPolicy::Skip, ..Self::default() }
    }

    pub fn with_channels(mut self, channels: ChannelSet) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_markers(mut self, markers: MarkerPolicy) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_repeat(mut self, repeat: RepeatPolicy) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

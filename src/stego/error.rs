// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the LSB codec.
//!
//! [`StegoError`] covers every failure mode of encode and decode. The bit
//! codec itself never fails, and out-of-range channel values are clamped
//! rather than reported.

use core::fmt;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The framed message does not fit even once into the image's slots.
    CapacityExceeded {
        /// Bits required for one framed copy.
        needed: usize,
        /// LSB slots the image offers under the configured channel set.
        available: usize,
    },
    /// No complete start/end frame (or delimiter pair) was found.
    MarkerNotFound,
    /// A channel set was built without any channels.
    EmptyChannelSet,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { needed, available } => write!(
                f,
                "message too large ({needed} bits needed, {available} slots available)"
            ),
            Self::MarkerNotFound => write!(f, "no hidden message found"),
            Self::EmptyChannelSet => write!(f, "channel set must contain at least one channel"),
        }
    }
}

impl std::error::Error for StegoError {}

pub type Result<T> = std::result::Result<T, StegoError>;

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Bit codec: text to a flat bit sequence and back.
//!
//! Bits are stored one per `u8` (0 or 1), MSB first within each byte. Text
//! is always UTF-8; decoding is permissive and never fails (see
//! [`Message`]).

use crate::stego::message::Message;

/// Convert bytes to a bit vector (MSB first within each byte).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
/// Pads the last byte with zero bits if `bits.len()` is not a multiple of 8.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}

/// Expand text (or raw bytes) into its bit sequence, 8 bits per byte.
pub fn text_to_bits(text: impl AsRef<[u8]>) -> Vec<u8> {
    bytes_to_bits(text.as_ref())
}

/// Decode a bit sequence of any length back into a message.
///
/// The bits are read as one unsigned big-endian integer: a length that is
/// not a multiple of 8 is zero-padded on the left, and the result is the
/// minimal byte sequence for that value (leading zero bytes dropped). An
/// empty or all-zero input yields the empty message.
pub fn bits_to_text(bits: &[u8]) -> Message {
    let pad = (8 - bits.len() % 8) % 8;
    let mut bytes = Vec::with_capacity((bits.len() + pad) / 8);
    let mut byte = 0u8;
    let mut filled = pad;
    for &bit in bits {
        byte = (byte << 1) | (bit & 1);
        filled += 1;
        if filled == 8 {
            bytes.push(byte);
            byte = 0;
            filled = 0;
        }
    }

    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes.drain(..first);
    Message::from_bytes(bytes)
}

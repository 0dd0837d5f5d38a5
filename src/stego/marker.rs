// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Message framing and frame location.
//!
//! A framed message is the unit that gets repeated across the image. Three
//! policies are supported:
//!
//! - **Fixed pattern**: bit-literal start and end markers around the message
//!   bits. Located by the *last* start marker in the stream, then the first
//!   end marker after it. Byte-sized markers only match on byte boundaries.
//! - **Text delimiter**: a delimiter string placed on both sides of the text
//!   before bit encoding. Located by decoding the whole stream and picking
//!   the largest delimited segment.
//! - **Unframed**: the bare message, read back as whole bytes up to the
//!   trailing fill.
//!
//! ```text
//! fixed pattern:  [start bits][message bits][end bits]  x repetitions
//! text delimiter: bits("*|*|*|*|*" + message + "*|*|*|*|*")  x repetitions
//! ```

use crate::stego::bits::{bits_to_bytes, bits_to_text, bytes_to_bits, text_to_bits};
use crate::stego::error::{Result, StegoError};
use crate::stego::message::Message;

/// Bytes whose bit expansion forms the default start marker (`00101010` x5).
pub const DEFAULT_START_MARKER: &[u8] = b"*****";

/// Bytes whose bit expansion forms the default end marker (`01111100` x5).
pub const DEFAULT_END_MARKER: &[u8] = b"|||||";

/// Default delimiter for the text-delimiter policy.
pub const DEFAULT_DELIMITER: &str = "*|*|*|*|*";

/// How a message is framed before embedding and located after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerPolicy {
    /// Bit-literal markers (one bit per element, 0 or 1).
    FixedPattern { start: Vec<u8>, end: Vec<u8> },
    /// Delimiter text surrounding the plaintext.
    TextDelimiter { delimiter: String },
    /// No framing at all.
    Unframed,
}

impl MarkerPolicy {
    /// Fixed-pattern policy with the `*****` / `|||||` bit patterns.
    pub fn fixed_pattern() -> Self {
        Self::FixedPattern {
            start: bytes_to_bits(DEFAULT_START_MARKER),
            end: bytes_to_bits(DEFAULT_END_MARKER),
        }
    }

    /// Text-delimiter policy with `*|*|*|*|*`.
    pub fn text_delimiter() -> Self {
        Self::TextDelimiter { delimiter: DEFAULT_DELIMITER.to_string() }
    }

    /// Wrap `message` into its framed bit sequence.
    pub fn frame(&self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::FixedPattern { start, end } => {
                let body = text_to_bits(message);
                let mut bits = Vec::with_capacity(start.len() + body.len() + end.len());
                bits.extend_from_slice(start);
                bits.extend(body);
                bits.extend_from_slice(end);
                bits
            }
            Self::TextDelimiter { delimiter } => {
                let d = delimiter.as_bytes();
                let mut text = Vec::with_capacity(2 * d.len() + message.len());
                text.extend_from_slice(d);
                text.extend_from_slice(message);
                text.extend_from_slice(d);
                text_to_bits(text)
            }
            Self::Unframed => text_to_bits(message),
        }
    }

    /// Recover exactly one message from the full extracted bitstream.
    ///
    /// # Errors
    /// [`StegoError::MarkerNotFound`] if no complete frame is present.
    pub fn locate(&self, bits: &[u8]) -> Result<Message> {
        match self {
            Self::FixedPattern { start, end } => locate_fixed(bits, start, end),
            Self::TextDelimiter { delimiter } => locate_delimited(bits, delimiter.as_bytes()),
            Self::Unframed => locate_unframed(bits),
        }
    }
}

impl Default for MarkerPolicy {
    fn default() -> Self {
        Self::fixed_pattern()
    }
}

/// Last start of `needle` in `haystack` among offsets that are multiples of
/// `step`.
fn rfind(haystack: &[u8], needle: &[u8], step: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..haystack.len() - needle.len() + 1)
        .step_by(step)
        .rev()
        .find(|&p| &haystack[p..p + needle.len()] == needle)
}

/// First start of `needle` in `haystack` among offsets that are multiples of
/// `step`.
fn find(haystack: &[u8], needle: &[u8], step: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..haystack.len() - needle.len() + 1)
        .step_by(step)
        .find(|&p| &haystack[p..p + needle.len()] == needle)
}

/// Search stride for a marker pair.
///
/// Every copy starts at bit 0 and carries whole message bytes, so with
/// byte-sized markers a genuine marker can only sit on a byte boundary.
/// Shifted copies of the pattern inside the message bits are skipped.
fn marker_stride(start: &[u8], end: &[u8]) -> usize {
    if start.len() % 8 == 0 && end.len() % 8 == 0 {
        8
    } else {
        1
    }
}

// The last copy is the one guaranteed to be followed by its own end marker;
// leftovers after it were never written by the encoder.
fn locate_fixed(bits: &[u8], start: &[u8], end: &[u8]) -> Result<Message> {
    let step = marker_stride(start, end);
    let s = rfind(bits, start, step).ok_or(StegoError::MarkerNotFound)?;
    let body_start = s + start.len();
    let body_len = find(&bits[body_start..], end, step).ok_or(StegoError::MarkerNotFound)?;
    log::trace!("start marker at bit {s}, message body {body_len} bits");
    Ok(bits_to_text(&bits[body_start..body_start + body_len]))
}

fn locate_delimited(bits: &[u8], delimiter: &[u8]) -> Result<Message> {
    if delimiter.is_empty() {
        return Err(StegoError::MarkerNotFound);
    }

    let whole = &bits[..bits.len() - bits.len() % 8];
    let mut bytes = bits_to_bytes(whole);
    bytes.retain(|&b| b != 0);

    let mut cuts = Vec::new();
    let mut i = 0;
    while let Some(off) = find(&bytes[i..], delimiter, 1) {
        cuts.push(i + off);
        i += off + delimiter.len();
    }
    log::trace!("{} delimiters found", cuts.len());

    // Only segments with a delimiter on both sides are candidates.
    let mut best: Option<&[u8]> = None;
    for pair in cuts.windows(2) {
        let seg = &bytes[pair[0] + delimiter.len()..pair[1]];
        if !seg.is_empty() && best.map_or(true, |b| seg.len() > b.len()) {
            best = Some(seg);
        }
    }

    best.map(Message::from).ok_or(StegoError::MarkerNotFound)
}

// Trailing fill (all-zero or all-one bytes left by untouched slots of a flat
// cover) is not part of the message. A stream that is nothing but fill holds
// no message.
fn locate_unframed(bits: &[u8]) -> Result<Message> {
    let whole = &bits[..bits.len() - bits.len() % 8];
    let mut bytes = bits_to_text(whole).into_bytes();
    if let Some(&fill @ (0x00 | 0xFF)) = bytes.last() {
        let keep = bytes.iter().rposition(|&b| b != fill).map_or(0, |p| p + 1);
        bytes.truncate(keep);
    }
    if bytes.is_empty() {
        return Err(StegoError::MarkerNotFound);
    }
    Ok(Message::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(policy: &MarkerPolicy, msg: &str, copies: usize, tail: &[u8]) -> Vec<u8> {
        let mut bits = policy.frame(msg.as_bytes()).repeat(copies);
        bits.extend_from_slice(tail);
        bits
    }

    #[test]
    fn default_marker_bit_patterns() {
        let MarkerPolicy::FixedPattern { start, end } = MarkerPolicy::fixed_pattern() else {
            panic!("expected fixed pattern");
        };
        assert_eq!(start, [0u8, 0, 1, 0, 1, 0, 1, 0].repeat(5));
        assert_eq!(end, [0u8, 1, 1, 1, 1, 1, 0, 0].repeat(5));
    }

    #[test]
    fn fixed_single_copy() {
        let p = MarkerPolicy::fixed_pattern();
        let bits = stream(&p, "hello", 1, &[]);
        assert_eq!(bits.len(), 80 + 40);
        assert_eq!(p.locate(&bits).unwrap(), "hello");
    }

    #[test]
    fn fixed_repeated_with_noisy_tail() {
        let p = MarkerPolicy::fixed_pattern();
        let tail = [1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 1];
        let bits = stream(&p, "repeat me", 4, &tail);
        assert_eq!(p.locate(&bits).unwrap(), "repeat me");
    }

    #[test]
    fn fixed_uses_last_start() {
        let p = MarkerPolicy::fixed_pattern();
        let mut bits = p.frame(b"old");
        bits.extend(p.frame(b"new"));
        assert_eq!(p.locate(&bits).unwrap(), "new");
    }

    #[test]
    fn fixed_start_without_end_fails() {
        let p = MarkerPolicy::fixed_pattern();
        let mut bits = stream(&p, "msg", 2, &[]);
        // A stray start marker after the last full copy.
        bits.extend(bytes_to_bits(DEFAULT_START_MARKER));
        assert_eq!(p.locate(&bits), Err(StegoError::MarkerNotFound));
    }

    #[test]
    fn fixed_no_start_fails() {
        let p = MarkerPolicy::fixed_pattern();
        assert_eq!(p.locate(&[0; 400]), Err(StegoError::MarkerNotFound));
        assert_eq!(p.locate(&[]), Err(StegoError::MarkerNotFound));
    }

    #[test]
    fn fixed_custom_patterns() {
        let p = MarkerPolicy::FixedPattern { start: vec![1, 1, 1, 1], end: vec![0, 0, 0, 0] };
        let bits = p.frame(b"U"); // 01010101
        assert_eq!(bits, vec![1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0]);
        assert_eq!(p.locate(&bits).unwrap(), "U");
    }

    #[test]
    fn delimited_repeated() {
        let p = MarkerPolicy::text_delimiter();
        let bits = stream(&p, "hidden text", 3, &[1, 0, 1]);
        assert_eq!(p.locate(&bits).unwrap(), "hidden text");
    }

    #[test]
    fn delimited_ignores_nul_bytes_and_open_tail() {
        let p = MarkerPolicy::text_delimiter();
        let mut bits = stream(&p, "abc", 2, &[]);
        bits.extend(bytes_to_bits(&[0, 0, 0]));
        // Longer than the message but never closed by a delimiter.
        bits.extend(text_to_bits("*|*|*|*|*garbage-tail-without-end"));
        assert_eq!(p.locate(&bits).unwrap(), "abc");
    }

    #[test]
    fn delimited_picks_largest_segment() {
        let p = MarkerPolicy::text_delimiter();
        let mut bits = p.frame(b"xy");
        bits.extend(p.frame(b"full message"));
        assert_eq!(p.locate(&bits).unwrap(), "full message");
    }

    #[test]
    fn delimited_missing_fails() {
        let p = MarkerPolicy::text_delimiter();
        assert_eq!(p.locate(&[0; 256]), Err(StegoError::MarkerNotFound));
        let half = text_to_bits("*|*|*|*|*open");
        assert_eq!(p.locate(&half), Err(StegoError::MarkerNotFound));
    }

    #[test]
    fn unframed_reads_whole_bytes() {
        let p = MarkerPolicy::Unframed;
        let bits = [0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0];
        assert_eq!(p.locate(&bits).unwrap(), "A");
        assert_eq!(p.locate(&[0; 24]), Err(StegoError::MarkerNotFound));
    }

    #[test]
    fn fixed_ignores_shifted_markers_in_body() {
        let p = MarkerPolicy::fixed_pattern();
        // "TTTTTT" holds the start pattern at bit 7, ">>>>>>" the end pattern
        // at bit 1.
        for msg in ["TTTTTT", ">>>>>>", "TT>>TTTT>>>>>>"] {
            let bits = stream(&p, msg, 3, &[0, 1, 1]);
            assert_eq!(p.locate(&bits).unwrap(), msg);
        }
    }

    #[test]
    fn odd_length_markers_search_every_bit() {
        let p = MarkerPolicy::FixedPattern { start: vec![1, 1, 1], end: vec![0, 0, 0] };
        let mut bits = vec![0, 1];
        bits.extend(p.frame(b"U"));
        assert_eq!(p.locate(&bits).unwrap(), "U");
    }

    #[test]
    fn unframed_trims_trailing_fill() {
        let p = MarkerPolicy::Unframed;
        let mut bits = text_to_bits("A");
        bits.extend([1; 20]);
        assert_eq!(p.locate(&bits).unwrap(), "A");
        assert_eq!(p.locate(&[1; 48]), Err(StegoError::MarkerNotFound));
    }
}

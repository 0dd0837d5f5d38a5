// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! [`PixelImage`] for buffers from the `image` crate.
//!
//! Only compiled with the `image` feature. Alpha channels are never read or
//! written. Loading and saving stay with the caller; save stego images in a
//! lossless format, since lossy recompression destroys the LSBs.

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::stego::{Channel, PixelImage};

impl PixelImage for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get_channel(&self, x: u32, y: u32, channel: Channel) -> i32 {
        let Rgb(px) = *self.get_pixel(x, y);
        px[channel.index()] as i32
    }

    fn set_channel(&mut self, x: u32, y: u32, channel: Channel, value: u8) {
        self.get_pixel_mut(x, y).0[channel.index()] = value;
    }
}

impl PixelImage for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get_channel(&self, x: u32, y: u32, channel: Channel) -> i32 {
        let Rgba(px) = *self.get_pixel(x, y);
        px[channel.index()] as i32
    }

    fn set_channel(&mut self, x: u32, y: u32, channel: Channel, value: u8) {
        self.get_pixel_mut(x, y).0[channel.index()] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::{decode, encode, CodecConfig};

    #[test]
    fn rgb_image_roundtrip() {
        let mut img = RgbImage::from_fn(40, 30, |x, y| {
            Rgb([((x * 17) % 256) as u8, ((y * 23) % 256) as u8, (((x + y) * 31) % 256) as u8])
        });
        let config = CodecConfig::default();
        encode(&mut img, "hidden in an RgbImage", &config).unwrap();
        assert_eq!(decode(&img, &config).unwrap(), "hidden in an RgbImage");
    }

    #[test]
    fn rgba_alpha_untouched() {
        let mut img = RgbaImage::from_pixel(20, 20, Rgba([10, 20, 30, 77]));
        let config = CodecConfig::text_delimiter();
        encode(&mut img, "alpha stays", &config).unwrap();
        assert!(img.pixels().all(|p| p.0[3] == 77));
        assert_eq!(decode(&img, &config).unwrap(), "alpha stays");
    }
}

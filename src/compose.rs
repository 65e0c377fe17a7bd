// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Sheet allocation and straight-copy blitting (component H).

use sprite_atlas_path::IntRect;

use crate::error::Error;
use crate::source_image::SourceImage;

/// The output RGBA sheet, cleared to transparent black on allocation.
#[derive(Debug)]
pub struct Sheet {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Sheet {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let byte_len = (width as u64)
            .checked_mul(height as u64)
            .and_then(|n| n.checked_mul(4))
            .ok_or(Error::OutOfMemory)?;
        let byte_len = usize::try_from(byte_len).map_err(|_| Error::OutOfMemory)?;

        Ok(Sheet { width, height, data: vec![0u8; byte_len] })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Copies the `src_rect` region of `source` into the sheet with its
    /// top-left corner at `(dst_x, dst_y)`. A straight per-row memcpy: no
    /// blending, no resampling.
    pub fn blit(&mut self, source: &SourceImage, src_rect: IntRect, dst_x: i32, dst_y: i32) {
        let w = src_rect.width();
        let h = src_rect.height();
        for row in 0..h {
            for col in 0..w {
                let pixel = source.pixel_at(src_rect.xmin() + col, src_rect.ymin() + row);
                let dx = dst_x + col;
                let dy = dst_y + row;
                if dx < 0 || dy < 0 || dx as u32 >= self.width || dy as u32 >= self.height {
                    continue;
                }
                let idx = (dy as usize * self.width as usize + dx as usize) * 4;
                self.data[idx..idx + 4].copy_from_slice(&pixel);
            }
        }
    }

    /// Converts into an `image` crate buffer ready for PNG encoding.
    pub fn into_rgba_image(self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
    }
}

// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Decoded RGBA input images.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// An in-memory RGBA8 image, row-major, tight stride.
#[derive(Clone, Debug)]
pub struct SourceImage {
    width: i32,
    height: i32,
    rgba: Vec<u8>,
}

impl SourceImage {
    /// Loads and decodes `path` into RGBA8.
    ///
    /// Fails with [`Error::FileNotFound`] if the path does not exist at all
    /// (checked separately from the decode, so a missing file and a
    /// corrupt one are reported distinctly), or [`Error::ImageDecodeFailed`]
    /// if the codec rejects the bytes.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let img = image::open(path).map_err(|source| Error::ImageDecodeFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(SourceImage { width: width as i32, height: height as i32, rgba: rgba.into_raw() })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// The alpha channel value at `(x, y)`, or `0` outside bounds.
    #[inline]
    pub fn alpha_at(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return 0;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4 + 3;
        self.rgba[idx]
    }

    /// Copies the RGBA bytes of `(x, y)` out, or transparent black outside
    /// bounds.
    #[inline]
    pub fn pixel_at(&self, x: i32, y: i32) -> [u8; 4] {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return [0, 0, 0, 0];
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [self.rgba[idx], self.rgba[idx + 1], self.rgba[idx + 2], self.rgba[idx + 3]]
    }
}

/// Derives the sheet PNG path from the descriptor output path: strips the
/// descriptor's extension (whatever it is, even a multi-dot one like
/// `.tar.json`, only the final component) and appends `.png`.
pub fn sheet_path_for(descriptor_path: &Path) -> PathBuf {
    descriptor_path.with_extension("png")
}

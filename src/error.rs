// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The pipeline's error taxonomy.
//!
//! Every variant carries enough context to print the single human-readable
//! line the CLI surface requires; nothing here is recoverable by the caller
//! beyond reporting it and exiting non-zero.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input image not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to decode image {}: {source}", .path.display())]
    ImageDecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("sprite has no opaque pixels: {}", .0.display())]
    EmptySprite(PathBuf),

    #[error("sprite's traced outline has zero width or height: {}", .0.display())]
    DegenerateSprite(PathBuf),

    #[error(
        "{count} sprite(s) did not fit in a {max_width}x{max_height} sheet"
    )]
    PackOverflow {
        count: usize,
        max_width: u32,
        max_height: u32,
    },

    #[error("out of memory")]
    OutOfMemory,

    #[error("failed to encode sheet image: {0}")]
    ImageEncodeFailed(#[source] image::ImageError),

    #[error("failed to write descriptor {}: {source}", .path.display())]
    DescriptorWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

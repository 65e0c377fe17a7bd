// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! A command-line sprite-atlas compiler.
//!
//! Given a set of input raster images, each a sprite on a transparent
//! background, packs their opaque regions onto a single sheet PNG and
//! writes a sidecar JSON descriptor locating each sprite on that sheet,
//! optionally with a simplified triangle mesh hugging its silhouette.
//!
//! The geometric core (alpha masking, outline tracing, simplification,
//! repair, triangulation) lives in the sibling `sprite-atlas-path` crate;
//! this crate owns imaging, sheet packing/composition, the descriptor
//! document, the pipeline driver and the CLI.

#![warn(missing_debug_implementations)]

pub mod cli;
pub mod compose;
pub mod descriptor;
pub mod error;
pub mod mask;
pub mod options;
pub mod pack;
pub mod pipeline;
pub mod source_image;
pub mod sprite;
pub mod trace;
pub mod uv;

pub use error::{Error, Result};
pub use options::PipelineOptions;

// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! CLI-independent pipeline configuration.

/// Tuning knobs for a single [`crate::pipeline::run`] invocation.
///
/// Built from the CLI's `Cli` struct via `TryFrom`, but has no dependency on
/// `clap` itself so the library can be driven without a command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    pub max_width: u32,
    pub max_height: u32,
    pub border: u32,
    pub padding: u32,
    pub pot: bool,
    pub mesh: bool,
    pub max_verts: usize,
    pub alpha_threshold: u8,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            max_width: 2048,
            max_height: 2048,
            border: 2,
            padding: 1,
            pot: false,
            mesh: false,
            max_verts: 25,
            alpha_threshold: 20,
        }
    }
}

// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Command-line surface, kept independent of the pipeline's own options type
//! so the library can be driven without `clap` in the loop.

use std::path::PathBuf;

use clap::Parser;

use crate::options::PipelineOptions;

#[derive(Parser, Debug)]
#[command(name = "atlasc", version, about = "Packs sprites onto a sheet and emits a JSON atlas descriptor.")]
pub struct Cli {
    /// Input image path. Repeat once per sprite.
    #[arg(short = 'i', long = "input", required = true)]
    pub input: Vec<PathBuf>,

    /// Output descriptor path. The sheet PNG is written alongside it.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    #[arg(short = 'W', long = "max-width", default_value_t = 2048)]
    pub max_width: u32,

    #[arg(short = 'H', long = "max-height", default_value_t = 2048)]
    pub max_height: u32,

    #[arg(short = 'B', long = "border", default_value_t = 2)]
    pub border: u32,

    #[arg(short = 'P', long = "padding", default_value_t = 1)]
    pub padding: u32,

    /// Round sheet dimensions up to the next power of two.
    #[arg(short = '2', long = "pot")]
    pub pot: bool,

    /// Emit per-sprite meshes and UVs.
    #[arg(short = 'm', long = "mesh")]
    pub mesh: bool,

    #[arg(short = 'M', long = "max-verts", default_value_t = 25)]
    pub max_verts: usize,

    #[arg(short = 'A', long = "alpha-threshold", default_value_t = 20)]
    pub alpha_threshold: u8,
}

impl TryFrom<&Cli> for PipelineOptions {
    type Error = std::convert::Infallible;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Ok(PipelineOptions {
            max_width: cli.max_width,
            max_height: cli.max_height,
            border: cli.border,
            padding: cli.padding,
            pot: cli.pot,
            mesh: cli.mesh,
            max_verts: cli.max_verts,
            alpha_threshold: cli.alpha_threshold,
        })
    }
}

// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Per-sprite geometry extraction: ties together the alpha mask, outline
//! tracer, bounding box, simplifier, repair pass and triangulator
//! (components A-F) for a single input image.

use std::path::Path;

use sprite_atlas_path::{IntPoint, IntRect, Mesh};

use crate::error::Error;
use crate::mask;
use crate::options::PipelineOptions;
use crate::source_image::SourceImage;
use crate::trace;

/// The geometric result of processing one input image, before packing.
#[derive(Debug)]
pub struct SpriteGeometry {
    pub name: String,
    pub source: SourceImage,
    pub sprite_rect: IntRect,
    pub mesh: Option<Mesh>,
}

/// Normalizes a path to forward slashes, matching `sx_os_path_unixpath` in
/// the original reference implementation.
pub fn normalize_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Runs components A-F over one decoded source image.
pub fn build_sprite_geometry(
    path: &Path,
    source: SourceImage,
    options: &PipelineOptions,
) -> Result<SpriteGeometry, Error> {
    let (width, height) = (source.width(), source.height());

    let (thresholded, dilated) = mask::build_masks(width, height, options.alpha_threshold, |x, y| source.alpha_at(x, y));

    let traced = trace::trace_largest_region(&dilated).ok_or_else(|| Error::EmptySprite(path.to_path_buf()))?;

    let sprite_rect = traced.bounding_box().ok_or_else(|| Error::EmptySprite(path.to_path_buf()))?;
    if sprite_rect.width() == 0 || sprite_rect.height() == 0 {
        return Err(Error::DegenerateSprite(path.to_path_buf()));
    }

    let mesh = if options.mesh {
        let simplified = sprite_atlas_path::simplify_to_budget(traced.points(), options.max_verts);
        let is_thresholded_opaque = |x: i32, y: i32| thresholded.is_opaque(x, y);
        let repaired = sprite_atlas_path::repair_outline(&simplified, width, height, is_thresholded_opaque);
        Some(sprite_atlas_path::triangulate(&repaired))
    } else {
        None
    };

    Ok(SpriteGeometry { name: normalize_name(path), source, sprite_rect, mesh })
}

/// Clamps mesh vertices into `sprite_rect`, the post-repair invariant §4.J
/// requires. Repair already keeps vertices near the silhouette; this only
/// guards against an outward offset that overshot the image bounds.
pub fn clamp_mesh_to_rect(mesh: &Mesh, rect: &IntRect) -> Vec<IntPoint> {
    mesh.points
        .iter()
        .map(|p| {
            IntPoint::from_xy(
                p.x.clamp(rect.xmin(), rect.xmax() - 1),
                p.y.clamp(rect.ymin(), rect.ymax() - 1),
            )
        })
        .collect()
}

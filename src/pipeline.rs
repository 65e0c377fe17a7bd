// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The pipeline driver (component J): orchestrates A-I, enforces the
//! cross-component invariants, and emits the descriptor document.

use std::path::{Path, PathBuf};

use tracing::{debug, debug_span};

use crate::compose::Sheet;
use crate::descriptor::{Descriptor, MeshEntry, SpriteEntry};
use crate::error::Error;
use crate::options::PipelineOptions;
use crate::pack::{self, Placement};
use crate::source_image::{self, SourceImage};
use crate::sprite::{self, SpriteGeometry};
use crate::uv;

/// Runs the full pipeline over `inputs` and returns the descriptor plus the
/// assembled sheet image, without touching the filesystem for output.
///
/// Halts on the first error; per §7, no partial outputs are produced by the
/// caller either, since nothing is written until this returns `Ok`.
pub fn run(inputs: &[PathBuf], options: &PipelineOptions) -> Result<(Descriptor, image::RgbaImage), Error> {
    // Upfront existence check over every input, so a typo in the Nth path
    // is reported before any earlier image is even decoded.
    for path in inputs {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
    }

    let mut geometries = Vec::with_capacity(inputs.len());
    for path in inputs {
        let span = debug_span!("sprite", path = %path.display());
        let _enter = span.enter();
        let source = SourceImage::load(path)?;
        let geometry = sprite::build_sprite_geometry(path, source, options)?;
        debug!(sprite_rect = ?geometry.sprite_rect, "extracted sprite geometry");
        geometries.push(geometry);
    }

    let inset = options.border + options.padding;
    let enlarged_sizes: Vec<(u32, u32)> = geometries
        .iter()
        .map(|g| {
            (
                g.sprite_rect.width() as u32 + 2 * inset,
                g.sprite_rect.height() as u32 + 2 * inset,
            )
        })
        .collect();

    let placements = pack::pack_rects(&enlarged_sizes, options.max_width, options.max_height)?;
    let (sheet_width, sheet_height) = pack::sheet_dimensions(&placements, options.max_width, options.max_height, options.pot)?;

    let mut sheet = Sheet::new(sheet_width, sheet_height)?;
    let mut entries = Vec::with_capacity(geometries.len());

    for (geometry, placement) in geometries.iter().zip(&placements) {
        let entry = compose_one(geometry, placement, options, &mut sheet)?;
        entries.push(entry);
    }

    let rgba_image = sheet.into_rgba_image().ok_or(Error::OutOfMemory)?;

    Ok((
        Descriptor {
            image: String::new(), // filled in by `run_and_write` once the output path is known
            image_width: sheet_width,
            image_height: sheet_height,
            sprites: entries,
        },
        rgba_image,
    ))
}

fn compose_one(
    geometry: &SpriteGeometry,
    placement: &Placement,
    options: &PipelineOptions,
    sheet: &mut Sheet,
) -> Result<SpriteEntry, Error> {
    let border = options.border;
    let padding = options.padding;

    let blit_x = placement.x as i32 + (border + padding) as i32;
    let blit_y = placement.y as i32 + (border + padding) as i32;
    sheet.blit(&geometry.source, geometry.sprite_rect, blit_x, blit_y);

    let sheet_rect_w = placement.width - 2 * border;
    let sheet_rect_h = placement.height - 2 * border;
    let sheet_rect = sprite_atlas_path::IntRect::from_xywh(
        placement.x as i32 + border as i32,
        placement.y as i32 + border as i32,
        sheet_rect_w as i32,
        sheet_rect_h as i32,
    )
    .expect("placement width/height always exceed 2*border for a sprite with non-zero size");

    let mesh_entry = geometry.mesh.as_ref().map(|mesh| {
        let positions = sprite::clamp_mesh_to_rect(mesh, &geometry.sprite_rect);
        let uvs = uv::compute_uvs(&positions, &geometry.sprite_rect, placement, border, padding);
        let indices: Vec<u16> = mesh.triangles.iter().flatten().copied().collect();
        MeshEntry {
            num_tris: mesh.num_triangles(),
            num_vertices: mesh.num_vertices(),
            indices,
            positions: positions.iter().map(|p| [p.x, p.y]).collect(),
            uvs: uvs.iter().map(|p| [p.x, p.y]).collect(),
        }
    });

    Ok(SpriteEntry {
        name: geometry.name.clone(),
        size: [geometry.sprite_rect.width(), geometry.sprite_rect.height()],
        sprite_rect: [
            geometry.sprite_rect.xmin(),
            geometry.sprite_rect.ymin(),
            geometry.sprite_rect.xmax(),
            geometry.sprite_rect.ymax(),
        ],
        sheet_rect: [sheet_rect.xmin(), sheet_rect.ymin(), sheet_rect.xmax(), sheet_rect.ymax()],
        mesh: mesh_entry,
    })
}

/// Runs the pipeline and writes both outputs to disk: the sheet PNG
/// alongside `descriptor_path` with the same basename and a `.png`
/// extension, and the descriptor itself at `descriptor_path`.
pub fn run_and_write(inputs: &[PathBuf], options: &PipelineOptions, descriptor_path: &Path) -> Result<(), Error> {
    let (mut descriptor, rgba_image) = run(inputs, options)?;

    let sheet_path = source_image::sheet_path_for(descriptor_path);
    let image_name = sheet_path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    descriptor.image = image_name;

    rgba_image.save(&sheet_path).map_err(Error::ImageEncodeFailed)?;

    let json = descriptor.to_json_string().map_err(|source| Error::DescriptorWriteFailed {
        path: descriptor_path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::Other, source),
    })?;
    std::fs::write(descriptor_path, json)
        .map_err(|source| Error::DescriptorWriteFailed { path: descriptor_path.to_path_buf(), source })?;

    Ok(())
}

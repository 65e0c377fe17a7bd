// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Sheet-space UV derivation (component I).

use sprite_atlas_path::{IntPoint, IntRect};

use crate::pack::Placement;

/// Maps sprite-local mesh vertices to sheet-space texel coordinates.
///
/// `uv = v - sprite_rect.min + sheet_target.min`, where `sheet_target.min`
/// is the placement's top-left corner pushed in by `border+padding`, the
/// same offset `compose_one` blits into (`placement.{x,y} +
/// (border+padding)`).
pub fn compute_uvs(
    vertices: &[IntPoint],
    sprite_rect: &IntRect,
    placement: &Placement,
    border: u32,
    padding: u32,
) -> Vec<IntPoint> {
    let inset = (border + padding) as i32;
    let sheet_target_min = IntPoint::from_xy(placement.x as i32 + inset, placement.y as i32 + inset);
    let sprite_min = sprite_rect.min();

    vertices
        .iter()
        .map(|&v| IntPoint::from_xy(v.x - sprite_min.x + sheet_target_min.x, v.y - sprite_min.y + sheet_target_min.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uv_matches_blit_target_origin_for_the_top_left_vertex() {
        let sprite_rect = IntRect::from_xywh(4, 4, 10, 10).unwrap();
        let placement = Placement { x: 20, y: 30, width: 16, height: 16 };
        let uvs = compute_uvs(&[sprite_rect.min()], &sprite_rect, &placement, 2, 1);
        assert_eq!(uvs[0], IntPoint::from_xy(23, 33));
    }
}

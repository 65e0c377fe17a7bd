// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Pushes simplified outline vertices outward until no edge crosses an
//! opaque pixel of the pre-dilation mask.

use crate::{IntPoint, Point};

const EPSILON: f64 = 1e-5;
const OFFSET_STEP: f64 = 2.0;

/// Returns whether the Bresenham rasterization of `a`-`b` visits a pixel for
/// which `is_opaque` returns true.
fn segment_hits_mask(a: Point, b: Point, is_opaque: &impl Fn(i32, i32) -> bool) -> bool {
    let a_i = a.round_to_int();
    let b_i = b.round_to_int();
    if is_opaque(a_i.x, a_i.y) || is_opaque(b_i.x, b_i.y) {
        return true;
    }
    let line = bresenham::Bresenham::new(
        (a_i.x as isize, a_i.y as isize),
        (b_i.x as isize, b_i.y as isize),
    );
    for (x, y) in line {
        if is_opaque(x as i32, y as i32) {
            return true;
        }
    }
    false
}

/// Tries to offset vertex `idx` outward by one repair step.
///
/// Returns whether the vertex actually moved; it will not if it is already
/// clamped against the image bounds on the axis the offset would push it.
fn try_offset(pts: &mut [Point], idx: usize, width: i32, height: i32) -> bool {
    let n = pts.len();
    let prev = pts[(idx + n - 1) % n];
    let cur = pts[idx];
    let next = pts[(idx + 1) % n];

    let e_prev = match (cur - prev).normalized() {
        Some(e) => e,
        None => return false,
    };
    let e_next = match (next - cur).normalized() {
        Some(e) => e,
        None => return false,
    };

    let cross_z = e_prev.cross_z(e_next);
    let dir = if cross_z.abs() < EPSILON {
        // Collinear corner: offset perpendicular to the incoming edge.
        Point::from_xy(-e_prev.y, e_prev.x)
    } else {
        let sum = e_prev + e_next;
        match sum.normalized() {
            Some(d) => {
                if cross_z > 0.0 {
                    d
                } else {
                    d * -1.0
                }
            }
            // The two edges cancel out (a near-180-degree corner); fall
            // back to the incoming edge's perpendicular.
            None => Point::from_xy(-e_prev.y, e_prev.x),
        }
    };

    let moved = cur + dir * OFFSET_STEP;
    let clamped = Point::from_xy(moved.x.clamp(0.0, width as f64), moved.y.clamp(0.0, height as f64));

    if (clamped.x - cur.x).abs() < 1e-9 && (clamped.y - cur.y).abs() < 1e-9 {
        false
    } else {
        pts[idx] = clamped;
        true
    }
}

/// Repairs a simplified outline so none of its edges cross an opaque pixel
/// of `is_opaque` (the pre-dilation mask), per edge, by nudging the two
/// endpoints outward until the edge clears or neither endpoint can move
/// further.
///
/// `width`/`height` bound the vertex coordinates after clamping (the source
/// image's dimensions).
pub fn repair_outline(
    points: &[IntPoint],
    width: i32,
    height: i32,
    is_opaque: impl Fn(i32, i32) -> bool,
) -> Vec<IntPoint> {
    let mut pts: Vec<Point> = points.iter().map(|p| p.to_point()).collect();
    let n = pts.len();
    if n < 3 {
        return points.to_vec();
    }

    for i in 0..n {
        loop {
            let j = (i + 1) % n;
            if !segment_hits_mask(pts[i], pts[j], &is_opaque) {
                break;
            }
            let moved_i = try_offset(&mut pts, i, width, height);
            let moved_j = try_offset(&mut pts, j, width, height);
            if !moved_i && !moved_j {
                break;
            }
        }
    }

    pts.iter().map(|p| p.round_to_int()).collect()
}

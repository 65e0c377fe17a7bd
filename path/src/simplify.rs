// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Distance-based outline decimation.

use crate::{IntPoint, Point};

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Falls back to the distance to `a` when `a` and `b` coincide.
fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len = ab.length();
    if len < 1e-9 {
        return (p - a).length();
    }
    (ab.cross_z(p - a)).abs() / len
}

/// Removes vertices whose perpendicular distance to their kept neighbors is
/// below `threshold`, repeating full passes until one changes nothing.
fn simplify_until_stable(points: &[IntPoint], threshold: f64) -> Vec<IntPoint> {
    let mut pts = points.to_vec();
    loop {
        if pts.len() <= 3 {
            return pts;
        }
        let mut changed = false;
        let mut i = 0;
        while pts.len() > 3 && i < pts.len() {
            let n = pts.len();
            let prev = pts[(i + n - 1) % n].to_point();
            let cur = pts[i].to_point();
            let next = pts[(i + 1) % n].to_point();
            if point_segment_distance(cur, prev, next) < threshold {
                pts.remove(i);
                changed = true;
                // Re-examine the same index: it now holds the old i+1.
            } else {
                i += 1;
            }
        }
        if !changed {
            return pts;
        }
    }
}

/// Simplifies a closed outline to at most `max_verts` vertices.
///
/// Starts at threshold 0.5 and grows it by 0.5 until the simplified outline
/// fits the budget, accepting whatever the last attempt produced after 1024
/// iterations so the function always terminates.
pub fn simplify_to_budget(points: &[IntPoint], max_verts: usize) -> Vec<IntPoint> {
    const DELTA: f64 = 0.5;
    const SAFETY_CAP: u32 = 1024;

    let mut threshold = 0.5;
    let mut result = points.to_vec();
    for _ in 0..SAFETY_CAP {
        result = simplify_until_stable(points, threshold);
        if result.len() <= max_verts.max(3) {
            break;
        }
        threshold += DELTA;
    }
    result
}

// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Unconstrained 2-D Delaunay triangulation (Bowyer-Watson).

use crate::{IntPoint, Mesh, Point};

type Tri = [usize; 3];

/// Orients `tri` counter-clockwise, swapping two vertices if needed.
fn make_ccw(tri: Tri, verts: &[Point]) -> Tri {
    let [a, b, c] = tri;
    let area2 = (verts[b].x - verts[a].x) * (verts[c].y - verts[a].y)
        - (verts[c].x - verts[a].x) * (verts[b].y - verts[a].y);
    if area2 < 0.0 {
        [a, c, b]
    } else {
        tri
    }
}

/// Whether `p` lies inside the circumcircle of the (CCW-wound) triangle
/// `tri`, via the standard determinant in-circle predicate.
fn in_circumcircle(tri: Tri, p: Point, verts: &[Point]) -> bool {
    let a = verts[tri[0]];
    let b = verts[tri[1]];
    let c = verts[tri[2]];

    let ax = a.x - p.x;
    let ay = a.y - p.y;
    let bx = b.x - p.x;
    let by = b.y - p.y;
    let cx = c.x - p.x;
    let cy = c.y - p.y;

    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);
    det > 0.0
}

/// An undirected edge between two vertex indices, stored with the smaller
/// index first so equal edges compare equal regardless of winding.
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Removes exact-duplicate points, keeping the first occurrence.
fn dedupe(points: &[IntPoint]) -> Vec<IntPoint> {
    let mut out: Vec<IntPoint> = Vec::with_capacity(points.len());
    for &p in points {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Triangulates a point set (not a constrained polygon: the input's
/// closure, if any, is ignored).
///
/// Degenerate (zero-area) triangles are dropped. Panics-free: if the point
/// set is too small or fully collinear, returns a `Mesh` with no triangles.
pub fn triangulate(input: &[IntPoint]) -> Mesh {
    let points = dedupe(input);
    if points.len() < 3 {
        return Mesh { points, triangles: Vec::new() };
    }

    let float_points: Vec<Point> = points.iter().map(|p| p.to_point()).collect();

    // Super-triangle enclosing every input point with generous margin.
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
    for p in &float_points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let dx = (max_x - min_x).max(1.0);
    let dy = (max_y - min_y).max(1.0);
    let cx = (min_x + max_x) / 2.0;
    let cy = (min_y + max_y) / 2.0;
    let d = dx.max(dy) * 20.0 + 100.0;

    let mut verts = float_points;
    let super_a = verts.len();
    verts.push(Point::from_xy(cx - d, cy - d / 2.0));
    let super_b = verts.len();
    verts.push(Point::from_xy(cx, cy + d));
    let super_c = verts.len();
    verts.push(Point::from_xy(cx + d, cy - d / 2.0));

    let mut triangles: Vec<Tri> = vec![make_ccw([super_a, super_b, super_c], &verts)];

    for point_idx in 0..points.len() {
        let p = verts[point_idx];

        let mut bad: Vec<Tri> = Vec::new();
        let mut good: Vec<Tri> = Vec::new();
        for &tri in &triangles {
            if in_circumcircle(tri, p, &verts) {
                bad.push(tri);
            } else {
                good.push(tri);
            }
        }

        // Boundary of the polygonal hole left by removing the bad
        // triangles: edges that belong to exactly one bad triangle.
        let mut edge_counts: std::collections::HashMap<(usize, usize), (usize, usize, u32)> =
            std::collections::HashMap::new();
        for &tri in &bad {
            for &(u, v) in &[(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let entry = edge_counts.entry(edge_key(u, v)).or_insert((u, v, 0));
                entry.2 += 1;
            }
        }

        good.reserve(edge_counts.len());
        for &(u, v, count) in edge_counts.values() {
            if count == 1 {
                good.push(make_ccw([u, v, point_idx], &verts));
            }
        }
        triangles = good;
    }

    // Drop every triangle touching a super-triangle vertex, and any
    // remaining degenerate (collinear) triangle.
    let triangles: Vec<Tri> = triangles
        .into_iter()
        .filter(|tri| !tri.contains(&super_a) && !tri.contains(&super_b) && !tri.contains(&super_c))
        .collect();

    let out_triangles: Vec<[u16; 3]> = triangles
        .into_iter()
        .filter_map(|tri| {
            let a = points[tri[0]];
            let b = points[tri[1]];
            let c = points[tri[2]];
            let area2 = (b.x - a.x) as i64 * (c.y - a.y) as i64 - (c.x - a.x) as i64 * (b.y - a.y) as i64;
            if area2 == 0 {
                return None;
            }
            Some([tri[0] as u16, tri[1] as u16, tri[2] as u16])
        })
        .collect();

    debug_assert!(points.len() < u16::MAX as usize, "mesh vertex count must fit in 16 bits");
    debug_assert!(out_triangles.len() < u16::MAX as usize, "mesh triangle count must fit in 16 bits");

    Mesh { points, triangles: out_triangles }
}

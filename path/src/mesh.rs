// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The triangulated mesh produced for a sprite, if one was requested.

use crate::IntPoint;

/// A triangulated point set: vertex positions plus index triples.
///
/// `points.len()` and `triangles.len()` are both guaranteed to fit in
/// `u16`, per the sidecar descriptor's 16-bit index format.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Mesh {
    pub points: Vec<IntPoint>,
    pub triangles: Vec<[u16; 3]>,
}

impl Mesh {
    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Twice the signed area of triangle `tri` (positive iff its indices
    /// wind counter-clockwise in this coordinate system).
    pub fn triangle_area_x2(&self, tri: [u16; 3]) -> i64 {
        let a = self.points[tri[0] as usize];
        let b = self.points[tri[1] as usize];
        let c = self.points[tri[2] as usize];
        (b.x as i64 - a.x as i64) * (c.y as i64 - a.y as i64)
            - (c.x as i64 - a.x as i64) * (b.y as i64 - a.y as i64)
    }

    /// Whether every triangle has strictly positive area and every index is
    /// in bounds. Used by tests and by the pipeline's invariant checks.
    pub fn is_valid(&self) -> bool {
        let n = self.points.len();
        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| (i as usize) < n) && self.triangle_area_x2(*tri) != 0
        })
    }
}

// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Alpha thresholding and 8-connected dilation (component A).

/// A binary W×H mask: each cell is either opaque or not.
#[derive(Clone, Debug)]
pub struct Mask {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl Mask {
    fn filled(width: i32, height: i32) -> Self {
        Mask { width, height, cells: vec![false; (width as usize) * (height as usize)] }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `(x, y)` is opaque; out-of-bounds reads as not opaque.
    #[inline]
    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, value: bool) {
        self.cells[y as usize * self.width as usize + x as usize] = value;
    }

    /// Count of opaque cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

const NEIGHBORHOOD_8: [(i32, i32); 8] =
    [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

/// Builds the thresholded mask `M` and its once-dilated counterpart `D`.
///
/// `M[x,y]` is opaque iff `alpha_at(x,y) >= threshold`. `D` additionally
/// marks every cell touching an `M`-opaque cell in its 8-neighborhood (or the
/// cell itself). Cells outside the image bounds never count as opaque.
pub fn build_masks(
    width: i32,
    height: i32,
    threshold: u8,
    alpha_at: impl Fn(i32, i32) -> u8,
) -> (Mask, Mask) {
    let mut thresholded = Mask::filled(width, height);
    for y in 0..height {
        for x in 0..width {
            if alpha_at(x, y) >= threshold {
                thresholded.set(x, y, true);
            }
        }
    }

    let mut dilated = Mask::filled(width, height);
    for y in 0..height {
        for x in 0..width {
            if thresholded.is_opaque(x, y) {
                dilated.set(x, y, true);
                continue;
            }
            let touches = NEIGHBORHOOD_8.iter().any(|&(dx, dy)| thresholded.is_opaque(x + dx, y + dy));
            if touches {
                dilated.set(x, y, true);
            }
        }
    }

    (thresholded, dilated)
}

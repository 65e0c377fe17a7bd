// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Connected-component selection and Moore-neighbor boundary tracing
//! (component B).

use sprite_atlas_path::{IntPoint, OutlinePath};

use crate::mask::Mask;

/// Clockwise compass directions starting at North, y-down screen convention.
const DIRS: [(i32, i32); 8] =
    [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1)];

fn dir_index(from: (i32, i32), to: (i32, i32)) -> usize {
    let d = (to.0 - from.0, to.1 - from.1);
    DIRS.iter().position(|&dir| dir == d).expect("neighbor must be one of the 8 compass directions")
}

struct Labels {
    width: i32,
    height: i32,
    ids: Vec<i32>,
}

impl Labels {
    fn new(width: i32, height: i32) -> Self {
        Labels { width, height, ids: vec![0; width as usize * height as usize] }
    }

    fn get(&self, x: i32, y: i32) -> i32 {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return 0;
        }
        self.ids[y as usize * self.width as usize + x as usize]
    }

    fn set(&mut self, x: i32, y: i32, id: i32) {
        self.ids[y as usize * self.width as usize + x as usize] = id;
    }
}

struct Component {
    id: i32,
    area: usize,
    ymin: i32,
    xmin: i32,
}

/// Labels every 8-connected opaque region of `mask` and returns their stats.
fn label_components(mask: &Mask) -> (Labels, Vec<Component>) {
    let (width, height) = (mask.width(), mask.height());
    let mut labels = Labels::new(width, height);
    let mut components = Vec::new();
    let mut next_id = 1;

    let mut stack = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if !mask.is_opaque(x, y) || labels.get(x, y) != 0 {
                continue;
            }
            let id = next_id;
            next_id += 1;
            labels.set(x, y, id);
            stack.push((x, y));
            let mut area = 0usize;
            let (mut ymin, mut xmin) = (y, x);
            while let Some((cx, cy)) = stack.pop() {
                area += 1;
                if cy < ymin || (cy == ymin && cx < xmin) {
                    ymin = cy;
                    xmin = cx;
                }
                for &(dx, dy) in &DIRS {
                    let (nx, ny) = (cx + dx, cy + dy);
                    if mask.is_opaque(nx, ny) && labels.get(nx, ny) == 0 {
                        labels.set(nx, ny, id);
                        stack.push((nx, ny));
                    }
                }
            }
            components.push(Component { id, area, ymin, xmin });
        }
    }

    (labels, components)
}

/// Traces the boundary of the largest connected opaque region in `mask` via
/// canonical 8-direction Moore-neighbor boundary following, starting from
/// the topmost-leftmost opaque pixel of that region.
///
/// Ties in area are broken by smallest `ymin` then smallest `xmin`. Returns
/// `None` if `mask` has no opaque pixels at all.
pub fn trace_largest_region(mask: &Mask) -> Option<OutlinePath> {
    let (labels, components) = label_components(mask);
    if components.is_empty() {
        return None;
    }

    let best = components
        .iter()
        .min_by_key(|c| (std::cmp::Reverse(c.area), c.ymin, c.xmin))
        .expect("components is non-empty");
    let best_id = best.id;

    let is_member = |x: i32, y: i32| labels.get(x, y) == best_id;

    // The topmost-leftmost pixel of this region: row-major scan order
    // guarantees the first hit is already leftmost within its row.
    let (width, height) = (mask.width(), mask.height());
    let mut start = None;
    'scan: for y in 0..height {
        for x in 0..width {
            if is_member(x, y) {
                start = Some((x, y));
                break 'scan;
            }
        }
    }
    let start = start.expect("best component has at least one pixel");

    Some(OutlinePath::new(moore_trace(start, &is_member)))
}

fn moore_trace(start: (i32, i32), is_member: &impl Fn(i32, i32) -> bool) -> Vec<IntPoint> {
    let mut boundary = vec![IntPoint::from_xy(start.0, start.1)];
    let mut current = start;
    // The start pixel was found scanning left-to-right, top-to-bottom, so
    // its west neighbor is guaranteed background (or out of the region).
    let mut backtrack = (start.0 - 1, start.1);
    // Jacob's stopping criterion: the trace closes only when the start
    // pixel is revisited via this same entry direction, not merely on the
    // first revisit (a self-touching/pinched silhouette can pass through
    // the start pixel more than once before the boundary truly closes).
    let initial_entry_idx = dir_index(current, backtrack);

    loop {
        let entry_idx = dir_index(current, backtrack);
        let mut found = None;
        for k in 1..=8 {
            let idx = (entry_idx + k) % 8;
            let (dx, dy) = DIRS[idx];
            let candidate = (current.0 + dx, current.1 + dy);
            if is_member(candidate.0, candidate.1) {
                let prev_idx = (entry_idx + k - 1) % 8;
                let (pdx, pdy) = DIRS[prev_idx];
                backtrack = (current.0 + pdx, current.1 + pdy);
                found = Some(candidate);
                break;
            }
        }

        match found {
            None => break, // isolated single pixel: nothing more to trace.
            Some(next) => {
                current = next;
                if current == start && dir_index(current, backtrack) == initial_entry_idx {
                    break;
                }
                boundary.push(IntPoint::from_xy(current.0, current.1));
            }
        }
    }

    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::build_masks;

    #[test]
    fn traces_a_filled_square() {
        let (_m, d) = build_masks(6, 6, 1, |x, y| if (1..5).contains(&x) && (1..5).contains(&y) { 255 } else { 0 });
        let outline = trace_largest_region(&d).unwrap();
        assert!(outline.len() >= 4);
        let bb = outline.bounding_box().unwrap();
        assert_eq!((bb.xmin(), bb.ymin(), bb.xmax(), bb.ymax()), (1, 1, 5, 5));
    }

    #[test]
    fn picks_the_larger_of_two_regions() {
        let is_opaque = |x: i32, y: i32| {
            // A 1x1 speck at (0,0) and a 4x4 block at (10,10)..(14,14).
            (x == 0 && y == 0) || ((10..14).contains(&x) && (10..14).contains(&y))
        };
        let (_m, d) = build_masks(20, 20, 1, |x, y| if is_opaque(x, y) { 255 } else { 0 });
        let outline = trace_largest_region(&d).unwrap();
        let bb = outline.bounding_box().unwrap();
        assert_eq!((bb.xmin(), bb.ymin()), (10, 10));
    }

    #[test]
    fn empty_mask_returns_none() {
        let (_m, d) = build_masks(4, 4, 1, |_, _| 0);
        assert!(trace_largest_region(&d).is_none());
    }

    #[test]
    fn traced_outline_winds_clockwise() {
        let (_m, d) = build_masks(6, 6, 1, |x, y| if (1..5).contains(&x) && (1..5).contains(&y) { 255 } else { 0 });
        let outline = trace_largest_region(&d).unwrap();
        assert!(outline.signed_area_x2() > 0);
    }

    #[test]
    fn pinched_silhouette_is_not_closed_on_a_premature_revisit_of_the_start_pixel() {
        // The topmost-leftmost pixel (3,3) is itself a single-pixel waist
        // diagonally bridging two otherwise disjoint 2x2 blocks. The trace
        // passes back through (3,3) once from the block at (4,4)..(5,5)
        // before it has gone the long way around to the block at
        // (1,4)..(2,5); closing on that first revisit would truncate the
        // outline and miss the second block entirely.
        let is_opaque = |x: i32, y: i32| {
            (x == 3 && y == 3)
                || ((4..6).contains(&x) && (4..6).contains(&y))
                || ((1..3).contains(&x) && (4..6).contains(&y))
        };
        let (m, _d) = build_masks(10, 10, 1, |x, y| if is_opaque(x, y) { 255 } else { 0 });
        let outline = trace_largest_region(&m).unwrap();
        let bb = outline.bounding_box().unwrap();
        assert_eq!(
            (bb.xmin(), bb.ymin(), bb.xmax(), bb.ymax()),
            (1, 3, 6, 6),
            "outline must enclose both blocks joined at the waist, not just the first one reached"
        );
    }
}

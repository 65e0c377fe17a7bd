// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Skyline bottom-left bin packing (component G).

use crate::error::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One segment of the skyline's height profile: `[x, x+width)` is at height
/// `y` above the bin floor.
struct Node {
    x: u32,
    y: u32,
    width: u32,
}

struct Skyline {
    nodes: Vec<Node>,
    max_width: u32,
}

impl Skyline {
    fn new(max_width: u32) -> Self {
        Skyline { nodes: vec![Node { x: 0, y: 0, width: max_width }], max_width }
    }

    /// Height a rectangle of `width` would rest at if its left edge sat at
    /// the node with index `start`, plus how many nodes it spans.
    fn fits_at(&self, start: usize, width: u32) -> Option<(u32, usize)> {
        let x = self.nodes[start].x;
        if x + width > self.max_width {
            return None;
        }
        let mut y = 0u32;
        let mut remaining = width;
        let mut i = start;
        while remaining > 0 {
            let node = self.nodes.get(i)?;
            y = y.max(node.y);
            remaining = remaining.saturating_sub(node.width);
            i += 1;
        }
        Some((y, i - start))
    }

    /// Bottom-left search: the lowest `y`, tie-broken by smallest `x`.
    fn find_position(&self, width: u32, height: u32, max_height: u32) -> Option<(u32, u32, usize, usize)> {
        let mut best: Option<(u32, u32, usize, usize)> = None;
        for start in 0..self.nodes.len() {
            if let Some((y, span)) = self.fits_at(start, width) {
                if y + height > max_height {
                    continue;
                }
                let x = self.nodes[start].x;
                let better = match best {
                    None => true,
                    Some((by, bx, _, _)) => y < by || (y == by && x < bx),
                };
                if better {
                    best = Some((y, x, start, span));
                }
            }
        }
        best.map(|(y, x, start, span)| (x, y, start, span))
    }

    /// Replaces the skyline segments `[start, start+span)` with a single
    /// raised segment covering `[x, x+width)` at height `y + height`, then
    /// re-merges adjacent equal-height segments.
    fn place(&mut self, x: u32, y: u32, width: u32, height: u32, start: usize, span: usize) {
        let end = start + span;
        let tail_x = self.nodes[end - 1].x + self.nodes[end - 1].width;
        let covered_end = x + width;

        let mut replacement = vec![Node { x, y: y + height, width }];
        if covered_end < tail_x {
            replacement.push(Node { x: covered_end, y: self.nodes[end - 1].y, width: tail_x - covered_end });
        }
        self.nodes.splice(start..end, replacement);
        self.merge_adjacent();
    }

    fn merge_adjacent(&mut self) {
        let mut i = 0;
        while i + 1 < self.nodes.len() {
            if self.nodes[i].y == self.nodes[i + 1].y {
                self.nodes[i].width += self.nodes[i + 1].width;
                self.nodes.remove(i + 1);
            } else {
                i += 1;
            }
        }
    }
}

/// Packs `sizes` (width, height pairs, already enlarged by border+padding)
/// bottom-left onto a `max_width` x `max_height` bin.
///
/// Returns one [`Placement`] per input rectangle, in input order, or
/// [`Error::PackOverflow`] if any rectangle does not fit. Node budget is
/// `max_width + max_height`, same bound the skyline's own merging keeps it
/// under.
pub fn pack_rects(sizes: &[(u32, u32)], max_width: u32, max_height: u32) -> Result<Vec<Placement>, Error> {
    let mut skyline = Skyline::new(max_width);
    let mut placements = Vec::with_capacity(sizes.len());

    for &(width, height) in sizes {
        let (x, y, start, span) = match skyline.find_position(width, height, max_height) {
            Some(pos) => pos,
            None => return Err(Error::PackOverflow { count: sizes.len(), max_width, max_height }),
        };
        skyline.place(x, y, width, height, start, span);
        placements.push(Placement { x, y, width, height });

        debug_assert!(
            skyline.nodes.len() as u64 <= max_width as u64 + max_height as u64,
            "skyline node count exceeds the max_width + max_height bound"
        );
    }

    Ok(placements)
}

fn next_multiple_of_4(n: u32) -> u32 {
    (n + 3) & !3
}

/// Computes the sheet's final dimensions from the tight AABB of all
/// placements: rounded up to a multiple of 4, and additionally to the next
/// power of two when `pot` is set.
///
/// The rounding can push a dimension past `max_width`/`max_height` even
/// though every individual placement fit (e.g. a natural width of 2047
/// rounds to 2048, or to the next power of two under `--pot`). Reports
/// [`Error::PackOverflow`] in that case rather than silently clamping,
/// which would shrink the sheet below what the placements actually need
/// and violate the content-fits invariant.
pub fn sheet_dimensions(placements: &[Placement], max_width: u32, max_height: u32, pot: bool) -> Result<(u32, u32), Error> {
    let natural_w = placements.iter().map(|p| p.x + p.width).max().unwrap_or(0);
    let natural_h = placements.iter().map(|p| p.y + p.height).max().unwrap_or(0);

    let mut w = next_multiple_of_4(natural_w);
    let mut h = next_multiple_of_4(natural_h);
    if pot {
        w = w.next_power_of_two();
        h = h.next_power_of_two();
    }

    if w > max_width || h > max_height {
        return Err(Error::PackOverflow { count: placements.len(), max_width, max_height });
    }

    Ok((w, h))
}

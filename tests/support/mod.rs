//! Shared helpers for building synthetic sprite images in memory.

use std::path::{Path, PathBuf};

/// Writes a `width`x`height` RGBA PNG under `dir/name`, with each pixel's
/// alpha given by `alpha_at(x, y)` and a fixed, fully-opaque-looking color
/// so decoded bytes are easy to reason about in assertions.
pub fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32, alpha_at: impl Fn(u32, u32) -> u8) -> PathBuf {
    let mut img = image::RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x, y, image::Rgba([200, 100, 50, alpha_at(x, y)]));
        }
    }
    let path = dir.join(name);
    img.save(&path).expect("writing a synthetic test PNG must succeed");
    path
}

/// A filled disc of `radius` centered at `(cx, cy)`.
pub fn disc_alpha(cx: i32, cy: i32, radius: i32) -> impl Fn(u32, u32) -> u8 {
    move |x, y| {
        let dx = x as i32 - cx;
        let dy = y as i32 - cy;
        if dx * dx + dy * dy <= radius * radius {
            255
        } else {
            0
        }
    }
}

/// A fully opaque square occupying `[x0, x0+size) x [y0, y0+size)`.
pub fn square_alpha(x0: u32, y0: u32, size: u32) -> impl Fn(u32, u32) -> u8 {
    move |x, y| if x >= x0 && x < x0 + size && y >= y0 && y < y0 + size { 255 } else { 0 }
}

/// A coarse N-pointed star, alternating inner/outer radius by angular
/// sector, dense enough to trace an outline well over any small vertex
/// budget.
pub fn star_alpha(cx: f64, cy: f64, outer: f64, inner: f64, points: u32) -> impl Fn(u32, u32) -> u8 {
    move |x, y| {
        let dx = x as f64 + 0.5 - cx;
        let dy = y as f64 + 0.5 - cy;
        let r = (dx * dx + dy * dy).sqrt();
        let theta = dy.atan2(dx).rem_euclid(std::f64::consts::TAU);
        let sector = std::f64::consts::TAU / (points as f64 * 2.0);
        let k = (theta / sector).floor() as u32;
        let boundary = if k % 2 == 0 { outer } else { inner };
        if r <= boundary {
            255
        } else {
            0
        }
    }
}

/// Walks the Bresenham rasterization of `(a, b)` (lattice points) and
/// returns whether any visited cell is opaque in `mask`.
pub fn segment_hits_mask(a: (i32, i32), b: (i32, i32), is_opaque: impl Fn(i32, i32) -> bool) -> bool {
    let (mut x0, mut y0) = a;
    let (x1, y1) = b;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if is_opaque(x0, y0) {
            return true;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    false
}

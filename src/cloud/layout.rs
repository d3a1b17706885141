//! Word placement and rasterization.
//!
//! Words are drawn with the 8x8 bitmap font scaled per frequency rank
//! and packed along an elliptical spiral from the canvas center. A word
//! that cannot be placed without overlap is skipped.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};

/// Viridis-style palette cycled over placed words.
const PALETTE: &[[u8; 3]] = &[
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

/// Smallest and largest glyph scale factors (glyphs are 8x8 at scale 1).
const MIN_SCALE: usize = 1;
const MAX_SCALE: usize = 6;

/// Gap kept between placed words, in pixels.
const MARGIN: i64 = 2;

/// One placed word, ready to draw.
#[derive(Debug, Clone)]
pub struct Placement {
    pub word: String,
    pub x: u32,
    pub y: u32,
    pub scale: u32,
    pub color: Rgba<u8>,
}

/// Pack ranked `(word, count)` pairs onto a `width` x `height` canvas.
pub fn lay_out(freqs: &[(String, usize)], width: u32, height: u32) -> Vec<Placement> {
    let min_count = freqs.iter().map(|(_, c)| *c).min().unwrap_or(1);
    let max_count = freqs.iter().map(|(_, c)| *c).max().unwrap_or(1);

    let mut rects: Vec<(i64, i64, i64, i64)> = Vec::new();
    let mut placements = Vec::new();

    for (rank, (word, count)) in freqs.iter().enumerate() {
        let scale = scale_for(*count, min_count, max_count);
        let w = (word.chars().count() * 8 * scale) as i64;
        let h = (8 * scale) as i64;

        if let Some((x, y)) = find_spot(w, h, width, height, &rects) {
            rects.push((x, y, w, h));
            let [r, g, b] = PALETTE[rank % PALETTE.len()];
            placements.push(Placement {
                word: word.clone(),
                x: x as u32,
                y: y as u32,
                scale: scale as u32,
                color: Rgba([r, g, b, 255]),
            });
        }
    }

    placements
}

/// Rasterize placements over a solid background.
pub fn draw(placements: &[Placement], width: u32, height: u32, background: Rgba<u8>) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width, height, background);
    for placement in placements {
        draw_word(&mut canvas, placement);
    }
    canvas
}

fn scale_for(count: usize, min_count: usize, max_count: usize) -> usize {
    if max_count == min_count {
        return (MIN_SCALE + MAX_SCALE) / 2;
    }
    MIN_SCALE + (count - min_count) * (MAX_SCALE - MIN_SCALE) / (max_count - min_count)
}

/// Walk an elliptical spiral out from the center until the word's
/// bounding box fits inside the canvas without touching placed words.
fn find_spot(
    w: i64,
    h: i64,
    width: u32,
    height: u32,
    rects: &[(i64, i64, i64, i64)],
) -> Option<(i64, i64)> {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;

    for step in 0..6000 {
        let t = step as f64 * 0.08;
        let r = 2.5 * t;
        let x = (cx + r * t.cos() - w as f64 / 2.0).round() as i64;
        let y = (cy + 0.55 * r * t.sin() - h as f64 / 2.0).round() as i64;

        if x < MARGIN || y < MARGIN || x + w > width as i64 - MARGIN || y + h > height as i64 - MARGIN
        {
            continue;
        }
        if !rects.iter().any(|r| overlaps((x, y, w, h), *r)) {
            return Some((x, y));
        }
    }

    None
}

fn overlaps(a: (i64, i64, i64, i64), b: (i64, i64, i64, i64)) -> bool {
    a.0 < b.0 + b.2 + MARGIN
        && b.0 < a.0 + a.2 + MARGIN
        && a.1 < b.1 + b.3 + MARGIN
        && b.1 < a.1 + a.3 + MARGIN
}

fn draw_word(canvas: &mut RgbaImage, placement: &Placement) {
    let scale = placement.scale;
    for (i, ch) in placement.word.chars().enumerate() {
        let glyph = match BASIC_FONTS.get(ch) {
            Some(glyph) => glyph,
            None => continue,
        };
        let gx = placement.x + (i as u32) * 8 * scale;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..8u32 {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = gx + col * scale + dx;
                        let py = placement.y + row as u32 * scale + dy;
                        if px < canvas.width() && py < canvas.height() {
                            canvas.put_pixel(px, py, placement.color);
                        }
                    }
                }
            }
        }
    }
}

//! 5x7 block font.
//!
//! Text is drawn with the same quads as the paddles: every lit run of
//! pixels in a glyph row becomes one rectangle.

use game_core::{Aabb, Align};
use glam::Vec2;

pub const GLYPH_COLS: usize = 5;
pub const GLYPH_ROWS: usize = 7;
const ADVANCE_COLS: usize = GLYPH_COLS + 1; // one blank column between glyphs

/// Rows top to bottom, bit 4 is the leftmost column
fn glyph(c: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110],
        'y' => [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        ' ' => [0; GLYPH_ROWS],
        _ => return None,
    };
    Some(rows)
}

/// Width of one font pixel for a line `size` units tall
pub fn cell_size(size: f32) -> f32 {
    size / GLYPH_ROWS as f32
}

/// Width of `text` at `size`, without trailing spacing
pub fn measure(text: &str, size: f32) -> f32 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    let cols = count * ADVANCE_COLS - 1;
    cols as f32 * cell_size(size)
}

/// Rectangles covering `text`. `pos.y` is the top of the line; `align`
/// decides whether `pos.x` is the left edge or the middle.
/// Characters without a glyph leave a blank space.
pub fn layout(text: &str, pos: Vec2, size: f32, align: Align) -> Vec<Aabb> {
    let cell = cell_size(size);
    let left = match align {
        Align::Left => pos.x,
        Align::Center => pos.x - measure(text, size) / 2.0,
    };

    let mut rects = Vec::new();
    for (index, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            log::trace!("no glyph for {:?}", c);
            continue;
        };
        let origin_x = left + (index * ADVANCE_COLS) as f32 * cell;

        for (row, bits) in rows.iter().enumerate() {
            let y = pos.y + row as f32 * cell;
            let mut col = 0;
            while col < GLYPH_COLS {
                if !lit(*bits, col) {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_COLS && lit(*bits, col) {
                    col += 1;
                }
                rects.push(Aabb::new(
                    Vec2::new(origin_x + start as f32 * cell, y),
                    Vec2::new(origin_x + col as f32 * cell, y + cell),
                ));
            }
        }
    }
    rects
}

fn lit(bits: u8, col: usize) -> bool {
    bits & (1 << (GLYPH_COLS - 1 - col)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_and_digits_have_glyphs() {
        for c in "Player 1 Wins!Player 2 Wins!0123456789".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {:?}", c);
        }
        assert!(glyph('#').is_none());
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure("", 7.0), 0.0);
        assert_eq!(measure("1", 7.0), 5.0);
        assert_eq!(measure("10", 7.0), 11.0);
        assert!((measure("Player 1 Wins!", 60.0) - 83.0 * 60.0 / 7.0).abs() < 1e-3);
    }

    #[test]
    fn test_runs_are_merged() {
        // Bottom row of '2' is fully lit: one rect, five cells wide
        let rects = layout("2", Vec2::ZERO, 7.0, Align::Left);
        let bottom: Vec<_> = rects.iter().filter(|r| r.min.y == 6.0).collect();
        assert_eq!(bottom.len(), 1);
        assert_eq!(bottom[0].width(), 5.0);
        assert_eq!(bottom[0].height(), 1.0);
    }

    #[test]
    fn test_one_is_laid_out_at_position() {
        let rects = layout("1", Vec2::new(100.0, 50.0), 7.0, Align::Left);
        // One run per row
        assert_eq!(rects.len(), 7);
        assert_eq!(rects[0].min, Vec2::new(102.0, 50.0));
        assert_eq!(rects[0].max, Vec2::new(103.0, 51.0));
    }

    #[test]
    fn test_center_alignment() {
        let size = 60.0;
        let text = "Player 2 Wins!";
        let rects = layout(text, Vec2::new(600.0, 400.0), size, Align::Center);
        let width = measure(text, size);
        let min_x = rects.iter().map(|r| r.min.x).fold(f32::MAX, f32::min);
        let max_x = rects.iter().map(|r| r.max.x).fold(f32::MIN, f32::max);
        // 'P' lights its left column, so the text starts half its width left of centre
        assert!((min_x - (600.0 - width / 2.0)).abs() < 1e-2);
        assert!(max_x <= 600.0 + width / 2.0 + 1e-2);
        assert!(rects.iter().all(|r| r.min.y >= 400.0 && r.max.y <= 400.0 + size + 1e-3));
    }

    #[test]
    fn test_space_and_unknown_draw_nothing() {
        assert!(layout(" ", Vec2::ZERO, 7.0, Align::Left).is_empty());
        assert!(layout("#", Vec2::ZERO, 7.0, Align::Left).is_empty());
    }
}

//! Entities: the positioned, stateful units the choreography effects
//! animate, plus source-text parsing and procedural placement.

use crate::palette::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub id: usize,
    /// Home cell in the centered source block.
    pub origin: (i32, i32),
    /// Live position; rounded at composite time.
    pub pos: (f32, f32),
    pub visible: bool,
    pub glyph: char,
    pub color: Rgb,
    /// Index into the owning effect's group list (0 when ungrouped).
    pub group: usize,
}

impl Entity {
    pub fn new(id: usize, origin: (i32, i32), glyph: char, color: Rgb) -> Self {
        Self {
            id,
            origin,
            pos: (origin.0 as f32, origin.1 as f32),
            visible: true,
            glyph,
            color,
            group: 0,
        }
    }

    /// Snap back to the home cell.
    pub fn go_home(&mut self) {
        self.pos = (self.origin.0 as f32, self.origin.1 as f32);
    }

    /// Cell coordinates for compositing.
    pub fn cell(&self) -> (i32, i32) {
        (self.pos.0.round() as i32, self.pos.1.round() as i32)
    }
}

/// Parse a newline-delimited glyph block into entities centered on a
/// `w × h` canvas.
///
/// Whitespace cells are skipped. The block is centered horizontally by
/// its longest line and vertically by its line count; origins are clamped
/// into the canvas so a block larger than the canvas still yields
/// in-bounds entities. Empty text yields no entities.
pub fn parse_source_text(text: &str, w: usize, h: usize, color: Rgb) -> Vec<Entity> {
    let (w, h) = (w.max(1) as i32, h.max(1) as i32);
    let lines: Vec<&str> = text.lines().collect();
    let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
    if max_width == 0 {
        return Vec::new();
    }
    let left = (w - max_width) / 2;
    let top = (h - lines.len() as i32) / 2;

    let mut out = Vec::new();
    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x = (left + col as i32).clamp(0, w - 1);
            let y = (top + row as i32).clamp(0, h - 1);
            out.push(Entity::new(out.len(), (x, y), ch, color));
        }
    }
    out
}

/// Boolean mask (`w * h`, row-major) that is true on every cell the
/// centered source block occupies. Feeds the negative-space fire effect.
pub fn text_mask(text: &str, w: usize, h: usize) -> Vec<bool> {
    let (w, h) = (w.max(1), h.max(1));
    let mut mask = vec![false; w * h];
    for e in parse_source_text(text, w, h, Rgb::WHITE) {
        mask[e.origin.1 as usize * w + e.origin.0 as usize] = true;
    }
    mask
}

/// `n` uniformly random in-canvas points for particle/star placement.
pub fn scatter_points(rng: &mut fastrand::Rng, w: usize, h: usize, n: usize) -> Vec<(f32, f32)> {
    let (w, h) = (w.max(1), h.max(1));
    (0..n)
        .map(|_| (rng.usize(..w) as f32, rng.usize(..h) as f32))
        .collect()
}

//! Heat-diffusion cellular automaton behind the fire effects.
//!
//! Heat lives on a `width × height` grid (row 0 at the top). `step`
//! moves each cell's heat one row up with random horizontal drift and
//! random decay; it never creates heat, so without `feed` the field cools
//! monotonically. The fire effects call `feed` every tick to keep the
//! bottom source row burning.

use crate::palette::Rgb;

/// Density ramp from background to the hottest core.
const GLYPH_RAMP: [char; 8] = [' ', '.', ':', '^', '*', '▒', '▓', '█'];

#[derive(Debug, Clone, Copy)]
pub struct HeatConfig {
    /// Upper bound for cell heat.
    pub hmax: u32,
    /// Fraction of top rows that reject incoming heat outright.
    pub hard_limit_frac: f32,
    /// Fraction of rows below the hard band where decay is increased.
    pub fade_frac: f32,
    /// Inclusive random decay range applied to every propagation.
    pub decay: (u32, u32),
    /// Additional decay inside the fade band.
    pub fade_extra_decay: u32,
    /// Inclusive horizontal drift range in columns (right-biased flicker).
    pub drift: (i32, i32),
    /// Heat below this renders as background (space, no color).
    pub min_render_heat: u32,
}

impl Default for HeatConfig {
    fn default() -> Self {
        Self {
            hmax: 64,
            hard_limit_frac: 0.10,
            fade_frac: 0.25,
            decay: (0, 3),
            fade_extra_decay: 6,
            drift: (-1, 2),
            min_render_heat: 2,
        }
    }
}

pub struct HeatField {
    w: usize,
    h: usize,
    cells: Vec<u32>,
    next: Vec<u32>,
    mask: Option<Vec<bool>>,
    cfg: HeatConfig,
    rng: fastrand::Rng,
}

impl HeatField {
    pub fn new(w: usize, h: usize, cfg: HeatConfig, seed: u64) -> Self {
        let (w, h) = (w.max(1), h.max(1));
        Self {
            w,
            h,
            cells: vec![0; w * h],
            next: vec![0; w * h],
            mask: None,
            cfg,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn config(&self) -> &HeatConfig {
        &self.cfg
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn heat(&self, x: usize, y: usize) -> u32 {
        if x < self.w && y < self.h {
            self.cells[y * self.w + x]
        } else {
            0
        }
    }

    /// Rows `0..hard_limit_rows()` never receive heat.
    pub fn hard_limit_rows(&self) -> usize {
        ((self.h as f32 * self.cfg.hard_limit_frac).ceil() as usize).min(self.h)
    }

    fn fade_limit_rows(&self) -> usize {
        let hard = self.hard_limit_rows();
        (hard + (self.h as f32 * self.cfg.fade_frac).ceil() as usize).min(self.h)
    }

    /// Masked cells never hold heat; `None` clears the mask. The mask must
    /// be `w * h` long or it is ignored.
    pub fn set_mask(&mut self, mask: Option<Vec<bool>>) {
        self.mask = match mask {
            Some(m) if m.len() == self.w * self.h => Some(m),
            _ => None,
        };
        self.apply_mask();
    }

    fn masked(&self, idx: usize) -> bool {
        self.mask.as_ref().is_some_and(|m| m[idx])
    }

    fn apply_mask(&mut self) {
        if let Some(mask) = &self.mask {
            for (c, &m) in self.cells.iter_mut().zip(mask.iter()) {
                if m {
                    *c = 0;
                }
            }
        }
    }

    /// Seed the bottom source row at a fixed value (clamped to `hmax`).
    pub fn seed_bottom(&mut self, value: u32) {
        let y = self.h - 1;
        let value = value.min(self.cfg.hmax);
        for x in 0..self.w {
            let idx = y * self.w + x;
            if !self.masked(idx) {
                self.cells[idx] = value;
            }
        }
    }

    /// Re-seed the bottom source row near `hmax` with per-cell jitter.
    pub fn feed(&mut self) {
        let y = self.h - 1;
        let jitter = self.cfg.hmax / 8;
        for x in 0..self.w {
            let idx = y * self.w + x;
            if self.masked(idx) {
                continue;
            }
            self.cells[idx] = self.cfg.hmax - self.rng.u32(0..=jitter.max(1));
        }
    }

    /// Advance diffusion by one tick. Heat only moves and decays; the
    /// total over the field never increases.
    pub fn step(&mut self) {
        self.next.fill(0);
        let hard = self.hard_limit_rows();
        let fade = self.fade_limit_rows();
        let (dmin, dmax) = self.cfg.decay;
        let (omin, omax) = self.cfg.drift;

        // Bottom-to-top so the source row settles before rows above it.
        for y in (1..self.h).rev() {
            for x in 0..self.w {
                let src = y * self.w + x;
                let heat = self.cells[src];
                if heat == 0 || self.masked(src) {
                    continue;
                }
                let ty = y - 1;
                if ty < hard {
                    continue;
                }
                let dx = self.rng.i32(omin..=omax);
                let tx = (x as i32 + dx).clamp(0, self.w as i32 - 1) as usize;
                let dst = ty * self.w + tx;
                if self.masked(dst) {
                    continue;
                }
                let mut decay = self.rng.u32(dmin..=dmax.max(dmin));
                if ty < fade {
                    decay += self.cfg.fade_extra_decay;
                }
                let val = heat.saturating_sub(decay);
                if val > self.next[dst] {
                    self.next[dst] = val;
                }
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.apply_mask();
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Destructive: discards all cells (and the mask) at the new size.
    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w.max(1);
        self.h = h.max(1);
        self.cells = vec![0; self.w * self.h];
        self.next = vec![0; self.w * self.h];
        self.mask = None;
    }

    /// Map heat to a density glyph; below the render threshold it is
    /// background space.
    pub fn glyph_for(&self, heat: u32) -> char {
        if heat < self.cfg.min_render_heat {
            return ' ';
        }
        let hmax = self.cfg.hmax.max(1);
        let idx = (heat.min(hmax) as usize * (GLYPH_RAMP.len() - 1)) / hmax as usize;
        GLYPH_RAMP[idx.min(GLYPH_RAMP.len() - 1)]
    }

    /// Map heat into the palette, `None` below the render threshold.
    pub fn color_for(&self, heat: u32, palette: &[Rgb]) -> Option<Rgb> {
        if heat < self.cfg.min_render_heat || palette.is_empty() {
            return None;
        }
        let hmax = self.cfg.hmax.max(1);
        let idx = (heat.min(hmax) as usize * (palette.len() - 1)) / hmax as usize;
        Some(palette[idx.min(palette.len() - 1)])
    }
}

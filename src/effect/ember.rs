//! Negative-space fire: the source text masks the heat field, so the
//! flames burn around the glyph silhouette and the message reads as a
//! dark cutout in the blaze.

use crate::canvas::Canvas;
use crate::effect::{Effect, EffectCtx};
use crate::heat::{HeatConfig, HeatField};
use crate::palette::Rgb;
use crate::scene::text_mask;

pub struct EmberTextEffect {
    field: HeatField,
    canvas: Canvas,
    palette: Vec<Rgb>,
    text: String,
}

impl EmberTextEffect {
    pub fn new(ctx: &EffectCtx) -> Self {
        let cfg = HeatConfig {
            // Let the flames climb higher so the cutout sits inside them.
            hard_limit_frac: 0.05,
            fade_frac: 0.15,
            ..HeatConfig::default()
        };
        let mut field = HeatField::new(ctx.w, ctx.h, cfg, ctx.seed);
        field.set_mask(Some(text_mask(&ctx.text, ctx.w, ctx.h)));
        Self {
            field,
            canvas: Canvas::new(ctx.w, ctx.h),
            palette: ctx.palette.clone(),
            text: ctx.text.clone(),
        }
    }
}

impl Effect for EmberTextEffect {
    fn name(&self) -> &'static str {
        "ember-text"
    }

    fn step(&mut self) {
        self.field.feed();
        self.field.step();
    }

    fn render(&mut self) -> String {
        self.canvas.clear();
        for y in 0..self.field.height() {
            for x in 0..self.field.width() {
                let h = self.field.heat(x, y);
                let ch = self.field.glyph_for(h);
                if ch != ' ' {
                    let fg = self.field.color_for(h, &self.palette);
                    self.canvas.set(x as i32, y as i32, ch, fg);
                }
            }
        }
        self.canvas.to_ansi()
    }

    fn reset(&mut self) {
        self.field.clear();
    }

    fn resize(&mut self, w: usize, h: usize) {
        self.field.resize(w, h);
        self.field
            .set_mask(Some(text_mask(&self.text, w.max(1), h.max(1))));
        self.canvas.resize(w, h);
    }
}

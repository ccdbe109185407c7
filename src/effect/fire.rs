//! Classic bottom-fed fire with a small hearth scene in front of it.

use crate::canvas::Canvas;
use crate::effect::{Effect, EffectCtx};
use crate::heat::{HeatConfig, HeatField};
use crate::palette::Rgb;

/// Foreground props that take turns at the hearth. Exactly one (or none)
/// is on screen at a time; the slot is the single owner of that state.
const PROPS: [&str; 2] = ["(\\____/)", "[~~~~]"];

const PROP_DWELL: (u32, u32) = (90, 240);
const PROP_GAP: (u32, u32) = (45, 150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PropSlot {
    Empty { cooldown: u32 },
    Occupied { prop: usize, ticks_left: u32 },
}

pub struct FireEffect {
    field: HeatField,
    canvas: Canvas,
    palette: Vec<Rgb>,
    slot: PropSlot,
    last_prop: usize,
    rng: fastrand::Rng,
}

impl FireEffect {
    pub fn new(ctx: &EffectCtx) -> Self {
        let mut rng = fastrand::Rng::with_seed(ctx.seed);
        let cooldown = rng.u32(PROP_GAP.0..=PROP_GAP.1);
        Self {
            field: HeatField::new(ctx.w, ctx.h, HeatConfig::default(), rng.u64(..)),
            canvas: Canvas::new(ctx.w, ctx.h),
            palette: ctx.palette.clone(),
            slot: PropSlot::Empty { cooldown },
            last_prop: PROPS.len() - 1,
            rng,
        }
    }

    fn step_prop_slot(&mut self) {
        self.slot = match self.slot {
            PropSlot::Empty { cooldown: 0 } => {
                // Alternate props so the same one never re-enters twice.
                let prop = (self.last_prop + 1) % PROPS.len();
                self.last_prop = prop;
                PropSlot::Occupied {
                    prop,
                    ticks_left: self.rng.u32(PROP_DWELL.0..=PROP_DWELL.1),
                }
            }
            PropSlot::Empty { cooldown } => PropSlot::Empty {
                cooldown: cooldown - 1,
            },
            PropSlot::Occupied { ticks_left: 0, .. } => PropSlot::Empty {
                cooldown: self.rng.u32(PROP_GAP.0..=PROP_GAP.1),
            },
            PropSlot::Occupied { prop, ticks_left } => PropSlot::Occupied {
                prop,
                ticks_left: ticks_left - 1,
            },
        };
    }
}

impl Effect for FireEffect {
    fn name(&self) -> &'static str {
        "fire"
    }

    fn step(&mut self) {
        self.field.feed();
        self.field.step();
        self.step_prop_slot();
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

        // Hearth prop sits just above the source row, drawn over the flames.
        if let PropSlot::Occupied { prop, .. } = self.slot {
            let sprite = PROPS[prop];
            let y = self.canvas.height() as i32 - 2;
            let fg = self.palette.first().copied();
            for (i, ch) in sprite.chars().enumerate() {
                self.canvas.set(1 + i as i32, y, ch, fg);
            }
        }
        self.canvas.to_ansi()
    }

    fn reset(&mut self) {
        self.field.clear();
        self.slot = PropSlot::Empty {
            cooldown: self.rng.u32(PROP_GAP.0..=PROP_GAP.1),
        };
    }

    fn resize(&mut self, w: usize, h: usize) {
        self.field.resize(w, h);
        self.canvas.resize(w, h);
    }
}

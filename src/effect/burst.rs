//! Explosion choreography: every character charges up to white, the
//! whole text detonates outward, and the debris arcs back into place.

use crate::canvas::Canvas;
use crate::effect::{Effect, EffectCtx};
use crate::interp::{gradient, lerp, Ease};
use crate::palette::Rgb;
use crate::phase::{PhaseMachine, PhaseSpec};
use crate::scene::{parse_source_text, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BurstPhase {
    Static,
    Charging,
    Exploding,
    TransitionBack,
    Hold,
}

const STATIC_TICKS: u32 = 40;
const EXPLODE_TICKS: u32 = 45;
const BACK_TICKS: u32 = 55;
const HOLD_TICKS: u32 = 140;

/// Ticks one entity spends brightening, after its stagger delay.
const CHARGE_TICKS: u32 = 18;
const CHARGE_STAGGER_MAX: u32 = 40;

struct Shard {
    charge_start: u32,
    /// Unit flight direction away from the text center.
    dir: (f32, f32),
    /// Flight distance in cells.
    reach: f32,
    back_start: (f32, f32),
}

pub struct BurstEffect {
    entities: Vec<Entity>,
    shards: Vec<Shard>,
    base_color: Rgb,
    machine: PhaseMachine<BurstPhase>,
    charge: Vec<Rgb>,
    trail: Vec<Rgb>,
    canvas: Canvas,
    text: String,
    rng: fastrand::Rng,
}

impl BurstEffect {
    pub fn new(ctx: &EffectCtx) -> Self {
        let mut rng = fastrand::Rng::with_seed(ctx.seed);
        let base_color = ctx.palette[ctx.palette.len() / 2];
        let entities = parse_source_text(&ctx.text, ctx.w, ctx.h, base_color);
        let shards = Self::build_shards(&entities, ctx.w, ctx.h, &mut rng);
        let bright = *ctx.palette.last().unwrap_or(&Rgb::WHITE);
        Self {
            entities,
            shards,
            base_color,
            machine: PhaseMachine::new(
                vec![
                    PhaseSpec::timed(BurstPhase::Static, STATIC_TICKS),
                    PhaseSpec::gated(BurstPhase::Charging),
                    PhaseSpec::timed(BurstPhase::Exploding, EXPLODE_TICKS),
                    PhaseSpec::timed(BurstPhase::TransitionBack, BACK_TICKS),
                    PhaseSpec::timed(BurstPhase::Hold, HOLD_TICKS),
                ],
                ctx.display_once,
            ),
            charge: gradient(&[base_color, bright, Rgb::WHITE], 12),
            trail: gradient(&ctx.palette, 16),
            canvas: Canvas::new(ctx.w, ctx.h),
            text: ctx.text.clone(),
            rng,
        }
    }

    fn build_shards(
        entities: &[Entity],
        w: usize,
        h: usize,
        rng: &mut fastrand::Rng,
    ) -> Vec<Shard> {
        let center = (w as f32 / 2.0, h as f32 / 2.0);
        entities
            .iter()
            .map(|e| {
                let dx = e.origin.0 as f32 - center.0;
                let dy = e.origin.1 as f32 - center.1;
                let len = (dx * dx + dy * dy).sqrt();
                let dir = if len < f32::EPSILON {
                    let a = rng.f32() * std::f32::consts::TAU;
                    (a.cos(), a.sin())
                } else {
                    (dx / len, dy / len)
                };
                Shard {
                    charge_start: rng.u32(0..=CHARGE_STAGGER_MAX),
                    dir,
                    reach: (w.min(h * 2) as f32) * (0.25 + rng.f32() * 0.35),
                    back_start: (e.origin.0 as f32, e.origin.1 as f32),
                }
            })
            .collect()
    }

    fn restart(&mut self) {
        for e in &mut self.entities {
            e.go_home();
            e.visible = true;
            e.color = self.base_color;
        }
    }

    fn charging_done(&self) -> bool {
        let now = self.machine.ticks_in_phase();
        self.shards
            .iter()
            .all(|s| now >= s.charge_start + CHARGE_TICKS)
    }
}

impl Effect for BurstEffect {
    fn name(&self) -> &'static str {
        "burst"
    }

    fn step(&mut self) {
        match self.machine.current() {
            BurstPhase::Static | BurstPhase::Hold => {}
            BurstPhase::Charging => {
                let now = self.machine.ticks_in_phase();
                let last = self.charge.len() - 1;
                for (e, s) in self.entities.iter_mut().zip(&self.shards) {
                    if now < s.charge_start {
                        continue;
                    }
                    let t = (now - s.charge_start) as f32 / CHARGE_TICKS as f32;
                    let idx = ((t.min(1.0) * last as f32) as usize).min(last);
                    e.color = self.charge[idx];
                }
                if self.charging_done() {
                    self.machine.advance();
                }
            }
            BurstPhase::Exploding => {
                let t = self.machine.ticks_in_phase() as f32 / EXPLODE_TICKS as f32;
                let eased = Ease::OutExpo.apply(t);
                let last = self.trail.len() - 1;
                // Hot at detonation, cooling along the flight.
                let color = self.trail[(((1.0 - t) * last as f32) as usize).min(last)];
                for (e, s) in self.entities.iter_mut().zip(&self.shards) {
                    let home = (e.origin.0 as f32, e.origin.1 as f32);
                    e.pos = (
                        home.0 + s.dir.0 * s.reach * eased,
                        // Halve vertical travel for cell aspect.
                        home.1 + s.dir.1 * s.reach * eased * 0.5,
                    );
                    e.color = color;
                }
            }
            BurstPhase::TransitionBack => {
                let t = self.machine.ticks_in_phase() as f32 / BACK_TICKS as f32;
                let eased = Ease::InOutCubic.apply(t);
                for (e, s) in self.entities.iter_mut().zip(&self.shards) {
                    let home = (e.origin.0 as f32, e.origin.1 as f32);
                    e.pos = lerp(s.back_start, home, eased);
                    e.color = e.color.mix(self.base_color, t);
                }
            }
        }
        if let Some(tr) = self.machine.tick() {
            if tr.looped {
                self.restart();
            }
            if tr.to == BurstPhase::TransitionBack {
                for (e, s) in self.entities.iter().zip(self.shards.iter_mut()) {
                    s.back_start = e.pos;
                }
            }
        }
    }

    fn render(&mut self) -> String {
        self.canvas.clear();
        for e in &self.entities {
            if e.visible {
                let (x, y) = e.cell();
                self.canvas.set(x, y, e.glyph, Some(e.color));
            }
        }
        self.canvas.to_ansi()
    }

    fn reset(&mut self) {
        self.machine.reset();
        self.restart();
    }

    fn resize(&mut self, w: usize, h: usize) {
        let (w, h) = (w.max(1), h.max(1));
        self.entities = parse_source_text(&self.text, w, h, self.base_color);
        self.shards = Self::build_shards(&self.entities, w, h, &mut self.rng);
        self.canvas.resize(w, h);
        self.machine.reset();
    }
}

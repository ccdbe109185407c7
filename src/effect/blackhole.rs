//! Consumption choreography: a singularity pulls characters in one by
//! one along curved paths, pulses while it holds them, then flings them
//! back out to reform the text.

use crate::canvas::Canvas;
use crate::effect::{Effect, EffectCtx};
use crate::interp::{bend_ctrl, gradient, quad_bezier, Ease};
use crate::palette::Rgb;
use crate::phase::{PhaseMachine, PhaseSpec};
use crate::scene::{parse_source_text, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HolePhase {
    Static,
    Collapse,
    Singularity,
    Eject,
    Hold,
}

const STATIC_TICKS: u32 = 40;
const SINGULARITY_TICKS: u32 = 60;
const EJECT_TICKS: u32 = 55;
const HOLD_TICKS: u32 = 140;

/// Ticks one entity spends travelling into the hole.
const PULL_TICKS: u32 = 30;
/// Upper bound for the random per-entity pull start stagger.
const STAGGER_MAX: u32 = 70;

const PULSE_GLYPHS: [char; 4] = ['*', '✦', '○', '●'];

struct Pull {
    start_tick: u32,
    ctrl: (f32, f32),
    eject_ctrl: (f32, f32),
}

pub struct BlackholeEffect {
    entities: Vec<Entity>,
    pulls: Vec<Pull>,
    base_color: Rgb,
    machine: PhaseMachine<HolePhase>,
    brighten: Vec<Rgb>,
    center: (f32, f32),
    canvas: Canvas,
    text: String,
    rng: fastrand::Rng,
}

impl BlackholeEffect {
    pub fn new(ctx: &EffectCtx) -> Self {
        let mut rng = fastrand::Rng::with_seed(ctx.seed);
        let base_color = ctx.palette[ctx.palette.len() / 2];
        let entities = parse_source_text(&ctx.text, ctx.w, ctx.h, base_color);
        let center = (ctx.w as f32 / 2.0, ctx.h as f32 / 2.0);
        let pulls = Self::build_pulls(&entities, center, &mut rng);
        Self {
            entities,
            pulls,
            base_color,
            machine: PhaseMachine::new(
                vec![
                    PhaseSpec::timed(HolePhase::Static, STATIC_TICKS),
                    PhaseSpec::gated(HolePhase::Collapse),
                    PhaseSpec::timed(HolePhase::Singularity, SINGULARITY_TICKS),
                    PhaseSpec::timed(HolePhase::Eject, EJECT_TICKS),
                    PhaseSpec::timed(HolePhase::Hold, HOLD_TICKS),
                ],
                ctx.display_once,
            ),
            brighten: gradient(&ctx.palette, 16),
            center,
            canvas: Canvas::new(ctx.w, ctx.h),
            text: ctx.text.clone(),
            rng,
        }
    }

    fn build_pulls(
        entities: &[Entity],
        center: (f32, f32),
        rng: &mut fastrand::Rng,
    ) -> Vec<Pull> {
        entities
            .iter()
            .map(|e| {
                let home = (e.origin.0 as f32, e.origin.1 as f32);
                let bend = (rng.f32() - 0.5) * 0.8;
                Pull {
                    start_tick: rng.u32(0..=STAGGER_MAX),
                    ctrl: bend_ctrl(home, center, bend),
                    eject_ctrl: bend_ctrl(center, home, (rng.f32() - 0.5) * 0.8),
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
        self.pulls = Self::build_pulls(&self.entities, self.center, &mut self.rng);
    }

    fn all_consumed(&self) -> bool {
        self.entities.iter().all(|e| !e.visible)
    }
}

impl Effect for BlackholeEffect {
    fn name(&self) -> &'static str {
        "blackhole"
    }

    fn step(&mut self) {
        match self.machine.current() {
            HolePhase::Static | HolePhase::Hold => {}
            HolePhase::Collapse => {
                let now = self.machine.ticks_in_phase();
                for (e, p) in self.entities.iter_mut().zip(&self.pulls) {
                    if !e.visible || now < p.start_tick {
                        continue;
                    }
                    let t = (now - p.start_tick) as f32 / PULL_TICKS as f32;
                    if t >= 1.0 {
                        e.visible = false;
                        continue;
                    }
                    let home = (e.origin.0 as f32, e.origin.1 as f32);
                    e.pos = quad_bezier(home, p.ctrl, self.center, Ease::InExpo.apply(t));
                }
                if self.all_consumed() {
                    self.machine.advance();
                }
            }
            HolePhase::Singularity => {}
            HolePhase::Eject => {
                let t = self.machine.ticks_in_phase() as f32 / EJECT_TICKS as f32;
                let eased = Ease::OutExpo.apply(t);
                let last = self.brighten.len() - 1;
                let color = self.brighten[((t * last as f32) as usize).min(last)];
                for (e, p) in self.entities.iter_mut().zip(&self.pulls) {
                    let home = (e.origin.0 as f32, e.origin.1 as f32);
                    e.visible = true;
                    e.pos = quad_bezier(self.center, p.eject_ctrl, home, eased);
                    e.color = color;
                }
            }
        }
        if let Some(tr) = self.machine.tick() {
            if tr.looped {
                self.restart();
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
        // The singularity itself: a pulsing mote that grows with what it
        // has swallowed.
        let phase = self.machine.current();
        if matches!(phase, HolePhase::Collapse | HolePhase::Singularity) {
            let pulse = (self.machine.ticks_in_phase() / 6) as usize % PULSE_GLYPHS.len();
            let bright = *self.brighten.last().unwrap_or(&Rgb::WHITE);
            self.canvas.set(
                self.center.0.round() as i32,
                self.center.1.round() as i32,
                PULSE_GLYPHS[pulse],
                Some(bright),
            );
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
        self.center = (w as f32 / 2.0, h as f32 / 2.0);
        self.pulls = Self::build_pulls(&self.entities, self.center, &mut self.rng);
        self.canvas.resize(w, h);
        self.machine.reset();
    }
}

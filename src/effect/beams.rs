//! Directional reveal: beams sweep the source text in along rows,
//! columns, or diagonals, each with a bright head and a fading trail,
//! then a gradient wipe brightens the settled text.

use crate::canvas::Canvas;
use crate::effect::{Effect, EffectCtx};
use crate::group::{BeamRole, GroupAxis, GroupConfig, GroupScheduler};
use crate::interp::gradient;
use crate::palette::Rgb;
use crate::phase::{PhaseMachine, PhaseSpec};
use crate::scene::{parse_source_text, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BeamPhase {
    Reveal,
    Brighten,
    Hold,
}

/// Head first, then progressively fainter trail variants.
const BEAM_GLYPHS: [char; 4] = ['█', '▓', '▒', '░'];

const BRIGHTEN_TICKS: u32 = 36;
const HOLD_TICKS: u32 = 150;

pub struct BeamsEffect {
    entities: Vec<Entity>,
    base: Vec<(char, Rgb)>,
    scheduler: GroupScheduler,
    machine: PhaseMachine<BeamPhase>,
    wipe: Vec<Rgb>,
    canvas: Canvas,
    palette: Vec<Rgb>,
    text: String,
    rng: fastrand::Rng,
}

impl BeamsEffect {
    pub fn new(ctx: &EffectCtx) -> Self {
        let mut rng = fastrand::Rng::with_seed(ctx.seed);
        let base_color = ctx.palette[ctx.palette.len() / 2];
        let mut entities = parse_source_text(&ctx.text, ctx.w, ctx.h, base_color);
        for e in &mut entities {
            e.visible = false;
        }
        let base = entities.iter().map(|e| (e.glyph, e.color)).collect();
        let axis = match rng.usize(..3) {
            0 => GroupAxis::Row,
            1 => GroupAxis::Column,
            _ => GroupAxis::Diagonal,
        };
        let scheduler = GroupScheduler::build(&mut entities, axis, GroupConfig::default(), &mut rng);
        let machine = PhaseMachine::new(
            vec![
                PhaseSpec::gated(BeamPhase::Reveal),
                PhaseSpec::timed(BeamPhase::Brighten, BRIGHTEN_TICKS),
                PhaseSpec::timed(BeamPhase::Hold, HOLD_TICKS),
            ],
            ctx.display_once,
        );
        Self {
            entities,
            base,
            scheduler,
            machine,
            wipe: gradient(&ctx.palette, 24),
            canvas: Canvas::new(ctx.w, ctx.h),
            palette: ctx.palette.clone(),
            text: ctx.text.clone(),
            rng,
        }
    }

    fn restart(&mut self) {
        for (e, &(ch, color)) in self.entities.iter_mut().zip(&self.base) {
            e.visible = false;
            e.glyph = ch;
            e.color = color;
            e.go_home();
        }
        self.scheduler.reset();
    }

    fn apply_beam_roles(&mut self) {
        let beam_len = self.scheduler.config().beam_len;
        let bright = *self.palette.last().unwrap_or(&Rgb::WHITE);
        for g in self.scheduler.groups() {
            for i in 0..g.revealed_count() {
                let id = g.members[i];
                let (base_ch, base_color) = self.base[id];
                let e = &mut self.entities[id];
                match g.role_of(i, beam_len) {
                    BeamRole::Head => {
                        e.glyph = BEAM_GLYPHS[0];
                        e.color = bright;
                    }
                    BeamRole::Trail(k) => {
                        e.glyph = BEAM_GLYPHS[k.min(BEAM_GLYPHS.len() - 1)];
                        e.color = bright.scale(1.0 - 0.22 * k as f32);
                    }
                    BeamRole::Settled => {
                        e.glyph = base_ch;
                        e.color = base_color;
                    }
                }
            }
        }
    }

    fn apply_brighten(&mut self, t: f32) {
        let w = self.canvas.width().max(1) as f32;
        let last = self.wipe.len() - 1;
        for e in &mut self.entities {
            let xfrac = e.origin.0 as f32 / w;
            // Wipe front moves left to right a little ahead of `t`.
            let p = (t * 1.25 - xfrac * 0.25).clamp(0.0, 1.0);
            e.color = self.wipe[((p * last as f32) as usize).min(last)];
        }
    }
}

impl Effect for BeamsEffect {
    fn name(&self) -> &'static str {
        "beams"
    }

    fn step(&mut self) {
        match self.machine.current() {
            BeamPhase::Reveal => {
                let revealed = self.scheduler.tick(&mut self.rng);
                for id in revealed {
                    self.entities[id].visible = true;
                }
                self.apply_beam_roles();
                if self.scheduler.all_complete() {
                    self.machine.advance();
                }
            }
            BeamPhase::Brighten => {
                let t = self.machine.ticks_in_phase() as f32 / BRIGHTEN_TICKS as f32;
                self.apply_brighten(t);
            }
            BeamPhase::Hold => {}
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
        self.canvas.to_ansi()
    }

    fn reset(&mut self) {
        self.machine.reset();
        self.restart();
    }

    fn resize(&mut self, w: usize, h: usize) {
        let base_color = self.palette[self.palette.len() / 2];
        let mut entities = parse_source_text(&self.text, w.max(1), h.max(1), base_color);
        for e in &mut entities {
            e.visible = false;
        }
        self.base = entities.iter().map(|e| (e.glyph, e.color)).collect();
        let axis = match self.rng.usize(..3) {
            0 => GroupAxis::Row,
            1 => GroupAxis::Column,
            _ => GroupAxis::Diagonal,
        };
        self.scheduler =
            GroupScheduler::build(&mut entities, axis, GroupConfig::default(), &mut self.rng);
        self.entities = entities;
        self.canvas.resize(w, h);
        self.machine.reset();
    }
}

use crate::config::{Config, EffectKind};
use crate::effect::{make_effects, Effect, EffectCtx};
use crate::palette::palette_colors;
use crate::terminal::TerminalGuard;
use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io::Write;
use std::time::{Duration, Instant};

const DEFAULT_TEXT: &str = "\
█▀█ █ █ █▀█ █▀█
█▀▀ ▀█▀ █▀▄ █ █
▀    ▀  ▀ ▀ ▀▀▀";

/// Rows reserved under the effect for the status line.
const HUD_ROWS: u16 = 1;

fn effect_index(kind: EffectKind) -> usize {
    // Registry order in `make_effects`.
    match kind {
        EffectKind::Fire => 0,
        EffectKind::EmberText => 1,
        EffectKind::Beams => 2,
        EffectKind::Scatter => 3,
        EffectKind::Vortex => 4,
        EffectKind::Blackhole => 5,
        EffectKind::Burst => 6,
    }
}

fn resolve_text(cfg: &Config) -> anyhow::Result<String> {
    if let Some(path) = &cfg.text_file {
        return std::fs::read_to_string(path).with_context(|| format!("read text file {path}"));
    }
    Ok(cfg.text.clone().unwrap_or_else(|| DEFAULT_TEXT.to_string()))
}

fn effect_area(cfg: &Config) -> anyhow::Result<(usize, usize)> {
    let (cols, rows) = crossterm::terminal::size().context("query terminal size")?;
    let w = cfg.width.unwrap_or(cols).max(1) as usize;
    let h = cfg.height.unwrap_or(rows.saturating_sub(HUD_ROWS)).max(1) as usize;
    Ok((w, h))
}

pub fn run(cfg: Config) -> anyhow::Result<()> {
    let text = resolve_text(&cfg)?;
    let seed = cfg.seed.unwrap_or_else(|| fastrand::u64(..));
    let (w, h) = effect_area(&cfg)?;

    let ctx = EffectCtx::new(w, h, seed, text, palette_colors(cfg.theme)).display_once(cfg.once);
    let mut effects: Vec<Box<dyn Effect>> = make_effects(&ctx);
    let mut active = effect_index(cfg.effect).min(effects.len() - 1);

    let guard = TerminalGuard::new()?;
    let mut out = TerminalGuard::stdout();

    let target = Duration::from_secs_f32(1.0 / cfg.fps.max(1) as f32);
    let mut paused = false;
    let mut frames: u64 = 0;
    let run_start = Instant::now();

    loop {
        let frame_start = Instant::now();
        let mut quit = false;

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) if k.kind != KeyEventKind::Release => {
                    if k.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(k.code, KeyCode::Char('c'))
                    {
                        quit = true;
                        continue;
                    }
                    match k.code {
                        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => quit = true,
                        KeyCode::Char('n') | KeyCode::Right => {
                            active = (active + 1) % effects.len();
                            effects[active].reset();
                        }
                        KeyCode::Char('p') | KeyCode::Left => {
                            active = (active + effects.len() - 1) % effects.len();
                            effects[active].reset();
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => effects[active].reset(),
                        KeyCode::Char(' ') => paused = !paused,
                        _ => {}
                    }
                }
                Event::Resize(_, _) => {
                    let (nw, nh) = effect_area(&cfg)?;
                    for e in effects.iter_mut() {
                        e.resize(nw, nh);
                    }
                    out.write_all(b"\x1b[2J")?;
                }
                _ => {}
            }
        }
        if quit {
            break;
        }

        if !paused {
            effects[active].step();
            frames += 1;
        }
        let frame = effects[active].render();

        if cfg.sync_updates {
            out.write_all(b"\x1b[?2026h")?;
        }
        out.write_all(b"\x1b[H")?;
        // Raw mode: line feeds alone don't return the carriage.
        for (row, line) in frame.split('\n').enumerate() {
            if row > 0 {
                out.write_all(b"\r\n")?;
            }
            out.write_all(line.as_bytes())?;
        }

        let fps_now = frames as f32 / run_start.elapsed().as_secs_f32().max(0.001);
        write!(
            out,
            "\r\n\x1b[0m\x1b[2K {} | {:.0} fps | seed {} {}",
            effects[active].name(),
            fps_now.min(cfg.fps as f32),
            seed,
            if paused { "| paused" } else { "" }
        )?;
        if cfg.sync_updates {
            out.write_all(b"\x1b[?2026l")?;
        }
        out.flush()?;

        let elapsed = frame_start.elapsed();
        if elapsed < target {
            std::thread::sleep(target - elapsed);
        }
    }

    drop(guard);
    Ok(())
}

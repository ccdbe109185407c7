//! Layered cell compositor and ANSI serialization.
//!
//! Effects draw into a blank grid every frame (painter's algorithm: a
//! later write simply overwrites the cell), then `to_ansi` walks each row
//! batching consecutive same-color cells into one styled run so the
//! emitted frame carries the minimum number of style changes.

use crate::palette::Rgb;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Rgb>,
}

impl Cell {
    pub const BLANK: Cell = Cell { ch: ' ', fg: None };
}

pub struct Canvas {
    w: usize,
    h: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        let (w, h) = (w.max(1), h.max(1));
        Self {
            w,
            h,
            cells: vec![Cell::BLANK; w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Destructive resize; all cells reset to blank.
    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w.max(1);
        self.h = h.max(1);
        self.cells = vec![Cell::BLANK; self.w * self.h];
    }

    /// Out-of-bounds writes are dropped silently.
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Rgb>) {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return;
        }
        self.cells[y as usize * self.w + x as usize] = Cell { ch, fg };
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.w && y < self.h {
            self.cells[y * self.w + x]
        } else {
            Cell::BLANK
        }
    }

    /// Serialize to styled rows joined by `\n`.
    ///
    /// Each row emits one `\x1b[38;2;r;g;bm` marker per color run and a
    /// single reset when a colored run gives way to plain cells; the frame
    /// ends with one reset.
    pub fn to_ansi(&self) -> String {
        let mut out = String::with_capacity(self.w * self.h + self.h * 8);
        for y in 0..self.h {
            if y > 0 {
                out.push('\n');
            }
            let mut cur: Option<Rgb> = None;
            for x in 0..self.w {
                let cell = self.cells[y * self.w + x];
                if cell.fg != cur {
                    match cell.fg {
                        Some(c) => {
                            let _ = write!(out, "\x1b[38;2;{};{};{}m", c.r, c.g, c.b);
                        }
                        None => out.push_str("\x1b[0m"),
                    }
                    cur = cell.fg;
                }
                out.push(cell.ch);
            }
            if cur.is_some() {
                out.push_str("\x1b[0m");
            }
        }
        out
    }
}

use std::fmt;

/// 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear blend, `t` clamped to `[0,1]`.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    pub fn scale(self, f: f32) -> Rgb {
        let f = f.clamp(0.0, 1.0);
        Rgb::new(
            (self.r as f32 * f) as u8,
            (self.g as f32 * f) as u8,
            (self.b as f32 * f) as u8,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
    BadHex(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color literal"),
            Self::BadHex(s) => write!(f, "invalid hex color '{s}'"),
        }
    }
}

impl std::error::Error for PaletteError {}

/// Parse `#rrggbb` (leading `#` optional, case-insensitive).
pub fn parse_hex(s: &str) -> Result<Rgb, PaletteError> {
    let t = s.trim().trim_start_matches('#');
    if t.is_empty() {
        return Err(PaletteError::Empty);
    }
    if t.len() != 6 || !t.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PaletteError::BadHex(s.to_string()));
    }
    let byte = |i: usize| u8::from_str_radix(&t[i..i + 2], 16).unwrap_or(0);
    Ok(Rgb::new(byte(0), byte(2), byte(4)))
}

/// Ordered low-to-high intensity color list for one theme.
///
/// The first entries color dim cells, the last color the hottest; effects
/// also use the list as gradient stops.
pub fn palette_colors(theme: Theme) -> Vec<Rgb> {
    match theme {
        Theme::Fire => vec![
            Rgb::new(30, 6, 2),
            Rgb::new(120, 24, 4),
            Rgb::new(200, 72, 8),
            Rgb::new(246, 146, 20),
            Rgb::new(255, 212, 80),
            Rgb::new(255, 252, 210),
        ],
        Theme::Aurora => vec![
            Rgb::new(6, 18, 36),
            Rgb::new(14, 72, 96),
            Rgb::new(20, 150, 130),
            Rgb::new(96, 220, 160),
            Rgb::new(200, 255, 220),
        ],
        Theme::Neon => vec![
            Rgb::new(40, 0, 60),
            Rgb::new(140, 0, 170),
            Rgb::new(255, 0, 180),
            Rgb::new(0, 230, 255),
            Rgb::new(230, 255, 255),
        ],
        Theme::Ember => vec![
            Rgb::new(20, 10, 8),
            Rgb::new(90, 30, 12),
            Rgb::new(180, 60, 16),
            Rgb::new(255, 120, 40),
            Rgb::new(255, 200, 120),
        ],
        Theme::Mono => vec![
            Rgb::new(40, 40, 40),
            Rgb::new(110, 110, 110),
            Rgb::new(180, 180, 180),
            Rgb::new(255, 255, 255),
        ],
    }
}

/// Returns the theme colors, or a single-white fallback for an empty list.
///
/// Palettes are always non-empty here, but external callers may construct
/// their own stop lists; the fallback keeps downstream index math safe.
pub fn colors_or_default(colors: Vec<Rgb>) -> Vec<Rgb> {
    if colors.is_empty() {
        vec![Rgb::WHITE]
    } else {
        colors
    }
}

pub use crate::config::Theme;

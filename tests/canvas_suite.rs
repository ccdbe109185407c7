use pyroglyph::canvas::{Canvas, Cell};
use pyroglyph::palette::Rgb;

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// ── Grid behavior ──────────────────────────────────────────────────────────

#[test]
fn new_canvas_is_blank() {
    let c = Canvas::new(5, 3);
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(c.get(x, y), Cell::BLANK);
        }
    }
}

#[test]
fn later_draws_overwrite_earlier_ones() {
    let mut c = Canvas::new(4, 4);
    c.set(1, 1, 'a', Some(Rgb::new(1, 1, 1)));
    c.set(1, 1, 'b', Some(Rgb::new(2, 2, 2)));
    assert_eq!(c.get(1, 1).ch, 'b');
    assert_eq!(c.get(1, 1).fg, Some(Rgb::new(2, 2, 2)));
}

#[test]
fn out_of_bounds_writes_are_dropped() {
    let mut c = Canvas::new(3, 3);
    c.set(-1, 0, 'x', None);
    c.set(0, -5, 'x', None);
    c.set(3, 0, 'x', None);
    c.set(0, 99, 'x', None);
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(c.get(x, y), Cell::BLANK);
        }
    }
}

#[test]
fn clear_restores_a_painted_canvas() {
    let mut c = Canvas::new(3, 2);
    c.set(0, 0, 'x', Some(Rgb::WHITE));
    c.clear();
    assert_eq!(c.get(0, 0), Cell::BLANK);
}

#[test]
fn resize_is_destructive_and_clamped() {
    let mut c = Canvas::new(6, 6);
    c.set(2, 2, 'x', Some(Rgb::WHITE));
    c.resize(3, 2);
    assert_eq!((c.width(), c.height()), (3, 2));
    assert_eq!(c.get(2, 1), Cell::BLANK);
    c.resize(0, 0);
    assert_eq!((c.width(), c.height()), (1, 1));
}

// ── Serialization ──────────────────────────────────────────────────────────

#[test]
fn blank_canvas_serializes_to_plain_space_rows() {
    let c = Canvas::new(4, 3);
    let s = c.to_ansi();
    let rows: Vec<&str> = s.split('\n').collect();
    assert_eq!(rows.len(), 3);
    for row in rows {
        assert_eq!(row, "    ");
    }
}

#[test]
fn one_color_run_per_row_emits_one_style_marker() {
    let mut c = Canvas::new(6, 1);
    for x in 0..6 {
        c.set(x, 0, '#', Some(Rgb::new(10, 20, 30)));
    }
    let s = c.to_ansi();
    assert_eq!(count_occurrences(&s, "\x1b[38;2;10;20;30m"), 1);
    assert_eq!(count_occurrences(&s, "######"), 1);
    assert!(s.ends_with("\x1b[0m"), "colored row must reset at the end");
}

#[test]
fn color_changes_split_runs_minimally() {
    let red = Rgb::new(255, 0, 0);
    let blue = Rgb::new(0, 0, 255);
    let mut c = Canvas::new(6, 1);
    for x in 0..3 {
        c.set(x, 0, 'r', Some(red));
    }
    for x in 3..6 {
        c.set(x, 0, 'b', Some(blue));
    }
    let s = c.to_ansi();
    assert_eq!(count_occurrences(&s, "\x1b[38;2;255;0;0m"), 1);
    assert_eq!(count_occurrences(&s, "\x1b[38;2;0;0;255m"), 1);
    assert!(s.contains("rrr"));
    assert!(s.contains("bbb"));
}

#[test]
fn uncolored_gap_resets_once_then_recolors() {
    let red = Rgb::new(200, 0, 0);
    let mut c = Canvas::new(5, 1);
    c.set(0, 0, 'a', Some(red));
    c.set(1, 0, 'a', Some(red));
    // cells 2 stays blank
    c.set(3, 0, 'a', Some(red));
    c.set(4, 0, 'a', Some(red));
    let s = c.to_ansi();
    // run, reset, run, final reset
    assert_eq!(count_occurrences(&s, "\x1b[38;2;200;0;0m"), 2);
    assert_eq!(count_occurrences(&s, "\x1b[0m"), 2);
}

#[test]
fn rows_join_with_single_newlines() {
    let c = Canvas::new(2, 4);
    let s = c.to_ansi();
    assert_eq!(count_occurrences(&s, "\n"), 3);
    assert!(!s.contains("\n\n") || s.split('\n').all(|r| !r.is_empty()));
}

#[test]
fn glyphs_land_at_their_coordinates() {
    let mut c = Canvas::new(3, 2);
    c.set(2, 1, 'Z', None);
    let s = c.to_ansi();
    let rows: Vec<&str> = s.split('\n').collect();
    assert_eq!(rows[1].chars().last(), Some('Z'));
}

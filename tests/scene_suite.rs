use pyroglyph::palette::Rgb;
use pyroglyph::scene::{parse_source_text, scatter_points, text_mask, Entity};

// ── Parsing and centering ──────────────────────────────────────────────────

#[test]
fn two_glyphs_center_on_a_ten_by_three_canvas() {
    let entities = parse_source_text("AB", 10, 3, Rgb::WHITE);
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].origin, (4, 1));
    assert_eq!(entities[1].origin, (5, 1));
    assert_eq!(entities[0].glyph, 'A');
    assert_eq!(entities[1].glyph, 'B');
}

#[test]
fn whitespace_never_becomes_an_entity() {
    let entities = parse_source_text("A B\n\n  C", 20, 10, Rgb::WHITE);
    assert_eq!(entities.len(), 3);
    assert!(entities.iter().all(|e| !e.glyph.is_whitespace()));
}

#[test]
fn block_centers_by_longest_line_and_line_count() {
    // Longest line is 6 wide, 3 lines tall.
    let entities = parse_source_text("ABCDEF\nXY\nZ", 20, 9, Rgb::WHITE);
    let left = entities.iter().map(|e| e.origin.0).min().unwrap();
    let top = entities.iter().map(|e| e.origin.1).min().unwrap();
    assert_eq!(left, (20 - 6) / 2);
    assert_eq!(top, (9 - 3) / 2);
    // Shorter lines keep their column offset inside the block.
    let z = entities.iter().find(|e| e.glyph == 'Z').unwrap();
    assert_eq!(z.origin.0, (20 - 6) / 2);
}

#[test]
fn empty_text_yields_no_entities() {
    assert!(parse_source_text("", 10, 10, Rgb::WHITE).is_empty());
    assert!(parse_source_text("   \n\t\n ", 10, 10, Rgb::WHITE).is_empty());
}

#[test]
fn oversized_block_clamps_into_the_canvas() {
    let entities = parse_source_text("ABCDEFGHIJ\nKLMNOPQRST", 4, 1, Rgb::WHITE);
    assert!(!entities.is_empty());
    for e in &entities {
        assert!((0..4).contains(&e.origin.0), "x out of bounds: {:?}", e.origin);
        assert_eq!(e.origin.1, 0);
    }
}

#[test]
fn ids_are_dense_and_ordered() {
    let entities = parse_source_text("AB\nCD", 10, 10, Rgb::WHITE);
    for (i, e) in entities.iter().enumerate() {
        assert_eq!(e.id, i);
    }
}

// ── Entity basics ──────────────────────────────────────────────────────────

#[test]
fn go_home_snaps_position_back_to_origin() {
    let mut e = Entity::new(0, (3, 7), 'x', Rgb::WHITE);
    e.pos = (19.4, 2.6);
    e.go_home();
    assert_eq!(e.pos, (3.0, 7.0));
    assert_eq!(e.cell(), (3, 7));
}

#[test]
fn cell_rounds_to_nearest() {
    let mut e = Entity::new(0, (0, 0), 'x', Rgb::WHITE);
    e.pos = (1.6, 2.4);
    assert_eq!(e.cell(), (2, 2));
}

// ── Mask ───────────────────────────────────────────────────────────────────

#[test]
fn text_mask_marks_exactly_the_glyph_cells() {
    let w = 10;
    let mask = text_mask("AB", w, 3);
    let marked: Vec<usize> = mask
        .iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i))
        .collect();
    assert_eq!(marked, vec![w + 4, w + 5]);
}

#[test]
fn empty_text_mask_is_all_clear() {
    assert!(text_mask("", 8, 8).iter().all(|&m| !m));
}

// ── Procedural placement ───────────────────────────────────────────────────

#[test]
fn scatter_points_stay_in_bounds_and_are_deterministic() {
    let mut rng = fastrand::Rng::with_seed(99);
    let pts = scatter_points(&mut rng, 40, 12, 500);
    assert_eq!(pts.len(), 500);
    for &(x, y) in &pts {
        assert!((0.0..40.0).contains(&x));
        assert!((0.0..12.0).contains(&y));
    }

    let mut rng2 = fastrand::Rng::with_seed(99);
    assert_eq!(pts, scatter_points(&mut rng2, 40, 12, 500));
}

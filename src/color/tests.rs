//! Unit tests for the color module

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn selector(seed: u64) -> ColorSelector<'static, StdRng> {
    ColorSelector::new(
        ColorTable::global(),
        SelectOptions::default(),
        StdRng::seed_from_u64(seed),
    )
}

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap()
}

#[test]
fn test_luminance_extremes() {
    assert_eq!(relative_luminance(Color::BLACK), 0.0);
    let white = relative_luminance(Color::WHITE);
    assert!((white - 1.0).abs() < 1e-12, "white should be 1.0, got {}", white);
}

#[test]
fn test_luminance_in_unit_range() {
    for entry in ColorTable::global().entries() {
        let l = relative_luminance(entry.color);
        assert!((0.0..=1.0 + 1e-12).contains(&l), "{} out of range: {}", entry.name, l);
    }
}

#[test]
fn test_luminance_uses_055_offset() {
    // #808080: ((0.50196 + 0.055) / 1.055)^2.4 = 0.21586
    let l = relative_luminance(hex("#808080"));
    assert!((l - 0.215_86).abs() < 1e-4, "gray luminance was {}", l);
}

#[test]
fn test_luminance_linear_segment() {
    // 10/255 = 0.0392 is below the 0.04045 knee
    let l = relative_luminance(Color::rgb(10, 10, 10));
    let expected = (10.0 / 255.0) / 12.92;
    assert!((l - expected).abs() < 1e-12);
}

#[test]
fn test_contrast_symmetry_and_identity() {
    let a = hex("#336699");
    let b = hex("#ffcc00");
    assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    assert_eq!(contrast_ratio(a, a), 1.0);
    assert_eq!(contrast_ratio(Color::BLACK, Color::BLACK), 1.0);
}

#[test]
fn test_contrast_black_on_white() {
    let c = contrast_ratio(Color::BLACK, Color::WHITE);
    assert!((c - 1.0 / 21.0).abs() < 1e-9, "got {}", c);
    assert!((wcag_ratio(Color::BLACK, Color::WHITE) - 21.0).abs() < 1e-9);
}

#[test]
fn test_distance_properties() {
    let a = hex("#102030");
    let b = hex("#a0b0c0");
    assert_eq!(euclidean_distance(a, a), 0.0);
    assert_eq!(euclidean_distance(a, b), euclidean_distance(b, a));

    let max = euclidean_distance(Color::BLACK, Color::WHITE);
    assert!((max - 3f64.sqrt() * 255.0).abs() < 1e-9, "got {}", max);
    assert!((MAX_DISTANCE - max).abs() < 1e-9);
}

#[test]
fn test_anti_color_involution() {
    for entry in ColorTable::global().entries() {
        assert_eq!(anti_color(anti_color(entry.color)), entry.color);
    }
    assert_eq!(anti_color(hex("#123456")), hex("#edcba9"));
    assert_eq!(anti_color_hex("#000000").unwrap(), Color::WHITE);
}

#[test]
fn test_anti_color_rejects_malformed() {
    assert_eq!(
        anti_color_hex("notacolor"),
        Err(ColorError::MalformedHex("notacolor".into()))
    );
    assert!(anti_color_hex("#12345").is_err());
    assert!(anti_color_hex("#12345g").is_err());
}

#[test]
fn test_metrics_hex() {
    let m = color_metrics_hex("#000000", "#ffffff").unwrap();
    assert!((m.distance - MAX_DISTANCE).abs() < 1e-9);
    assert!(color_metrics_hex("#000000", "white").is_err());
}

#[test]
fn test_color_display_lowercase() {
    assert_eq!(hex("#ABCDEF").to_string(), "#abcdef");
    assert_eq!("00ff7f".parse::<Color>().unwrap().to_string(), "#00ff7f");
}

#[test]
fn test_parse_color_forms() {
    let table = ColorTable::global();
    assert_eq!(table.parse_color("#ABCDEF"), table.parse_color("abcdef"));
    assert_eq!(table.parse_color("abcdef"), (hex("#abcdef"), true));
    assert_eq!(table.parse_color("abc"), (hex("#aabbcc"), true));
    assert_eq!(table.parse_color("#F0c"), (hex("#ff00cc"), true));
    assert_eq!(table.parse_color("Tomato"), (hex("#ff6347"), true));
    assert_eq!(table.parse_color("peach fuzz"), (hex("#f87c56"), true));
}

#[test]
fn test_parse_color_default_gray() {
    let table = ColorTable::global();
    let (color, ok) = table.parse_color("totallyinvalid");
    assert!(!ok);
    assert_eq!(color, Color::DEFAULT_GRAY);
    assert_eq!(color.to_string(), "#888888");
    assert_eq!(
        table.resolve("totallyinvalid"),
        Err(ColorError::NotFound("totallyinvalid".into()))
    );
}

#[test]
fn test_lookup_case_insensitive() {
    let table = ColorTable::global();
    assert_eq!(table.lookup("WHITE"), Some(Color::WHITE));
    assert_eq!(table.lookup("Living Coral"), Some(hex("#ff6f61")));
    assert_eq!(table.lookup("turquoise"), None);
}

#[test]
fn test_shared_hex_values_allowed() {
    let table = ColorTable::global();
    assert_eq!(table.lookup("gray"), table.lookup("grey"));
    assert_eq!(table.lookup("aqua"), table.lookup("cyan"));
}

#[test]
fn test_global_table_built_once() {
    let first: *const ColorTable = ColorTable::global();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| ColorTable::global() as *const ColorTable as usize))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), first as usize);
    }
    assert_eq!(ColorTable::global().len(), ColorTable::builtin().unwrap().len());
}

#[test]
fn test_duplicate_names_rejected() {
    let err = ColorTable::from_pairs(&[("red", "#ff0000"), ("red", "#ee0000")]).unwrap_err();
    assert!(matches!(err, ColorError::InvariantViolation(_)));
    assert!(ColorTable::from_pairs(&[]).is_err());
    assert!(ColorTable::from_pairs(&[("odd", "#zzzzzz")]).is_err());
}

#[test]
fn test_random_named_is_table_entry() {
    let mut sel = selector(7);
    for _ in 0..50 {
        let named = sel.random_named();
        assert_eq!(ColorTable::global().lookup(named.name), Some(named.color));
    }
}

#[test]
fn test_random_color_respects_brightness() {
    let mut sel = ColorSelector::new(
        ColorTable::global(),
        SelectOptions {
            brightness: 600..=765,
            ..SelectOptions::default()
        },
        StdRng::seed_from_u64(3),
    );
    for _ in 0..20 {
        let c = sel.random_color();
        assert!(c.brightness() >= 600, "{} too dark", c);
    }
}

fn banded(brightness: std::ops::RangeInclusive<u16>, seed: u64) -> ColorSelector<'static, StdRng> {
    ColorSelector::new(
        ColorTable::global(),
        SelectOptions {
            brightness,
            ..SelectOptions::default()
        },
        StdRng::seed_from_u64(seed),
    )
}

#[test]
fn test_narrow_band_invents_first_draw() {
    let mut sel = banded(0..=30, 1);
    for _ in 0..200 {
        let s = sel.invent_color(Color::WHITE, 0, 0);
        assert_eq!(s.outcome, Outcome::Invented);
        assert_eq!(s.attempts, 1);
        assert!(s.foreground.brightness() <= 30, "{} too bright", s.foreground);
    }
}

#[test]
fn test_narrow_band_random_colors_vary() {
    let mut sel = banded(0..=30, 1);
    let colors: std::collections::HashSet<Color> =
        (0..100).map(|_| sel.random_color()).collect();
    assert!(colors.len() > 10, "only {} distinct colors", colors.len());
    assert!(colors.iter().all(|c| c.brightness() <= 30));
}

#[test]
fn test_band_edges() {
    let mut sel = banded(765..=765, 2);
    assert_eq!(sel.random_color(), Color::WHITE);

    let mut sel = banded(0..=0, 2);
    assert_eq!(sel.random_color(), Color::BLACK);

    // inverted band collapses to its start
    let mut sel = banded(10..=5, 2);
    assert_eq!(sel.random_color().brightness(), 10);
}

#[test]
fn test_trivial_thresholds_accept_first_candidate() {
    let mut sel = selector(11);
    let named = sel.select_contrasting(Color::WHITE, 0, 0, true);
    assert_eq!(named.attempts, 1);
    assert_eq!(named.outcome, Outcome::Named);
    assert!(named.name.is_some());

    let invented = sel.invent_color(Color::WHITE, 0, 0);
    assert_eq!(invented.attempts, 1);
    assert_eq!(invented.outcome, Outcome::Invented);
    assert_eq!(invented.background, Color::WHITE);
}

#[test]
fn test_impossible_thresholds_fall_back() {
    let mut sel = selector(5);
    let table_len = ColorTable::global().len();

    let s = sel.select_contrasting(Color::WHITE, 100, 100, true);
    assert_eq!(s.outcome, Outcome::Fallback);
    assert_eq!(s.foreground, Color::WHITE);
    assert_eq!(s.background, Color::BLACK);
    assert_eq!(s.name, None);
    assert!(s.attempts <= table_len + DEFAULT_MAX_ATTEMPTS);

    let s = sel.invent_color(hex("#336699"), 100, 100);
    assert_eq!(s.outcome, Outcome::Fallback);
    assert_eq!(s.attempts, DEFAULT_MAX_ATTEMPTS);
}

#[test]
fn test_select_against_white_matches_table() {
    let table = ColorTable::global();
    let thresholds = Thresholds::from_percentages(50, 20);
    let any_qualifies = table
        .entries()
        .iter()
        .any(|e| thresholds.is_met_by(&color_metrics(e.color, Color::WHITE)));

    for seed in 0..20 {
        let s = selector(seed).select_contrasting(hex("#FFFFFF"), 50, 20, true);
        if any_qualifies {
            assert_eq!(s.outcome, Outcome::Named);
            let m = color_metrics(s.foreground, Color::WHITE);
            assert!(m.contrast >= 0.5, "contrast {} for {:?}", m.contrast, s.name);
            assert!(m.distance >= 0.2 * MAX_DISTANCE);
            assert_eq!(table.lookup(s.name.unwrap()), Some(s.foreground));
        } else {
            assert_eq!(s.outcome, Outcome::Fallback);
        }
    }
}

#[test]
fn test_exhausted_table_invents() {
    // only black in the table, black can never be 20% away from black
    let table = ColorTable::from_pairs(&[("black", "#000000")]).unwrap();
    let mut sel = ColorSelector::new(&table, SelectOptions::default(), StdRng::seed_from_u64(9));
    let s = sel.select_contrasting(Color::BLACK, 0, 20, true);
    assert_eq!(s.outcome, Outcome::Invented);
    assert_eq!(s.name, None);
    assert!(euclidean_distance(s.foreground, Color::BLACK) >= 0.2 * MAX_DISTANCE);
    assert!(s.attempts >= 2);
}

#[test]
fn test_brightness_band_filters_table() {
    let mut sel = ColorSelector::new(
        ColorTable::global(),
        SelectOptions {
            brightness: 0..=200,
            ..SelectOptions::default()
        },
        StdRng::seed_from_u64(21),
    );
    for _ in 0..20 {
        let s = sel.select_contrasting(Color::WHITE, 0, 0, true);
        assert!(s.foreground.brightness() <= 200, "{} too bright", s.foreground);
    }
}

#[test]
fn test_seeded_selection_is_reproducible() {
    let a = selector(42).select_contrasting(hex("#223344"), 30, 20, true);
    let b = selector(42).select_contrasting(hex("#223344"), 30, 20, true);
    assert_eq!(a, b);
}

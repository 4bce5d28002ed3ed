//! Integration tests for Swatchbook
//!
//! These drive the full pipeline through the public API: raw JSON text into
//! a typed document, through extraction, to the final ordered swatch list.

use std::path::PathBuf;
use swatchbook::{ColorParseError, Rgb, ThemeDocument, extract};

/// Loads a fixture theme from tests/fixtures
fn load_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    std::fs::read_to_string(path).expect("fixture should exist")
}

#[test]
fn test_fixture_theme_end_to_end() {
    let json = load_fixture("night_garden.json");
    let document = ThemeDocument::from_json(&json).unwrap();

    assert_eq!(document.name.as_deref(), Some("Night Garden"));
    assert_eq!(document.kind.as_deref(), Some("dark"));

    let result = extract(&document);

    // 15 color-bearing entries in the fixture; one ("input.border": "")
    // is unparseable, the rest collapse into 10 distinct colors.
    assert_eq!(result.occurrence_count(), 14);
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].scope, "input.border");
    assert_eq!(result.skipped[0].reason, ColorParseError::Empty);
    assert_eq!(result.entries.len(), 10);
}

#[test]
fn test_fixture_collapses_notations_across_sections() {
    let json = load_fixture("night_garden.json");
    let document = ThemeDocument::from_json(&json).unwrap();
    let result = extract(&document);

    // #7aa2f7 appears as lowercase hex, uppercase hex, rgb() and an
    // alpha-suffixed hex; one entry, scopes in section-then-document order.
    let blue = result
        .entries
        .iter()
        .find(|e| e.color == Rgb::new(0x7a, 0xa2, 0xf7))
        .expect("blue entry");
    assert_eq!(
        blue.scopes,
        ["variable", "function", "terminal.ansiBlue", "badge.background"]
    );

    // The scope array stays one identifier, and shares its gray with a UI color.
    let gray = result
        .entries
        .iter()
        .find(|e| e.color == Rgb::new(0x56, 0x5f, 0x89))
        .expect("gray entry");
    assert_eq!(
        gray.scopes,
        [
            "comment, punctuation.definition.comment",
            "editorLineNumber.foreground"
        ]
    );
}

#[test]
fn test_fixture_achromatic_trails() {
    let json = load_fixture("night_garden.json");
    let document = ThemeDocument::from_json(&json).unwrap();
    let result = extract(&document);

    // "white" is the only achromatic color in the fixture
    let last = result.entries.last().unwrap();
    assert_eq!(last.color, Rgb::new(255, 255, 255));
    assert_eq!(last.scopes, ["terminal.ansiWhite"]);
}

#[test]
fn test_primaries_order_red_green_blue() {
    let json = r##"{
        "semanticTokenColors": { "variable": { "foreground": "#ff0000" } },
        "tokenColors": [
            { "scope": "string.quoted", "settings": { "foreground": "#00ff00" } }
        ],
        "colors": { "editor.background": "#0000ff" }
    }"##;

    let document = ThemeDocument::from_json(json).unwrap();
    let result = extract(&document);

    assert_eq!(result.entries.len(), 3);
    let hexes: Vec<String> = result.entries.iter().map(|e| e.color.hex()).collect();
    assert_eq!(hexes, ["#ff0000", "#00ff00", "#0000ff"]);

    let scopes: Vec<&[String]> = result.entries.iter().map(|e| e.scopes.as_slice()).collect();
    assert_eq!(scopes[0], ["variable".to_string()]);
    assert_eq!(scopes[1], ["string.quoted".to_string()]);
    assert_eq!(scopes[2], ["editor.background".to_string()]);
}

#[test]
fn test_same_color_two_scopes() {
    let json = r##"{ "colors": { "a": "#ffffff", "b": "#ffffff" } }"##;
    let document = ThemeDocument::from_json(json).unwrap();
    let result = extract(&document);

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].scopes, ["a", "b"]);
}

#[test]
fn test_malformed_json_produces_document_error_and_no_output() {
    let err = ThemeDocument::from_json(r#"{"colors": }"#).unwrap_err();
    assert!(matches!(err, swatchbook::Error::Document(_)));
}

#[test]
fn test_determinism_across_runs() {
    let json = load_fixture("night_garden.json");
    let document = ThemeDocument::from_json(&json).unwrap();

    let first = extract(&document);
    let second = extract(&document);
    assert_eq!(first, second);

    // Re-parsing the same text is equally stable
    let reparsed = ThemeDocument::from_json(&json).unwrap();
    assert_eq!(extract(&reparsed), first);
}

#[test]
fn test_reversed_input_same_sequence_new_scope_order() {
    let forward = r##"{ "colors": { "a": "#ff0000", "b": "#00ff00", "c": "#ff0000" } }"##;
    let backward = r##"{ "colors": { "c": "#ff0000", "b": "#00ff00", "a": "#ff0000" } }"##;

    let fwd = extract(&ThemeDocument::from_json(forward).unwrap());
    let bwd = extract(&ThemeDocument::from_json(backward).unwrap());

    let fwd_colors: Vec<Rgb> = fwd.entries.iter().map(|e| e.color).collect();
    let bwd_colors: Vec<Rgb> = bwd.entries.iter().map(|e| e.color).collect();
    assert_eq!(fwd_colors, bwd_colors);

    let fwd_red = &fwd.entries.iter().find(|e| e.color.hex() == "#ff0000").unwrap();
    let bwd_red = &bwd.entries.iter().find(|e| e.color.hex() == "#ff0000").unwrap();
    assert_eq!(fwd_red.scopes, ["a", "c"]);
    assert_eq!(bwd_red.scopes, ["c", "a"]);
}

#[test]
fn test_canonical_hex_reparse_is_identity() {
    let json = load_fixture("night_garden.json");
    let document = ThemeDocument::from_json(&json).unwrap();
    let result = extract(&document);

    for entry in &result.entries {
        assert_eq!(Rgb::parse(&entry.color.hex()).unwrap(), entry.color);
    }
}

#[test]
fn test_missing_sections_tolerated_end_to_end() {
    let document = ThemeDocument::from_json(r#"{ "name": "Bare" }"#).unwrap();
    let result = extract(&document);
    assert!(result.entries.is_empty());
    assert!(result.skipped.is_empty());
}

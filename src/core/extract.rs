//! Color extraction, deduplication and spectral ordering
//!
//! [`extract`] walks a parsed [`ThemeDocument`] in a fixed order (semantic
//! token colors, then token colors, then UI colors), normalizes every color
//! string to its canonical [`Rgb`] value, groups occurrences by canonical
//! equality, and orders the distinct colors spectrally: hued colors by
//! ascending hue (red → violet), achromatic colors (grays, black, white)
//! as a trailing group. The transform is pure and deterministic; the same
//! document always yields the same sequence.

use crate::core::color::{Hsl, Rgb};
use crate::core::document::ThemeDocument;
use crate::core::error::ColorParseError;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One distinct color and every scope that referenced it, in encounter
/// order. Duplicate scope names are retained: a scope appearing twice with
/// the same color contributes two entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    pub color: Rgb,
    pub hsl: Hsl,
    pub scopes: Vec<String>,
}

/// An input entry whose color string could not be parsed. The entry is
/// dropped from the output and reported so the UI can warn about it.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub scope: String,
    pub value: String,
    pub reason: ColorParseError,
}

/// The complete result of one extraction pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Distinct colors in spectral order.
    pub entries: Vec<ColorEntry>,
    /// Entries skipped because their color string did not parse.
    pub skipped: Vec<SkippedEntry>,
}

impl Extraction {
    /// Total number of (scope, color) occurrences that made it into the
    /// output. Together with `skipped.len()` this accounts for every
    /// color-bearing entry of the input.
    pub fn occurrence_count(&self) -> usize {
        self.entries.iter().map(|e| e.scopes.len()).sum()
    }
}

/// Extracts the ordered, deduplicated swatch list from a theme document.
///
/// Section order is fixed: `semanticTokenColors`, `tokenColors`, `colors`.
/// Within each section, document order. The input is not modified and no
/// state outlives the call.
pub fn extract(document: &ThemeDocument) -> Extraction {
    let mut entries: Vec<ColorEntry> = Vec::new();
    let mut index_by_color: HashMap<Rgb, usize> = HashMap::new();
    let mut skipped = Vec::new();

    let mut record = |scope: &str, value: &str| match Rgb::parse(value) {
        Ok(color) => {
            if let Some(&i) = index_by_color.get(&color) {
                entries[i].scopes.push(scope.to_string());
            } else {
                index_by_color.insert(color, entries.len());
                entries.push(ColorEntry {
                    color,
                    hsl: color.to_hsl(),
                    scopes: vec![scope.to_string()],
                });
            }
        }
        Err(reason) => {
            tracing::warn!(scope, value, %reason, "skipping unparseable color");
            skipped.push(SkippedEntry {
                scope: scope.to_string(),
                value: value.to_string(),
                reason,
            });
        }
    };

    for (scope, style) in &document.semantic_token_colors {
        if let Some(foreground) = &style.foreground {
            record(scope, foreground);
        }
    }

    for token in &document.token_colors {
        if let Some(foreground) = &token.settings.foreground {
            // A token rule without a scope is the editor default; label it so
            // the occurrence still shows up in the output.
            let scope = token
                .scope
                .as_ref()
                .map_or_else(|| "(default)".to_string(), |s| s.joined());
            record(&scope, foreground);
        }
    }

    for (scope, value) in &document.colors {
        record(scope, value);
    }

    drop(record);
    entries.sort_by(spectral_order);

    Extraction { entries, skipped }
}

/// The spectral comparison: hued colors by ascending hue, ties broken by
/// descending saturation then ascending lightness; achromatic colors trail,
/// ordered by lightness. The packed RGB integer is the final tiebreak, so
/// no two distinct colors ever compare equal.
fn spectral_order(a: &ColorEntry, b: &ColorEntry) -> Ordering {
    let a_gray = a.color.is_achromatic();
    let b_gray = b.color.is_achromatic();

    match (a_gray, b_gray) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => a
            .hsl
            .l
            .total_cmp(&b.hsl.l)
            .then_with(|| a.color.packed().cmp(&b.color.packed())),
        (false, false) => a
            .hsl
            .h
            .total_cmp(&b.hsl.h)
            .then_with(|| b.hsl.s.total_cmp(&a.hsl.s))
            .then_with(|| a.hsl.l.total_cmp(&b.hsl.l))
            .then_with(|| a.color.packed().cmp(&b.color.packed())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::ThemeDocument;

    fn doc(json: &str) -> ThemeDocument {
        ThemeDocument::from_json(json).unwrap()
    }

    #[test]
    fn test_three_primaries_in_spectral_order() {
        let document = doc(r##"{
            "semanticTokenColors": { "variable": { "foreground": "#ff0000" } },
            "tokenColors": [
                { "scope": "string.quoted", "settings": { "foreground": "#00ff00" } }
            ],
            "colors": { "editor.background": "#0000ff" }
        }"##);

        let result = extract(&document);
        assert_eq!(result.entries.len(), 3);
        assert!(result.skipped.is_empty());

        let hexes: Vec<String> = result.entries.iter().map(|e| e.color.hex()).collect();
        assert_eq!(hexes, ["#ff0000", "#00ff00", "#0000ff"]);

        assert_eq!(result.entries[0].scopes, ["variable"]);
        assert_eq!(result.entries[1].scopes, ["string.quoted"]);
        assert_eq!(result.entries[2].scopes, ["editor.background"]);
    }

    #[test]
    fn test_duplicate_color_merges_scopes_in_order() {
        let document = doc(r##"{
            "colors": { "a": "#ffffff", "b": "#ffffff" }
        }"##);

        let result = extract(&document);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].scopes, ["a", "b"]);
    }

    #[test]
    fn test_different_notations_collapse() {
        let document = doc(r##"{
            "semanticTokenColors": { "variable": { "foreground": "#ff0000" } },
            "colors": {
                "editor.foreground": "rgb(255, 0, 0)",
                "badge.background": "red"
            }
        }"##);

        let result = extract(&document);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(
            result.entries[0].scopes,
            ["variable", "editor.foreground", "badge.background"]
        );
    }

    #[test]
    fn test_section_order_drives_scope_order() {
        // Same color everywhere: semantic first, then tokens, then UI colors,
        // regardless of how the JSON interleaves the sections.
        let document = doc(r##"{
            "colors": { "ui": "#123456" },
            "tokenColors": [ { "scope": "tok", "settings": { "foreground": "#123456" } } ],
            "semanticTokenColors": { "sem": { "foreground": "#123456" } }
        }"##);

        let result = extract(&document);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].scopes, ["sem", "tok", "ui"]);
    }

    #[test]
    fn test_unparseable_entry_skipped_not_fatal() {
        let document = doc(r##"{
            "colors": {
                "good": "#00ff00",
                "bad": "definitely not a color",
                "also.good": "#ff0000"
            }
        }"##);

        let result = extract(&document);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].scope, "bad");
        assert_eq!(result.occurrence_count(), 2);
    }

    #[test]
    fn test_entries_without_foreground_ignored() {
        let document = doc(r##"{
            "semanticTokenColors": { "variable": {} },
            "tokenColors": [ { "scope": "emphasis", "settings": {} } ]
        }"##);

        let result = extract(&document);
        assert!(result.entries.is_empty());
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_achromatic_group_trails() {
        let document = doc(r##"{
            "colors": {
                "white": "#ffffff",
                "blue": "#0000ff",
                "black": "#000000",
                "red": "#ff0000",
                "gray": "#808080"
            }
        }"##);

        let result = extract(&document);
        let hexes: Vec<String> = result.entries.iter().map(|e| e.color.hex()).collect();
        // Hued first (red before blue), then grays by ascending lightness.
        assert_eq!(
            hexes,
            ["#ff0000", "#0000ff", "#000000", "#808080", "#ffffff"]
        );
    }

    #[test]
    fn test_deterministic() {
        let json = r##"{
            "colors": {
                "a": "#ff8800", "b": "#00ffcc", "c": "#112233",
                "d": "#ff8800", "e": "gold", "f": "hsl(300, 60%, 40%)"
            }
        }"##;
        let document = doc(json);

        let first = extract(&document);
        let second = extract(&document);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reversed_input_same_colors_new_scope_order() {
        let forward = doc(r##"{ "colors": { "a": "#ababab", "b": "#ff0000", "c": "#ababab" } }"##);
        let backward = doc(r##"{ "colors": { "c": "#ababab", "b": "#ff0000", "a": "#ababab" } }"##);

        let fwd = extract(&forward);
        let bwd = extract(&backward);

        let fwd_hexes: Vec<String> = fwd.entries.iter().map(|e| e.color.hex()).collect();
        let bwd_hexes: Vec<String> = bwd.entries.iter().map(|e| e.color.hex()).collect();
        assert_eq!(fwd_hexes, bwd_hexes);

        let gray_fwd = fwd.entries.iter().find(|e| e.color.hex() == "#ababab").unwrap();
        let gray_bwd = bwd.entries.iter().find(|e| e.color.hex() == "#ababab").unwrap();
        assert_eq!(gray_fwd.scopes, ["a", "c"]);
        assert_eq!(gray_bwd.scopes, ["c", "a"]);
    }

    #[test]
    fn test_completeness_accounting() {
        let document = doc(r##"{
            "semanticTokenColors": {
                "one": { "foreground": "#111111" },
                "two": { "foreground": "#222222" }
            },
            "tokenColors": [
                { "scope": "three", "settings": { "foreground": "#111111" } },
                { "scope": "four", "settings": { "foreground": "bogus" } }
            ],
            "colors": { "five": "#333333" }
        }"##);

        let result = extract(&document);
        // 5 color-bearing entries, 1 unparseable.
        assert_eq!(result.occurrence_count(), 4);
        assert_eq!(result.skipped.len(), 1);
        // Dedupe: #111111 appears twice, so 4 occurrences across 3 entries.
        assert_eq!(result.entries.len(), 3);
    }

    #[test]
    fn test_empty_document() {
        let result = extract(&ThemeDocument::default());
        assert!(result.entries.is_empty());
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_token_rule_without_scope_labeled_default() {
        let document = doc(r##"{
            "tokenColors": [ { "settings": { "foreground": "#445566" } } ]
        }"##);

        let result = extract(&document);
        assert_eq!(result.entries[0].scopes, ["(default)"]);
    }
}

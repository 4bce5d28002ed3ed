//! Fuzzy search and filtering utilities

use crate::core::extract::ColorEntry;
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Fuzzy filters swatch entries by scope name or hex value.
///
/// Unlike a search list, the swatch list has a meaningful order (the
/// spectral sort), so matches keep their original positions instead of
/// being re-ranked by score. Empty queries return everything.
///
/// Uses buffer reuse optimization to minimize allocations during filtering.
pub fn fuzzy_filter_entries<'a>(entries: &'a [ColorEntry], query: &str) -> Vec<&'a ColorEntry> {
    if query.is_empty() {
        return entries.iter().collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let query_lowercase = query.to_lowercase();
    let mut needle_buf = Vec::new();
    let needle = Utf32Str::new(&query_lowercase, &mut needle_buf);

    // Reuse buffer across all haystacks to reduce allocations
    let mut haystack_buf = Vec::new();

    entries
        .iter()
        .filter(|entry| {
            let hex = entry.color.hex();
            let mut candidates = entry.scopes.iter().map(String::as_str);
            let hex_matches = {
                haystack_buf.clear();
                let haystack = Utf32Str::new(&hex, &mut haystack_buf);
                matcher.fuzzy_match(haystack, needle).is_some()
            };
            hex_matches
                || candidates.any(|scope| {
                    let scope_lowercase = scope.to_lowercase();
                    haystack_buf.clear();
                    let haystack = Utf32Str::new(&scope_lowercase, &mut haystack_buf);
                    matcher.fuzzy_match(haystack, needle).is_some()
                })
        })
        .collect()
}

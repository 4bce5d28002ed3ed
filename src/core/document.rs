//! Schema-validated theme document parsing
//!
//! A theme document is the VS Code-style JSON shape: `semanticTokenColors`
//! (scope → style), `tokenColors` (array of token rules) and `colors`
//! (UI element → color string). All three sections are optional; an absent
//! or `null` section deserializes as empty rather than failing the whole
//! document. Map-shaped sections keep their document order, which later
//! becomes the scope encounter order.

use crate::core::error::Result;
use serde::de::{DeserializeOwned, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;

/// A parsed, typed theme document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeDocument {
    /// Display name, when the theme declares one.
    #[serde(default)]
    pub name: Option<String>,

    /// `"dark"` / `"light"` marker, passed through for display only.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(
        default,
        rename = "semanticTokenColors",
        deserialize_with = "ordered_map"
    )]
    pub semantic_token_colors: Vec<(String, SemanticStyle)>,

    #[serde(default, rename = "tokenColors", deserialize_with = "tolerant_seq")]
    pub token_colors: Vec<TokenColor>,

    #[serde(default, deserialize_with = "ordered_map")]
    pub colors: Vec<(String, String)>,
}

/// Style record under `semanticTokenColors`.
#[derive(Debug, Clone, Deserialize)]
pub struct SemanticStyle {
    #[serde(default)]
    pub foreground: Option<String>,
}

/// One rule under `tokenColors`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenColor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scope: Option<ScopeField>,
    #[serde(default)]
    pub settings: TokenSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenSettings {
    #[serde(default)]
    pub foreground: Option<String>,
}

/// `scope` appears in the wild both as a single string and as an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScopeField {
    Single(String),
    Multiple(Vec<String>),
}

impl ScopeField {
    /// Collapses the field into one scope identifier. Array scopes share one
    /// settings record, so they stay one entry, joined the way themes write
    /// multi-scope strings by hand.
    pub fn joined(&self) -> String {
        match self {
            Self::Single(s) => s.clone(),
            Self::Multiple(parts) => parts.join(", "),
        }
    }
}

impl ThemeDocument {
    /// Parses a raw JSON string into a typed document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::core::error::Error::Document`] when the text is not
    /// valid JSON or the top level is not an object of the expected shape.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Total number of entries across the three sections, color-bearing or
    /// not. Used for log lines, not for invariants.
    pub fn entry_count(&self) -> usize {
        self.semantic_token_colors.len() + self.token_colors.len() + self.colors.len()
    }
}

/// Deserializes a JSON object into a `Vec` of pairs, preserving document
/// order. A section that is absent, `null` or not an object at all becomes
/// empty, and individual records of the wrong shape are dropped; a broken
/// section never fails the whole document.
fn ordered_map<'de, D, V>(deserializer: D) -> std::result::Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    struct OrderedMapVisitor<V>(PhantomData<V>);

    impl<'de, V: DeserializeOwned> Visitor<'de> for OrderedMapVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a JSON object or null")
        }

        fn visit_map<A: MapAccess<'de>>(
            self,
            mut access: A,
        ) -> std::result::Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
                if let Ok(parsed) = serde_json::from_value::<V>(value) {
                    entries.push((key, parsed));
                }
            }
            Ok(entries)
        }

        fn visit_seq<A: SeqAccess<'de>>(
            self,
            mut access: A,
        ) -> std::result::Result<Self::Value, A::Error> {
            // Wrong shape; drain and treat as empty
            while access.next_element::<IgnoredAny>()?.is_some() {}
            Ok(Vec::new())
        }

        fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_bool<E: serde::de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_i64<E: serde::de::Error>(self, _: i64) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_u64<E: serde::de::Error>(self, _: u64) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_f64<E: serde::de::Error>(self, _: f64) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_str<E: serde::de::Error>(self, _: &str) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
}

/// Deserializes a JSON array in the same tolerant fashion: non-array
/// sections become empty, malformed elements are dropped.
fn tolerant_seq<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    struct TolerantSeqVisitor<T>(PhantomData<T>);

    impl<'de, T: DeserializeOwned> Visitor<'de> for TolerantSeqVisitor<T> {
        type Value = Vec<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a JSON array or null")
        }

        fn visit_seq<A: SeqAccess<'de>>(
            self,
            mut access: A,
        ) -> std::result::Result<Self::Value, A::Error> {
            let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(value) = access.next_element::<serde_json::Value>()? {
                if let Ok(parsed) = serde_json::from_value::<T>(value) {
                    elements.push(parsed);
                }
            }
            Ok(elements)
        }

        fn visit_map<A: MapAccess<'de>>(
            self,
            mut access: A,
        ) -> std::result::Result<Self::Value, A::Error> {
            // Wrong shape; drain and treat as empty
            while access
                .next_entry::<IgnoredAny, IgnoredAny>()?
                .is_some()
            {}
            Ok(Vec::new())
        }

        fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_bool<E: serde::de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_i64<E: serde::de::Error>(self, _: i64) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_u64<E: serde::de::Error>(self, _: u64) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_f64<E: serde::de::Error>(self, _: f64) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_str<E: serde::de::Error>(self, _: &str) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(TolerantSeqVisitor(PhantomData))
}

//! Swatchbook - theme color inspector
//!
//! A small GUI utility for inspecting editor color themes: paste a VS
//! Code-style theme JSON document and see every color it references as a
//! labeled swatch list, deduplicated and sorted spectrally.
//!
//! # Architecture
//!
//! - [`core`] - Color parsing, document deserialization, and the
//!   extract/dedupe/sort transform
//! - [`theme`] - UI chrome themes for the application itself
//! - [`config`] - Configuration persistence
//! - [`utils`] - Utility functions (XDG directories, etc.)
//!
//! The transform is pure: one validation action parses the pasted text into
//! a typed document, extracts an ordered swatch list, and fully replaces the
//! previous result. Nothing is persisted between validations except the
//! application's own UI settings.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod config;
pub mod core;
pub mod theme;
pub mod utils;

// Re-export commonly used types
pub use self::core::color::{Hsl, Rgb};
pub use self::core::document::ThemeDocument;
pub use self::core::error::{ColorParseError, Error, Result};
pub use self::core::extract::{ColorEntry, Extraction, extract};

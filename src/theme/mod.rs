pub mod presets;

use iced::Color;
use serde::{Deserialize, Serialize};

/// Complete chrome theme definition with semantic color naming
///
/// This styles the application itself (panes, buttons, inputs). It is
/// unrelated to the theme documents the user inspects.
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // === Background Layers (progressive depth) ===
    pub bg_base: Color,     // App background (deepest)
    pub bg_sidebar: Color,  // Editor pane background
    pub bg_surface: Color,  // Cards, containers
    pub bg_elevated: Color, // Inputs, buttons
    pub bg_hover: Color,    // Hover states
    pub bg_active: Color,   // Active/selected states

    // === Foreground/Text ===
    pub fg_primary: Color,   // Main text
    pub fg_secondary: Color, // Less important text
    pub fg_muted: Color,     // Disabled/placeholder text
    pub fg_on_accent: Color, // Text on accent colors

    // === Semantic Colors ===
    pub accent: Color,       // Brand/primary actions
    pub accent_hover: Color, // Hovered accent
    pub success: Color,      // Positive states
    pub warning: Color,      // Warnings
    pub danger: Color,       // Errors

    // === Borders & Dividers ===
    pub border: Color,        // Default borders
    pub border_strong: Color, // Emphasized borders
    pub divider: Color,       // Separators

    // === Shadows ===
    pub shadow_color: Color, // Shadow color (transparent black usually)
}

impl AppTheme {
    /// Creates a theme from RGB hex values for easier definition
    pub fn from_hex(
        name: &str,
        bg_base: u32,
        bg_sidebar: u32,
        bg_surface: u32,
        bg_elevated: u32,
        bg_hover: u32,
        bg_active: u32,
        fg_primary: u32,
        fg_secondary: u32,
        fg_muted: u32,
        fg_on_accent: u32,
        accent: u32,
        accent_hover: u32,
        success: u32,
        warning: u32,
        danger: u32,
        border: u32,
        border_strong: u32,
        divider: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            bg_base: hex_to_color(bg_base),
            bg_sidebar: hex_to_color(bg_sidebar),
            bg_surface: hex_to_color(bg_surface),
            bg_elevated: hex_to_color(bg_elevated),
            bg_hover: hex_to_color(bg_hover),
            bg_active: hex_to_color(bg_active),
            fg_primary: hex_to_color(fg_primary),
            fg_secondary: hex_to_color(fg_secondary),
            fg_muted: hex_to_color(fg_muted),
            fg_on_accent: hex_to_color(fg_on_accent),
            accent: hex_to_color(accent),
            accent_hover: hex_to_color(accent_hover),
            success: hex_to_color(success),
            warning: hex_to_color(warning),
            danger: hex_to_color(danger),
            border: hex_to_color(border),
            border_strong: hex_to_color(border_strong),
            divider: hex_to_color(divider),
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        }
    }

    /// True for light-background themes; used for hover/gradient direction.
    pub fn is_light(&self) -> bool {
        let b = self.bg_base;
        0.2126 * b.r + 0.7152 * b.g + 0.0722 * b.b > 0.5
    }
}

/// Converts hex color (0xRRGGBB) to iced Color
#[allow(clippy::cast_precision_loss)]
fn hex_to_color(hex: u32) -> Color {
    Color::from_rgb(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// All available built-in themes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, strum::EnumIter,
)]
pub enum ThemeChoice {
    #[default]
    Nord,
    Gruvbox,
    OneDark,
    PaperLight,
}

impl ThemeChoice {
    pub fn all() -> &'static [Self] {
        &[Self::Nord, Self::Gruvbox, Self::OneDark, Self::PaperLight]
    }

    pub fn name(&self) -> String {
        match self {
            Self::Nord => "Nord".to_string(),
            Self::Gruvbox => "Gruvbox".to_string(),
            Self::OneDark => "One Dark".to_string(),
            Self::PaperLight => "Paper Light".to_string(),
        }
    }

    pub fn to_theme(self) -> AppTheme {
        match self {
            Self::Nord => presets::nord(),
            Self::Gruvbox => presets::gruvbox(),
            Self::OneDark => presets::one_dark(),
            Self::PaperLight => presets::paper_light(),
        }
    }
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_choice_resolves_to_a_theme() {
        for choice in ThemeChoice::iter() {
            let theme = choice.to_theme();
            assert_eq!(theme.name, choice.name());
        }
    }

    #[test]
    fn test_light_detection() {
        assert!(!presets::nord().is_light());
        assert!(presets::paper_light().is_light());
    }
}

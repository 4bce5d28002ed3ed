//! Shared helpers for handler unit tests

use crate::app::State;
use iced::widget::text_editor;

/// Builds a default state without touching the on-disk config.
pub fn create_test_state() -> State {
    let current_theme = crate::theme::ThemeChoice::default();
    State {
        input: text_editor::Content::new(),
        result: None,
        parse_error: None,
        scope_filter: String::new(),
        auto_validate: false,
        banner: None,
        current_theme,
        theme: current_theme.to_theme(),
    }
}

/// Replaces the editor content wholesale.
pub fn set_input(state: &mut State, text: &str) {
    state.input = text_editor::Content::with_text(text);
}

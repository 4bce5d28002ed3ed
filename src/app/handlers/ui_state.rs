//! UI state management
//!
//! Handles UI state changes:
//! - Scope filter edits
//! - Copying swatch values to the clipboard
//! - Auto-validate and chrome theme settings
//! - Keyboard shortcuts

use crate::app::{BannerSeverity, Message, State};
use crate::core::color::Rgb;
use iced::Task;

/// Handles scope filter changes; filtering happens in the view, so this is
/// pure state.
pub(crate) fn handle_scope_filter_changed(state: &mut State, query: String) {
    state.scope_filter = query;
}

/// Copies the clicked swatch's canonical hex to the clipboard.
pub(crate) fn handle_swatch_clicked(state: &mut State, color: Rgb) -> Task<Message> {
    let hex = color.hex();
    state.push_banner(format!("Copied {hex} to clipboard"), BannerSeverity::Success);
    iced::clipboard::write(hex)
}

/// Handles toggling validate-on-change
pub(crate) fn handle_auto_validate_toggled(state: &mut State, enabled: bool) {
    state.auto_validate = enabled;
    if enabled {
        // Catch up with whatever is already in the editor
        super::input::handle_validate(state);
    }
}

/// Handles chrome theme selection
pub(crate) fn handle_theme_changed(state: &mut State, choice: crate::theme::ThemeChoice) {
    state.current_theme = choice;
    state.theme = choice.to_theme();
}

/// Handles raw window events; Ctrl/Cmd+Enter triggers validation.
pub(crate) fn handle_event(state: &mut State, event: iced::Event) -> Task<Message> {
    if let iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        && matches!(
            key,
            iced::keyboard::Key::Named(iced::keyboard::key::Named::Enter)
        )
        && (modifiers.command() || modifiers.control())
    {
        super::input::handle_validate(state);
    }
    Task::none()
}

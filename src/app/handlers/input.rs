//! Validation and file input
//!
//! Handles:
//! - Editor edits (with optional validate-on-change)
//! - The explicit Validate action
//! - Clearing the workspace
//! - Loading a theme JSON file through the native dialog

use crate::app::{BannerSeverity, Message, State, ValidatedTheme};
use crate::core::document::ThemeDocument;
use crate::core::extract;
use iced::Task;
use iced::widget::text_editor;

/// Applies an editor action; when auto-validate is on, every edit re-runs
/// the whole pipeline (the transform is cheap: themes are a few hundred
/// entries at most).
pub(crate) fn handle_editor_action(state: &mut State, action: text_editor::Action) -> Task<Message> {
    let is_edit = action.is_edit();
    state.input.perform(action);

    if is_edit && state.auto_validate {
        handle_validate(state);
    }
    Task::none()
}

/// Runs one full validation pass: parse, extract, replace previous output.
///
/// Failure clears the previous swatch list - stale output under an error
/// banner reads as if the broken input produced it.
pub(crate) fn handle_validate(state: &mut State) {
    let text = state.input.text();

    if text.trim().is_empty() {
        state.result = None;
        state.parse_error = None;
        state.banner = None;
        return;
    }

    match ThemeDocument::from_json(&text) {
        Ok(document) => {
            let extraction = extract::extract(&document);
            tracing::info!(
                input_entries = document.entry_count(),
                colors = extraction.entries.len(),
                occurrences = extraction.occurrence_count(),
                skipped = extraction.skipped.len(),
                "validated theme document"
            );

            state.parse_error = None;
            state.banner = skipped_banner(&extraction.skipped);
            state.result = Some(ValidatedTheme {
                name: document.name.clone(),
                kind: document.kind.clone(),
                extraction,
            });
        }
        Err(e) => {
            tracing::warn!("theme document rejected: {e}");
            state.result = None;
            state.parse_error = Some(e.to_string());
            state.banner = None;
        }
    }
}

/// Summarizes skipped entries into a warning banner, or clears it.
fn skipped_banner(skipped: &[crate::core::extract::SkippedEntry]) -> Option<crate::app::Banner> {
    if skipped.is_empty() {
        return None;
    }

    let scopes: Vec<String> = skipped
        .iter()
        .map(|s| crate::utils::truncate_string(&s.scope, 40))
        .take(5)
        .collect();
    let suffix = if skipped.len() > scopes.len() {
        format!(" and {} more", skipped.len() - scopes.len())
    } else {
        String::new()
    };

    Some(crate::app::Banner {
        message: format!(
            "Skipped {} entr{} with unparseable colors: {}{}",
            skipped.len(),
            if skipped.len() == 1 { "y" } else { "ies" },
            scopes.join(", "),
            suffix
        ),
        severity: BannerSeverity::Warning,
    })
}

/// Handles the Clear action: input, output and messages all reset.
pub(crate) fn handle_clear(state: &mut State) {
    state.input = text_editor::Content::new();
    state.result = None;
    state.parse_error = None;
    state.banner = None;
    state.scope_filter.clear();
}

/// Opens the native file dialog and reads the chosen theme JSON.
pub(crate) fn handle_open_file() -> Task<Message> {
    Task::perform(
        async move {
            use rfd::AsyncFileDialog;
            let file = AsyncFileDialog::new()
                .add_filter("JSON", &["json"])
                .pick_file()
                .await;

            if let Some(file) = file {
                tokio::fs::read_to_string(file.path())
                    .await
                    .map_err(|e| format!("Failed to read file: {e}"))
            } else {
                Err("Open cancelled".to_string())
            }
        },
        Message::FileLoaded,
    )
}

/// Handles the loaded file: the text replaces the editor content and is
/// validated immediately.
pub(crate) fn handle_file_loaded(state: &mut State, result: Result<String, String>) {
    match result {
        Ok(text) => {
            state.input = text_editor::Content::with_text(&text);
            handle_validate(state);
        }
        Err(e) if e == "Open cancelled" => {
            // User cancelled - don't show error
        }
        Err(e) => {
            state.push_banner(e, BannerSeverity::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{create_test_state, set_input};

    #[test]
    fn test_validate_success_replaces_result() {
        let mut state = create_test_state();
        set_input(
            &mut state,
            r##"{ "colors": { "editor.background": "#112233" } }"##,
        );

        handle_validate(&mut state);

        let result = state.result.as_ref().unwrap();
        assert_eq!(result.extraction.entries.len(), 1);
        assert!(state.parse_error.is_none());
        assert!(state.banner.is_none());
    }

    #[test]
    fn test_validate_failure_clears_previous_output() {
        let mut state = create_test_state();
        set_input(&mut state, r##"{ "colors": { "a": "#ff0000" } }"##);
        handle_validate(&mut state);
        assert!(state.result.is_some());

        set_input(&mut state, r#"{"colors": }"#);
        handle_validate(&mut state);

        assert!(state.result.is_none());
        assert!(state.parse_error.as_ref().unwrap().contains("Invalid theme JSON"));
    }

    #[test]
    fn test_validate_empty_input_is_quiet() {
        let mut state = create_test_state();
        set_input(&mut state, "   \n  ");
        handle_validate(&mut state);

        assert!(state.result.is_none());
        assert!(state.parse_error.is_none());
        assert!(state.banner.is_none());
    }

    #[test]
    fn test_validate_warns_about_skipped_entries() {
        let mut state = create_test_state();
        set_input(
            &mut state,
            r##"{ "colors": { "good": "#ff0000", "bad": "nonsense" } }"##,
        );
        handle_validate(&mut state);

        let banner = state.banner.as_ref().unwrap();
        assert_eq!(banner.severity, BannerSeverity::Warning);
        assert!(banner.message.contains("bad"));
        assert_eq!(state.result.as_ref().unwrap().extraction.entries.len(), 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = create_test_state();
        set_input(&mut state, r##"{ "colors": { "a": "#ff0000" } }"##);
        handle_validate(&mut state);
        state.scope_filter = "editor".to_string();

        handle_clear(&mut state);

        assert!(state.input.text().trim().is_empty());
        assert!(state.result.is_none());
        assert!(state.scope_filter.is_empty());
    }

    #[test]
    fn test_file_loaded_validates_immediately() {
        let mut state = create_test_state();
        handle_file_loaded(
            &mut state,
            Ok(r##"{ "name": "Disk Theme", "colors": { "a": "#00ff00" } }"##.to_string()),
        );

        let result = state.result.as_ref().unwrap();
        assert_eq!(result.name.as_deref(), Some("Disk Theme"));
        assert_eq!(result.extraction.entries.len(), 1);
    }

    #[test]
    fn test_file_cancel_is_silent() {
        let mut state = create_test_state();
        handle_file_loaded(&mut state, Err("Open cancelled".to_string()));
        assert!(state.banner.is_none());
    }
}

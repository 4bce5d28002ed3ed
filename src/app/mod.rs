pub mod handlers;
pub mod helpers;
pub mod ui_components;
pub mod view;

use crate::core::color::Rgb;
use crate::core::extract::Extraction;
use iced::widget::text_editor;
use iced::{Element, Task};

pub struct State {
    /// Raw JSON the user is editing; replaced wholesale by Clear and Open.
    pub input: text_editor::Content,
    /// The last successful validation, fully recomputed each time.
    pub result: Option<ValidatedTheme>,
    /// The last document parse failure, shown inline next to the editor.
    pub parse_error: Option<String>,
    pub scope_filter: String,
    pub auto_validate: bool,
    pub banner: Option<Banner>,
    pub current_theme: crate::theme::ThemeChoice,
    pub theme: crate::theme::AppTheme,
}

/// Everything produced by one validation action. Lives until the next
/// validation (or failure, which clears it) and is never persisted.
#[derive(Debug, Clone)]
pub struct ValidatedTheme {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub extraction: Extraction,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub severity: BannerSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSeverity {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub enum Message {
    EditorAction(text_editor::Action),
    ValidateClicked,
    ClearClicked,
    OpenFileClicked,
    FileLoaded(Result<String, String>),
    ScopeFilterChanged(String),
    SwatchClicked(Rgb),
    AutoValidateToggled(bool),
    ThemeChanged(crate::theme::ThemeChoice),
    DismissBanner,
    ConfigSaved,
    EventOccurred(iced::Event),
}

impl State {
    pub fn new() -> (Self, Task<Message>) {
        let config = crate::config::load_config_blocking();
        let current_theme = config.theme_choice;
        let theme = current_theme.to_theme();

        (
            Self {
                input: text_editor::Content::new(),
                result: None,
                parse_error: None,
                scope_filter: String::new(),
                auto_validate: config.auto_validate,
                banner: None,
                current_theme,
                theme,
            },
            Task::none(),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(action) => return handlers::handle_editor_action(self, action),
            Message::ValidateClicked => handlers::handle_validate(self),
            Message::ClearClicked => handlers::handle_clear(self),
            Message::OpenFileClicked => return handlers::handle_open_file(),
            Message::FileLoaded(result) => handlers::handle_file_loaded(self, result),
            Message::ScopeFilterChanged(query) => {
                handlers::handle_scope_filter_changed(self, query);
            }
            Message::SwatchClicked(color) => return handlers::handle_swatch_clicked(self, color),
            Message::AutoValidateToggled(enabled) => {
                handlers::handle_auto_validate_toggled(self, enabled);
                return self.save_config();
            }
            Message::ThemeChanged(choice) => {
                handlers::handle_theme_changed(self, choice);
                return self.save_config();
            }
            Message::DismissBanner => self.banner = None,
            Message::ConfigSaved => {}
            Message::EventOccurred(event) => return handlers::handle_event(self, event),
        }
        Task::none()
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::event::listen().map(Message::EventOccurred)
    }

    pub fn push_banner(&mut self, message: impl Into<String>, severity: BannerSeverity) {
        self.banner = Some(Banner {
            message: message.into(),
            severity,
        });
    }

    fn save_config(&self) -> Task<Message> {
        let config = crate::config::AppConfig {
            theme_choice: self.current_theme,
            auto_validate: self.auto_validate,
        };
        Task::perform(
            async move {
                if let Err(e) = crate::config::save_config(&config).await {
                    tracing::warn!("Failed to save configuration: {e}");
                }
            },
            |()| Message::ConfigSaved,
        )
    }
}

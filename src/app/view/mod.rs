//! UI rendering module for Swatchbook
//!
//! Split into logical submodules for maintainability.

// Widget IDs for state preservation
pub const SCOPE_FILTER_INPUT_ID: &str = "scope-filter-input";
pub const SWATCH_SCROLLABLE_ID: &str = "swatch-list";

// Submodule declarations
mod editor;
mod swatches;

// Shared imports used by main view function
use crate::app::ui_components::{banner_container, main_container, themed_pick_list, themed_pick_list_menu};
use crate::app::{BannerSeverity, Message, State};
use iced::widget::{button, checkbox, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length};

/// Main view entry point
pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let header = row![
        text("Swatchbook").size(20),
        text("theme color inspector")
            .size(13)
            .color(theme.fg_muted),
        container(row![]).width(Length::Fill),
        row![
            checkbox(state.auto_validate)
                .on_toggle(Message::AutoValidateToggled)
                .size(16)
                .style(move |_, status| crate::app::ui_components::themed_checkbox(theme, status)),
            text("Validate on change").size(13).color(theme.fg_secondary),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
        pick_list(
            crate::theme::ThemeChoice::all(),
            Some(state.current_theme),
            Message::ThemeChanged,
        )
        .text_size(13)
        .padding([6, 10])
        .style(move |_, status| themed_pick_list(theme, status))
        .menu_style(move |_| themed_pick_list_menu(theme)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut content = column![header].spacing(12).padding(16);

    if let Some(banner) = &state.banner {
        content = content.push(view_banner(state, banner));
    }

    let workspace = row![
        editor::view_editor(state),
        swatches::view_swatches(state),
    ]
    .spacing(16)
    .height(Length::Fill);

    content = content.push(workspace);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| main_container(theme))
        .into()
}

fn view_banner<'a>(state: &'a State, banner: &'a crate::app::Banner) -> Element<'a, Message> {
    let theme = &state.theme;
    let accent = match banner.severity {
        BannerSeverity::Success => theme.success,
        BannerSeverity::Warning => theme.warning,
        BannerSeverity::Error => theme.danger,
    };

    container(
        row![
            text(&banner.message).size(13),
            container(row![]).width(Length::Fill),
            button(text("Dismiss").size(12))
                .on_press(Message::DismissBanner)
                .padding([4, 8])
                .style(move |_, status| crate::app::ui_components::secondary_button(theme, status)),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(move |_| banner_container(accent, theme))
    .into()
}

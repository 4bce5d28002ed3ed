//! Swatch list pane
//!
//! Renders the extraction result as a vertical list of colored blocks. Each
//! swatch is painted with its own color, labeled with the canonical hex in a
//! contrasting text color, and lists its contributing scopes underneath.

use crate::app::helpers::filtering::fuzzy_filter_entries;
use crate::app::ui_components::{
    card_container, section_header_container, swatch_container, themed_scrollable,
    themed_text_input,
};
use crate::app::view::{SCOPE_FILTER_INPUT_ID, SWATCH_SCROLLABLE_ID};
use crate::app::{Message, State};
use crate::core::extract::ColorEntry;
use iced::widget::{column, container, mouse_area, row, scrollable, text, text_input};
use iced::{Element, Font, Length};

pub fn view_swatches(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let Some(result) = &state.result else {
        let placeholder = container(
            text("Validate a theme document to see its colors")
                .size(14)
                .color(theme.fg_muted),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill);

        return container(placeholder)
            .padding(12)
            .width(Length::FillPortion(3))
            .height(Length::Fill)
            .style(move |_| card_container(theme))
            .into();
    };

    let extraction = &result.extraction;
    let visible = fuzzy_filter_entries(&extraction.entries, &state.scope_filter);

    let title = match (&result.name, &result.kind) {
        (Some(name), Some(kind)) => format!("{name} ({kind})"),
        (Some(name), None) => name.clone(),
        _ => "Untitled theme".to_string(),
    };

    let mut summary = format!(
        "{} distinct colors, {} occurrences",
        extraction.entries.len(),
        extraction.occurrence_count()
    );
    if !extraction.skipped.is_empty() {
        summary.push_str(&format!(", {} skipped", extraction.skipped.len()));
    }
    if visible.len() != extraction.entries.len() {
        summary.push_str(&format!(", {} shown", visible.len()));
    }

    let header = container(
        row![
            text(title).size(12).color(theme.fg_secondary),
            container(row![]).width(Length::Fill),
            text(summary).size(12).color(theme.fg_muted),
        ]
        .spacing(8),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(move |_| section_header_container(theme));

    let filter = text_input("Filter by scope or hex…", &state.scope_filter)
        .id(iced::widget::Id::new(SCOPE_FILTER_INPUT_ID))
        .on_input(Message::ScopeFilterChanged)
        .size(13)
        .padding(8)
        .style(move |_, status| themed_text_input(theme, status));

    let list = column(visible.into_iter().map(|entry| view_swatch(state, entry)))
        .spacing(8)
        .width(Length::Fill);

    let scroll = scrollable(container(list).padding([0, 8]))
        .id(iced::widget::Id::new(SWATCH_SCROLLABLE_ID))
        .height(Length::Fill)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new().spacing(4),
        ))
        .style(move |_, status| themed_scrollable(theme, status));

    container(column![header, filter, scroll].spacing(10))
        .padding(12)
        .width(Length::FillPortion(3))
        .height(Length::Fill)
        .style(move |_| card_container(theme))
        .into()
}

fn view_swatch<'a>(state: &'a State, entry: &'a ColorEntry) -> Element<'a, Message> {
    let theme = &state.theme;
    let color = entry.color;

    let scopes = column(
        entry
            .scopes
            .iter()
            .map(|scope| text(scope.as_str()).size(11).into()),
    )
    .spacing(2);

    let block = container(
        column![
            text(color.hex()).size(14).font(Font::MONOSPACE),
            scopes,
        ]
        .spacing(6),
    )
    .padding(10)
    .width(Length::Fill)
    .style(move |_| swatch_container(color, theme));

    mouse_area(block)
        .on_press(Message::SwatchClicked(color))
        .into()
}

//! Theme JSON input pane

use crate::app::ui_components::{
    editor_pane_container, primary_button, secondary_button, section_header_container,
    themed_horizontal_rule, themed_text_editor,
};
use crate::app::{Message, State};
use iced::widget::{button, column, container, row, rule, text, text_editor};
use iced::{Element, Font, Length};

pub fn view_editor(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let header = container(
        text("THEME JSON")
            .size(12)
            .color(theme.fg_muted),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(move |_| section_header_container(theme));

    let editor = text_editor(&state.input)
        .placeholder("Paste a color theme document here…")
        .on_action(Message::EditorAction)
        .font(Font::MONOSPACE)
        .size(13)
        .height(Length::Fill)
        .style(move |_, status| themed_text_editor(theme, status));

    let actions = row![
        button(text("Validate").size(13))
            .on_press(Message::ValidateClicked)
            .padding([6, 14])
            .style(move |_, status| primary_button(theme, status)),
        button(text("Open…").size(13))
            .on_press(Message::OpenFileClicked)
            .padding([6, 14])
            .style(move |_, status| secondary_button(theme, status)),
        button(text("Clear").size(13))
            .on_press(Message::ClearClicked)
            .padding([6, 14])
            .style(move |_, status| secondary_button(theme, status)),
        container(row![]).width(Length::Fill),
        text("Ctrl+Enter validates")
            .size(11)
            .color(theme.fg_muted),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let mut pane = column![
        header,
        editor,
        rule::horizontal(1).style(move |_| themed_horizontal_rule(theme)),
        actions,
    ]
    .spacing(10);

    if let Some(error) = &state.parse_error {
        pane = pane.push(
            text(error)
                .size(12)
                .color(theme.danger),
        );
    }

    container(pane)
        .padding(12)
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .style(move |_| editor_pane_container(theme))
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Centered spinner with a caption ("Loading concepts...").

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Spinner filling its container, with an optional caption below it.
pub fn view<'a, Message: 'static>(
    rotation: f32,
    caption: Option<String>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(AnimatedSpinner::new(palette::PRIMARY_400, rotation).into_element());

    if let Some(caption) = caption {
        column = column.push(Text::new(caption).size(typography::BODY_LG).style(
            |_theme: &Theme| text::Style {
                color: Some(palette::GRAY_400),
            },
        ));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

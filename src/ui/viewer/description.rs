// SPDX-License-Identifier: MPL-2.0
//! Rendering of parsed description blocks.

use crate::domain::description::DescriptionBlock;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Column, Space, Text};
use iced::{Element, Font, Length, Theme};

const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Headings, sub-headings, blank-line gaps and wrapped paragraphs.
pub fn view<'a, Message: 'a>(blocks: &'a [DescriptionBlock]) -> Element<'a, Message> {
    blocks
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, block| {
            column.push(block_view(block))
        })
        .width(Length::Fill)
        .into()
}

fn block_view<'a, Message: 'a>(block: &'a DescriptionBlock) -> Element<'a, Message> {
    match block {
        DescriptionBlock::Heading(title) => Text::new(title.as_str())
            .size(typography::TITLE_MD)
            .font(BOLD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::PRIMARY_400),
            })
            .into(),
        DescriptionBlock::SubHeading(title) => Text::new(title.as_str())
            .size(typography::TITLE_SM)
            .font(BOLD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_100),
            })
            .into(),
        DescriptionBlock::Break => Space::new().height(spacing::MD).into(),
        DescriptionBlock::Paragraph(body) => Text::new(body.as_str())
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_300),
            })
            .into(),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Gallery page: title, subtitle and a wrapping grid of concept cards.

use super::state::{Card, Message, State, Thumbnail};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, responsive, text, Column, Container, Image, Row, Scrollable, Text};
use iced::{alignment, ContentFit, Element, Length, Size, Theme};

pub fn view<'a>(state: &'a State, i18n: &'a I18n, spinner_rotation: f32) -> Element<'a, Message> {
    // The column count depends on the window width, so the whole page is
    // laid out inside `responsive` rather than inside the scrollable.
    responsive(move |size: Size| {
        let usable = size.width.min(sizing::GALLERY_MAX_WIDTH) - 2.0 * spacing::XL;
        page(state, i18n, spinner_rotation, columns_for(usable))
    })
    .into()
}

fn page<'a>(
    state: &'a State,
    i18n: &I18n,
    spinner_rotation: f32,
    columns: usize,
) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("gallery-title"))
                .size(typography::DISPLAY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WHITE),
                }),
        )
        .push(
            Text::new(i18n.tr("gallery-subtitle"))
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );

    let body: Element<'a, Message> = if state.is_empty() {
        Container::new(Text::new(i18n.tr("gallery-empty")).size(typography::BODY_LG))
            .width(Length::Fill)
            .padding(spacing::XXL)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        grid(state, i18n, spinner_rotation, columns)
    };

    let content = Container::new(
        Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(header)
            .push(body),
    )
    .max_width(sizing::GALLERY_MAX_WIDTH)
    .padding(spacing::XL);

    Container::new(
        Scrollable::new(
            Container::new(content)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page)
    .into()
}

/// Number of card columns that fit in `width`.
fn columns_for(width: f32) -> usize {
    let per_card = sizing::CARD_WIDTH + spacing::LG;
    ((width + spacing::LG) / per_card).floor().max(1.0) as usize
}

fn grid<'a>(
    state: &'a State,
    i18n: &I18n,
    spinner_rotation: f32,
    columns: usize,
) -> Element<'a, Message> {
    let not_found = i18n.tr("gallery-image-not-found");
    let hint = i18n.tr("gallery-card-hint");

    state
        .cards()
        .chunks(columns)
        .enumerate()
        .fold(
            Column::new().spacing(spacing::LG),
            |column, (row_index, chunk)| {
                let row = chunk.iter().enumerate().fold(
                    Row::new().spacing(spacing::LG),
                    |row, (offset, card)| {
                        row.push(card_view(
                            row_index * columns + offset,
                            card,
                            &not_found,
                            &hint,
                            spinner_rotation,
                        ))
                    },
                );
                column.push(row)
            },
        )
        .into()
}

fn card_view<'a>(
    index: usize,
    card: &'a Card,
    not_found: &str,
    hint: &str,
    spinner_rotation: f32,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match &card.thumbnail {
        Thumbnail::Ready(image) => Image::new(image.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Thumbnail::Missing => Container::new(Text::new(not_found.to_string()).size(typography::BODY))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::placeholder)
            .into(),
        Thumbnail::Resolving | Thumbnail::Loading(_) => Container::new(
            AnimatedSpinner::new(palette::PRIMARY_400, spinner_rotation)
                .size(sizing::ICON_XL)
                .into_element(),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
    };

    let content = Column::new()
        .push(
            Container::new(picture)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
                .clip(true)
                .style(styles::container::media_frame),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .padding(spacing::MD)
                .push(Text::new(card.concept.title.as_str()).size(typography::TITLE_SM))
                .push(
                    Text::new(hint.to_string())
                        .size(typography::CAPTION)
                        .style(|_theme: &Theme| text::Style {
                            color: Some(palette::GRAY_400),
                        }),
                ),
        );

    button(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(0)
        .on_press(Message::Open(index))
        .style(styles::button::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_windows_get_one_column() {
        assert_eq!(columns_for(100.0), 1);
        assert_eq!(columns_for(0.0), 1);
    }

    #[test]
    fn wide_windows_fit_several_cards() {
        let three = sizing::CARD_WIDTH * 3.0 + spacing::LG * 2.0;
        assert_eq!(columns_for(three), 3);
        assert_eq!(columns_for(three - 1.0), 2);
    }
}

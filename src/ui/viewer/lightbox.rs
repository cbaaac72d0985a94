// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox: zoomable, rotatable image over a dark backdrop with
//! a control bar, info panel and keyboard hints.

use super::component::{Message, State};
use super::media_view;
use super::view::arrow_button;
use crate::domain::asset;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, container, responsive, text, Column, Container, Row, Scrollable, Space, Stack, Text,
};
use iced::{alignment, ContentFit, Element, Length, Size, Theme};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let viewer = state.viewer();

    let image = responsive(move |available: Size| {
        match media_view::transformed(state, available) {
            Some(media) => {
                let padding = media_view::centering_padding(state, available);
                Scrollable::new(Container::new(media).padding(padding))
                    .direction(Direction::Both {
                        vertical: Scrollbar::hidden(),
                        horizontal: Scrollbar::hidden(),
                    })
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            }
            None => media_view::current(state, i18n, ContentFit::Contain),
        }
    });

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(image)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XXL),
        )
        .push(
            Container::new(controls(state, i18n))
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Right),
        );

    if viewer.has_multiple() {
        let arrows = Row::new()
            .align_y(alignment::Vertical::Center)
            .padding(spacing::MD)
            .push(arrow_button("‹", Message::Previous))
            .push(Space::new().width(Length::Fill))
            .push(arrow_button("›", Message::Next));
        stack = stack.push(
            Container::new(arrows)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Center),
        );
    }

    stack = stack
        .push(
            Container::new(info_panel(state, i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom),
        )
        .push(
            Container::new(hints(i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Left)
                .align_y(alignment::Vertical::Top),
        );

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}

fn controls<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let viewer = state.viewer();
    let zoom = viewer.zoom();

    let tool = |label: String, message: Option<Message>| {
        button(Text::new(label).size(typography::BODY))
            .padding([spacing::XS, spacing::SM])
            .on_press_maybe(message)
            .style(styles::button::toolbar)
    };

    let percent = zoom.as_percent().to_string();
    let bar = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(tool(
            format!("− {}", i18n.tr("lightbox-zoom-out")),
            (!zoom.is_min()).then_some(Message::ZoomOut),
        ))
        .push(
            Text::new(i18n.tr_with_args("lightbox-zoom-percent", &[("percent", &percent)]))
                .size(typography::BODY)
                .width(Length::Fixed(sizing::ICON_XL)),
        )
        .push(tool(
            format!("+ {}", i18n.tr("lightbox-zoom-in")),
            (!zoom.is_max()).then_some(Message::ZoomIn),
        ))
        .push(tool(
            format!("↻ {}", i18n.tr("lightbox-rotate")),
            Some(Message::Rotate),
        ))
        .push(tool(i18n.tr("lightbox-reset"), Some(Message::ResetView)))
        .push(tool(
            format!("✕ {}", i18n.tr("lightbox-close")),
            Some(Message::CloseFullscreen),
        ));

    Container::new(bar)
        .padding(spacing::XXS)
        .style(styles::container::overlay_bar)
        .into()
}

fn info_panel<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let viewer = state.viewer();
    let file_label = state
        .assets()
        .get(viewer.index())
        .map(asset::display_name)
        .unwrap_or_default();

    let mut panel = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(state.concept().title.clone())
                .size(typography::TITLE_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WHITE),
                }),
        )
        .push(
            Text::new(file_label)
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_300),
                }),
        );

    if viewer.has_multiple() {
        panel = panel
            .push(
                Text::new(i18n.tr_with_args(
                    "viewer-counter",
                    &[
                        ("current", &(viewer.index() + 1).to_string()),
                        ("total", &viewer.count().to_string()),
                    ],
                ))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
            )
            .push(dots(viewer.index(), viewer.count()));
    }

    Container::new(panel)
        .max_width(sizing::INFO_PANEL_MAX_WIDTH)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::overlay_bar)
        .into()
}

fn dots<'a>(current: usize, count: usize) -> Element<'a, Message> {
    (0..count)
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            row.push(
                button(Space::new())
                    .width(Length::Fixed(sizing::INDEX_DOT))
                    .height(Length::Fixed(sizing::INDEX_DOT))
                    .padding(0)
                    .on_press(Message::Select(index))
                    .style(styles::button::dot(index == current)),
            )
        })
        .into()
}

fn hints<'a>(i18n: &I18n) -> Element<'a, Message> {
    let hint = |key: &str| {
        Text::new(i18n.tr(key))
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_400),
            })
    };

    container(
        Column::new()
            .spacing(spacing::XXS)
            .push(hint("lightbox-hint-close"))
            .push(hint("lightbox-hint-navigate"))
            .push(hint("lightbox-hint-zoom"))
            .push(hint("lightbox-hint-rotate")),
    )
    .padding(spacing::SM)
    .style(styles::container::overlay_bar)
    .into()
}

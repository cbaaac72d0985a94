// SPDX-License-Identifier: MPL-2.0
//! Windowed detail layout: header, carousel, thumbnails, audio panel and
//! description.

use super::component::{Message, State, ViewEnv};
use super::{description, media_view};
use crate::application::loader::LoadState;
use crate::i18n::fluent::I18n;
use crate::ui::components::loading;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{
    button, container, mouse_area, text, Column, Container, Row, Scrollable, Space, Stack, Text,
};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::{alignment, mouse, ContentFit, Element, Length, Theme};
use std::time::Duration;

pub fn detail<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;
    let header = Column::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(format!("← {}", i18n.tr("detail-back"))).size(typography::BODY_LG))
                .on_press(Message::BackToGallery)
                .style(styles::button::link)
                .padding(0),
        )
        .push(
            Text::new(state.concept().title.as_str())
                .size(typography::TITLE_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WHITE),
                }),
        );

    if !state.assets().is_complete() {
        let body = loading::view(
            state.spinner_rotation(),
            Some(i18n.tr("detail-loading-images")),
        );
        // Not scrollable: the spinner fills the remaining height.
        let column = Column::new()
            .spacing(spacing::LG)
            .max_width(sizing::DETAIL_MAX_WIDTH)
            .padding(spacing::XL)
            .push(header)
            .push(body);
        return Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::page)
            .into();
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(header)
        .push(carousel(state, i18n));

    if state.viewer().has_multiple() {
        content = content.push(thumbnails(state));
    }

    if let LoadState::Ready(_) = state.description() {
        content = content.push(audio_panel(&env));
    }

    content = content.push(description_section(state, i18n));

    page(content.into())
}

fn page(content: Element<'_, Message>) -> Element<'_, Message> {
    let centered = Container::new(
        Container::new(content)
            .max_width(sizing::DETAIL_MAX_WIDTH)
            .padding(spacing::XL),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    Container::new(Scrollable::new(centered).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn carousel<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let viewer = state.viewer();
    if viewer.count() == 0 {
        return Container::new(Text::new(i18n.tr("detail-no-images")).size(typography::BODY_LG))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::placeholder)
            .into();
    }

    let main = mouse_area(
        Container::new(media_view::current(state, i18n, ContentFit::Contain))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::OpenFullscreen)
    .interaction(mouse::Interaction::Pointer);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .push(main);

    if viewer.has_multiple() {
        let arrows = Row::new()
            .align_y(alignment::Vertical::Center)
            .padding(spacing::SM)
            .push(arrow_button("‹", Message::Previous))
            .push(Space::new().width(Length::Fill))
            .push(arrow_button("›", Message::Next));
        stack = stack.push(
            Container::new(arrows)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Center),
        );

        let counter = Container::new(
            Text::new(i18n.tr_with_args(
                "viewer-counter",
                &[
                    ("current", &(viewer.index() + 1).to_string()),
                    ("total", &viewer.count().to_string()),
                ],
            ))
            .size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::overlay_bar);
        stack = stack.push(
            Container::new(counter)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom),
        );
    }

    Container::new(stack)
        .width(Length::Fill)
        .clip(true)
        .style(styles::container::media_frame)
        .into()
}

pub(super) fn arrow_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        container(Text::new(glyph).size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::ARROW_BUTTON))
    .height(Length::Fixed(sizing::ARROW_BUTTON))
    .padding(0)
    .on_press(message)
    .style(styles::button::overlay(opacity::OVERLAY_MEDIUM, opacity::OVERLAY_STRONG))
    .into()
}

fn thumbnails(state: &State) -> Element<'_, Message> {
    let current = state.viewer().index();
    let row = (0..state.viewer().count()).fold(
        Row::new().spacing(spacing::XS),
        |row, index| {
            let thumb = media_view::still(state, index, Duration::ZERO);
            row.push(
                button(thumb)
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL))
                    .padding(spacing::XXS)
                    .on_press(Message::Select(index))
                    .style(styles::button::thumbnail(index == current)),
            )
        },
    );

    Scrollable::new(row)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

fn audio_panel<'a>(env: &ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;
    let label = if env.speech_supported {
        i18n.tr("speech-label-supported")
    } else {
        i18n.tr("speech-label-unsupported")
    };

    let (button_label, style): (String, fn(&Theme, button::Status) -> button::Style) =
        if env.speech_playing {
            (i18n.tr("speech-stop"), styles::button::danger)
        } else {
            (i18n.tr("speech-play"), styles::button::primary)
        };

    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(label).size(typography::BODY_LG).width(Length::Fill))
        .push(
            button(Text::new(button_label).size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::ToggleSpeech)
                .style(style),
        );

    let mut panel = Column::new().spacing(spacing::SM).push(controls);
    if env.speech_playing {
        let status = if env.speech_supported {
            i18n.tr("speech-status-playing")
        } else {
            i18n.tr("speech-status-feedback")
        };
        panel = panel.push(
            Container::new(Text::new(status).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::status_panel),
        );
    }

    Container::new(panel)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn description_section<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    match state.description() {
        LoadState::Loading => Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(
                    AnimatedSpinner::new(
                        palette::PRIMARY_400,
                        state.spinner_rotation(),
                    )
                    .size(sizing::ICON_XL)
                    .into_element(),
                )
                .push(Text::new(i18n.tr("detail-loading-description")).size(typography::BODY)),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into(),
        LoadState::Failed(reason) => {
            let detail = i18n.tr_with_args("detail-content-error", &[("reason", reason.as_str())]);
            Container::new(
                Text::new(i18n.tr_with_args("detail-error", &[("error", detail.as_str())]))
                    .size(typography::BODY_LG),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::error_panel)
            .into()
        }
        LoadState::Ready(loaded) => container(description::view(&loaded.blocks))
            .width(Length::Fill)
            .into(),
    }
}

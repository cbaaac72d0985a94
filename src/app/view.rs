// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, Screen};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::components::loading;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::{gallery, viewer};
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match self.screen {
            Screen::Loading => {
                loading::view(self.spinner_rotation, Some(self.i18n.tr("gallery-loading")))
            }
            Screen::Error => self.error_view(),
            Screen::Gallery => {
                gallery::view::view(&self.gallery, &self.i18n, self.spinner_rotation)
                    .map(Message::Gallery)
            }
            Screen::Detail => match &self.detail {
                Some(detail) => detail
                    .view(viewer::ViewEnv {
                        i18n: &self.i18n,
                        speech_supported: self.speech.is_supported(),
                        speech_playing: self.speech.is_playing(),
                    })
                    .map(Message::Detail),
                None => loading::view(self.spinner_rotation, None),
            },
        };

        match &self.warning {
            Some(key) => Column::new()
                .push(warning_banner(&self.i18n, key))
                .push(screen)
                .into(),
            None => screen,
        }
    }

    fn error_view(&self) -> Element<'_, Message> {
        let mut display = ErrorDisplay::new()
            .title(self.i18n.tr("error-title"))
            .details_visible(self.error_details_visible)
            .on_toggle_details(Message::ToggleErrorDetails)
            .details_labels(
                self.i18n.tr("error-details-show"),
                self.i18n.tr("error-details-hide"),
            );

        if let Some(err) = &self.manifest_error {
            let key = match err {
                Error::Manifest(_) => "error-manifest-invalid",
                _ => "error-manifest-fetch",
            };
            display = display
                .message(self.i18n.tr(key))
                .details(error_details(&self.i18n, err));
        } else {
            display = display.message(self.i18n.tr("error-manifest-fetch"));
        }

        centered_error_view(display)
    }
}

/// Localized technical detail for the error panel.
fn error_details(i18n: &I18n, err: &Error) -> String {
    match err {
        Error::Fetch(fetch) => i18n.tr_with_args(fetch.i18n_key(), &[("detail", fetch.reason())]),
        other => other.to_string(),
    }
}

fn warning_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr(key))
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WARNING_500),
                }),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
                .on_press(Message::DismissWarning)
                .style(styles::button::link),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FetchError;
    use crate::config::Config;

    #[test]
    fn fetch_details_are_localized() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let err = Error::Fetch(FetchError::Transport("connection refused".into()));
        let details = error_details(&i18n, &err);
        assert!(details.contains("connection refused"));
        assert!(details.starts_with("Server unreachable"));
    }

    #[test]
    fn manifest_details_use_display() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let err = Error::Manifest("expected value at line 1".into());
        assert_eq!(
            error_details(&i18n, &err),
            "Manifest Error: expected value at line 1"
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Error presentation shared by the full-screen and inline error states.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::new()
//!     .title("Something went wrong")
//!     .message("Failed to fetch concepts")
//!     .details("Fetch Error: Server unreachable: connection refused")
//!     .on_toggle_details(Message::ToggleErrorDetails)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, rule, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

const WARNING_GLYPH: &str = "\u{26A0}";

/// Builder for an error panel.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    toggle_details_message: Option<Message>,
    show_details_label: String,
    hide_details_label: String,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            details: None,
            show_details: false,
            toggle_details_message: None,
            show_details_label: "Show details".to_string(),
            hide_details_label: "Hide details".to_string(),
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title (main heading).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the user-facing explanation.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details (collapsible).
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    /// Sets the message to emit when toggling details visibility.
    #[must_use]
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    /// Sets the localized labels for the details toggle.
    #[must_use]
    pub fn details_labels(
        mut self,
        show_label: impl Into<String>,
        hide_label: impl Into<String>,
    ) -> Self {
        self.show_details_label = show_label.into();
        self.hide_details_label = hide_label.into();
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        content = content.push(
            Text::new(WARNING_GLYPH)
                .size(sizing::ICON_XL)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_400),
                }),
        );

        if let Some(title_text) = self.title {
            content = content.push(Text::new(title_text).size(typography::TITLE_MD).style(
                |_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_400),
                },
            ));
        }

        if let Some(message_text) = self.message {
            content = content.push(
                Text::new(message_text).size(typography::BODY_LG),
            );
        }

        if let Some(details_text) = self.details {
            if let Some(toggle_msg) = self.toggle_details_message {
                let label = if self.show_details {
                    self.hide_details_label
                } else {
                    self.show_details_label
                };
                content = content.push(
                    button(Text::new(label).size(typography::CAPTION))
                        .on_press(toggle_msg)
                        .style(crate::ui::styles::button::link),
                );
            }

            if self.show_details {
                content = content.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fill)
                        .push(rule::horizontal(1))
                        .push(Text::new(details_text).size(typography::CAPTION).style(
                            |_theme: &Theme| text::Style {
                                color: Some(palette::GRAY_400),
                            },
                        )),
                );
            }
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(|theme: &Theme| {
                let background = theme.extended_palette().background;
                container::Style {
                    background: Some(iced::Background::Color(background.weak.color)),
                    border: iced::Border {
                        color: background.strong.color,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}

/// Error panel centered in the whole window.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        ToggleDetails,
    }

    #[test]
    fn error_display_builder_works() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new()
            .title("Something went wrong")
            .message("Failed to fetch concepts")
            .details("connection refused")
            .details_visible(true)
            .on_toggle_details(TestMessage::ToggleDetails);

        assert_eq!(display.title.as_deref(), Some("Something went wrong"));
        assert_eq!(display.message.as_deref(), Some("Failed to fetch concepts"));
        assert_eq!(display.details.as_deref(), Some("connection refused"));
        assert!(display.show_details);
        assert!(display.toggle_details_message.is_some());
    }

    #[test]
    fn details_labels_can_be_customized() {
        let display: ErrorDisplay<TestMessage> =
            ErrorDisplay::new().details_labels("Afficher", "Masquer");
        assert_eq!(display.show_details_label, "Afficher");
        assert_eq!(display.hide_details_label, "Masquer");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Image widgets for decoded slots, shared by the carousel and the lightbox.

use super::component::{MediaSlot, Message, State};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length, Padding, Radians, Rotation, Size};
use std::time::Duration;

/// Current asset at the latest animation tick, filling its container.
pub fn current<'a>(state: &'a State, i18n: &I18n, fit: ContentFit) -> Element<'a, Message> {
    let index = state.viewer().index();
    match (state.slot(index), state.current_frame()) {
        (Some(MediaSlot::Ready(_)), Some(frame)) => Image::new(frame.handle.clone())
            .content_fit(fit)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (Some(MediaSlot::Failed), _) => failed(i18n),
        _ => spinner(state.spinner_rotation()),
    }
}

/// Current frame shrunk to fit `available`, then zoomed and rotated, as
/// shown in the lightbox. `None` until the frame is decoded.
pub fn transformed(state: &State, available: Size) -> Option<Element<'_, Message>> {
    let frame = state.current_frame()?;
    let size = lightbox_size(state, frame, available);
    Some(
        Image::new(frame.handle.clone())
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .content_fit(ContentFit::Contain)
            .rotation(Rotation::Solid(Radians(
                state.viewer().rotation().radians(),
            )))
            .into(),
    )
}

/// Padding that centers the lightbox image inside `available`.
pub fn centering_padding(state: &State, available: Size) -> Padding {
    let Some(frame) = state.current_frame() else {
        return Padding::ZERO;
    };
    let size = lightbox_size(state, frame, available);
    let horizontal = ((available.width - size.width) / 2.0).max(0.0);
    let vertical = ((available.height - size.height) / 2.0).max(0.0);
    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

fn lightbox_size(state: &State, frame: &ImageData, available: Size) -> Size {
    let viewer = state.viewer();
    let (width, height) = display_size(
        frame,
        viewer.rotation().swaps_dimensions(),
        viewer.zoom().value(),
        available,
    );
    Size::new(width, height)
}

/// A still of slot `index` (thumbnails), or a dim placeholder.
pub fn still(state: &State, index: usize, at: Duration) -> Element<'_, Message> {
    match state.slot(index) {
        Some(MediaSlot::Ready(media)) => Image::new(media.frame_at(at).handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        _ => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::placeholder)
            .into(),
    }
}

/// Layout box of a frame: never upscaled to fit, then multiplied by `zoom`.
/// Quarter turns occupy the transposed box.
fn display_size(frame: &ImageData, transposed: bool, zoom: f32, available: Size) -> (f32, f32) {
    let (width, height) = if transposed {
        (frame.height as f32, frame.width as f32)
    } else {
        (frame.width as f32, frame.height as f32)
    };
    if width <= 0.0 || height <= 0.0 {
        return (1.0, 1.0);
    }
    let fit = (available.width / width)
        .min(available.height / height)
        .min(1.0);
    let fit = if fit.is_finite() && fit > 0.0 { fit } else { 1.0 };
    let scale = fit * zoom;
    ((width * scale).max(1.0), (height * scale).max(1.0))
}

fn spinner<'a>(rotation: f32) -> Element<'a, Message> {
    Container::new(
        AnimatedSpinner::new(palette::PRIMARY_400, rotation)
            .size(sizing::ICON_XL)
            .into_element(),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn failed<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("viewer-decode-failed")).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    #[test]
    fn small_images_are_not_upscaled() {
        let size = display_size(&frame(200, 100), false, 1.0, Size::new(1000.0, 1000.0));
        assert_eq!(size, (200.0, 100.0));
        let zoomed = display_size(&frame(200, 100), false, 1.5, Size::new(1000.0, 1000.0));
        assert_eq!(zoomed, (300.0, 150.0));
    }

    #[test]
    fn large_images_shrink_to_fit() {
        let size = display_size(&frame(400, 100), false, 1.0, Size::new(200.0, 200.0));
        assert_eq!(size, (200.0, 50.0));
    }

    #[test]
    fn quarter_turn_fits_transposed_box() {
        let size = display_size(&frame(400, 100), true, 1.0, Size::new(200.0, 200.0));
        assert_eq!(size, (50.0, 200.0));
    }

    #[test]
    fn size_never_collapses() {
        let size = display_size(&frame(1, 1), false, 0.5, Size::new(10.0, 10.0));
        assert_eq!(size, (1.0, 1.0));
    }
}

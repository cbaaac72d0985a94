// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Frame interval for spinners and animated assets.
const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Key presses not captured by a focused widget.
pub fn keyboard() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed(key)),
        _ => None,
    })
}

/// Animation clock, only running while something on screen moves.
pub fn ticks(active: bool) -> Subscription<Message> {
    if active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

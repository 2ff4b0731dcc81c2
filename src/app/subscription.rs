// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes runtime events to messages. Keyboard events are forwarded together
//! with their capture status so the input dispatcher can apply the Space
//! suppression rule; everything else of interest is file drops. All routed
//! events carry the window id so fullscreen requests have a target.

use super::Message;
use iced::{event, window, Subscription};

/// Creates the application event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match &event {
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path.clone()))
        }
        // Window lifecycle events establish the window id before the first
        // key press, so the fullscreen control works immediately.
        event::Event::Window(window::Event::Opened { .. } | window::Event::Focused) => {
            Some(Message::RawEvent {
                window: window_id,
                event: event.clone(),
                captured: false,
            })
        }
        event::Event::Keyboard(_) => Some(Message::RawEvent {
            window: window_id,
            event: event.clone(),
            captured: matches!(status, event::Status::Captured),
        }),
        _ => None,
    })
}

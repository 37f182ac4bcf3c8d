// SPDX-License-Identifier: MPL-2.0
//! Global event subscription.
//!
//! The trigger gesture and the cursor fallback need input regardless of
//! which widget has focus, so both come from the raw event stream rather
//! than widget callbacks.

use crate::app::{App, Message};
use iced::event::{self, Event};
use iced::keyboard::key::Named;
use iced::keyboard::{self, Key};
use iced::{mouse, window, Subscription};

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(filtered)
    }
}

fn filtered(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Control),
            ..
        }) => Some(Message::ModifierPressed),
        Event::Keyboard(keyboard::Event::KeyReleased {
            key: Key::Named(Named::Control),
            ..
        }) => Some(Message::ModifierReleased),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    }
}

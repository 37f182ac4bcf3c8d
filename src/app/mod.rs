// SPDX-License-Identifier: MPL-2.0
//! Application state and wiring.
//!
//! [`App`] owns everything: the active screen, the scanned gallery, the
//! gesture tracker, the optional viewer session and the sanitized overlay
//! theme. `update`, `view` and `subscription` live in their own submodules.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::gallery::Gallery;
use crate::gesture::GestureTracker;
use crate::ui::{settings, OverlayTheme};
use crate::viewer::ViewerSession;
use iced::{window, Size, Task};

/// Initial window size, also used until the first resize event arrives.
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(1024.0, 768.0);

pub struct App {
    screen: Screen,
    config: Config,
    theme: OverlayTheme,
    gallery: Option<Gallery>,
    gallery_status: Option<String>,
    window_size: Size,
    scroll_offset: f32,
    gesture: GestureTracker,
    session: Option<ViewerSession>,
    settings: settings::State,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let theme = OverlayTheme::sanitize(&config.theme);
        let settings = settings::State::from_config(&config.theme);

        let app = Self {
            screen: Screen::default(),
            config,
            theme,
            gallery: None,
            gallery_status: None,
            window_size: DEFAULT_WINDOW_SIZE,
            scroll_offset: 0.0,
            gesture: GestureTracker::default(),
            session: None,
            settings,
        };

        let mut tasks = vec![window::get_latest()
            .and_then(window::get_size)
            .map(Message::WindowResized)];
        if let Some(folder) = flags.folder {
            tasks.push(Task::perform(
                async move { Gallery::scan(&folder) },
                Message::GalleryScanned,
            ));
        }

        (app, Task::batch(tasks))
    }

    pub fn title(&self) -> String {
        if let Some(session) = &self.session {
            return format!("{} - Iced Peek", session.caption());
        }
        match &self.gallery {
            Some(gallery) => format!("{} - Iced Peek", gallery.root_name()),
            None => "Iced Peek".to_string(),
        }
    }

    pub fn theme(&self) -> iced::Theme {
        iced::Theme::Dark
    }
}

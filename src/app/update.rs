// SPDX-License-Identifier: MPL-2.0
//! Message handling.

use crate::app::{App, Message, Screen};
use crate::config::defaults::ZOOM_STEP_FACTOR;
use crate::config::{self, Config, ThemeConfig};
use crate::error::Error;
use crate::gallery::layout::GridLayout;
use crate::gallery::Gallery;
use crate::ui::{overlay, settings, OverlayTheme};
use crate::viewer::ViewerSession;
use iced::{Task, Vector};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CursorMoved(position) => {
                self.gesture.pointer_moved(position);
                Task::none()
            }
            Message::ModifierPressed => {
                if self.gesture.register_press(Instant::now()) {
                    return self.trigger_overlay();
                }
                Task::none()
            }
            Message::ModifierReleased => {
                self.gesture.release();
                Task::none()
            }
            Message::EscapePressed => {
                if self.session.take().is_none() && self.screen == Screen::Settings {
                    self.screen = Screen::Gallery;
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                if let Some(session) = &mut self.session {
                    session.resized(size);
                }
                Task::none()
            }
            Message::GalleryScrolled(offset) => {
                self.scroll_offset = offset;
                Task::none()
            }
            Message::TileHovered(index) => {
                if self.session.is_none() {
                    self.gesture.hover_entered(index);
                }
                Task::none()
            }
            Message::TileUnhovered(index) => {
                self.gesture.hover_left(index);
                Task::none()
            }
            Message::OpenFolderDialog => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Open folder")
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FolderSelected,
            ),
            Message::FolderSelected(Some(folder)) => Task::perform(
                async move { Gallery::scan(&folder) },
                Message::GalleryScanned,
            ),
            Message::FolderSelected(None) => Task::none(),
            Message::GalleryScanned(Ok(gallery)) => {
                self.gallery = Some(gallery);
                self.gallery_status = None;
                self.scroll_offset = 0.0;
                self.gesture.clear_hover();
                Task::none()
            }
            Message::GalleryScanned(Err(error)) => {
                self.gallery_status = Some(format!("Could not read folder: {error}"));
                Task::none()
            }
            Message::OverlayLoaded { source, result } => {
                self.overlay_loaded(&source, result);
                Task::none()
            }
            Message::Overlay(event) => {
                self.update_overlay(event);
                Task::none()
            }
            Message::Settings(message) => self.update_settings(message),
            Message::SwitchScreen(screen) => {
                if screen == Screen::Settings {
                    self.settings = settings::State::from_config(&self.config.theme);
                }
                self.screen = screen;
                Task::none()
            }
        }
    }

    /// Resolves the double press to a gallery tile and opens the overlay
    /// over it. Ignored while an overlay is already up or away from the
    /// gallery.
    fn trigger_overlay(&mut self) -> Task<Message> {
        if self.session.is_some() || self.screen != Screen::Gallery {
            return Task::none();
        }

        let target = self.gesture.hovered().or_else(|| {
            let Some(gallery) = &self.gallery else {
                return None;
            };
            GridLayout::for_width(self.window_size.width).hit_test(
                self.gesture.last_pointer(),
                self.scroll_offset,
                gallery.len(),
            )
        });

        match target {
            Some(index) => self.open_overlay(index),
            None => Task::none(),
        }
    }

    fn open_overlay(&mut self, index: usize) -> Task<Message> {
        let Some(entry) = self.gallery.as_ref().and_then(|gallery| gallery.get(index)) else {
            return Task::none();
        };
        if !entry.is_visible() {
            return Task::none();
        }

        let source = entry.path().to_path_buf();
        self.session = Some(ViewerSession::open(
            source.clone(),
            entry.caption().to_string(),
        ));

        Task::perform(load_natural_size(source.clone()), move |result| {
            Message::OverlayLoaded {
                source: source.clone(),
                result,
            }
        })
    }

    /// Applies an async dimension probe. Results for anything but the
    /// currently opening session are stale and dropped.
    fn overlay_loaded(&mut self, source: &Path, result: Result<(u32, u32), Error>) {
        let Some(session) = &mut self.session else {
            return;
        };
        if session.is_open() || session.source() != source {
            return;
        }

        match result {
            Ok((width, height)) => session.loaded(width, height, self.window_size),
            Err(_) => {
                // The file disappeared or stopped decoding; tear the
                // overlay down instead of leaving it stuck opening.
                self.session = None;
            }
        }
    }

    fn update_overlay(&mut self, event: overlay::Event) {
        let window = self.window_size;
        let Some(session) = &mut self.session else {
            return;
        };

        match event {
            overlay::Event::StagePressed(position) => {
                session.begin_drag(position);
            }
            overlay::Event::StageMoved(position) => {
                if session.is_dragging() {
                    session.drag_to(position, window);
                }
            }
            overlay::Event::StageReleased(position) => {
                let suppress_click = session.end_drag();
                if !suppress_click && !session.rendered_bounds(window).contains(position) {
                    self.session = None;
                }
            }
            overlay::Event::Wheeled { position, zoom_in } => {
                let anchor = Vector::new(
                    position.x - window.width / 2.0,
                    position.y - window.height / 2.0,
                );
                let factor = if zoom_in {
                    ZOOM_STEP_FACTOR
                } else {
                    1.0 / ZOOM_STEP_FACTOR
                };
                session.zoom_around(anchor, factor, window);
            }
            overlay::Event::ZoomInPressed => {
                session.zoom_around(Vector::new(0.0, 0.0), ZOOM_STEP_FACTOR, window);
            }
            overlay::Event::ZoomOutPressed => {
                session.zoom_around(Vector::new(0.0, 0.0), 1.0 / ZOOM_STEP_FACTOR, window);
            }
            overlay::Event::ResetPressed => session.reset(),
            overlay::Event::ClosePressed => self.session = None,
        }
    }

    fn update_settings(&mut self, message: settings::Message) -> Task<Message> {
        match message {
            settings::Message::InputChanged(key, value) => {
                self.settings.set_input(key, value);
            }
            settings::Message::Submit => {
                self.save_theme(self.settings.sanitized(), "Saved.");
            }
            settings::Message::ResetKey(key) => {
                self.settings.reset_key(key);
                self.save_theme(self.settings.sanitized(), &format!("{} reset.", key.label()));
            }
            settings::Message::ResetAll => {
                let theme = ThemeConfig::default();
                self.settings.apply(&theme);
                self.save_theme(theme, "Defaults restored.");
            }
            settings::Message::Back => self.screen = Screen::Gallery,
        }
        Task::none()
    }

    /// Persists a theme and, only if the write succeeded, makes it the
    /// active overlay theme.
    fn save_theme(&mut self, theme: ThemeConfig, success_status: &str) {
        let candidate = Config {
            theme: theme.clone(),
        };

        match config::save(&candidate) {
            Ok(()) => {
                self.theme = OverlayTheme::sanitize(&theme);
                self.config = candidate;
                self.settings.apply(&theme);
                self.settings.set_status(success_status, false);
            }
            Err(_) => self.settings.set_status("Failed to save settings.", true),
        }
    }
}

/// Reads an image file and probes its natural pixel dimensions without
/// decoding the full frame.
async fn load_natural_size(path: PathBuf) -> Result<(u32, u32), Error> {
    let bytes = tokio::fs::read(&path).await?;
    let reader = image_rs::ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    Ok(reader.into_dimensions()?)
}

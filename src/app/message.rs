// SPDX-License-Identifier: MPL-2.0
//! Application messages and launch flags.

use crate::app::screen::Screen;
use crate::error::Error;
use crate::gallery::Gallery;
use crate::ui::{overlay, settings};
use iced::{Point, Size};
use std::path::PathBuf;

/// Options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Folder to scan on startup instead of waiting for the picker.
    pub folder: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Global input, from the event subscription.
    CursorMoved(Point),
    ModifierPressed,
    ModifierReleased,
    EscapePressed,
    WindowResized(Size),

    // Gallery.
    GalleryScrolled(f32),
    TileHovered(usize),
    TileUnhovered(usize),
    OpenFolderDialog,
    FolderSelected(Option<PathBuf>),
    GalleryScanned(Result<Gallery, Error>),

    // Overlay lifecycle and interaction.
    OverlayLoaded {
        source: PathBuf,
        result: Result<(u32, u32), Error>,
    },
    Overlay(overlay::Event),

    // Settings screen.
    Settings(settings::Message),
    SwitchScreen(Screen),
}

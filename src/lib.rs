// SPDX-License-Identifier: MPL-2.0
//! `iced_peek` is a small image gallery built with the Iced GUI framework.
//!
//! Double-tapping Ctrl over a gallery tile opens the image full size in a
//! dimmed overlay with cursor-anchored zoom and drag panning. The overlay
//! chrome is themable; the theme persists to a TOML settings file.

#![doc(html_root_url = "https://docs.rs/iced_peek/0.1.0")]

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod gesture;
pub mod ui;
pub mod viewer;

#[cfg(test)]
pub mod test_utils;

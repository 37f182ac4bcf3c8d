// SPDX-License-Identifier: MPL-2.0
//! Folder scanning for the gallery grid.
//!
//! A [`Gallery`] is a flat, name-sorted list of the image files in one
//! directory. Each entry probes the image header for its pixel dimensions;
//! entries whose dimensions cannot be read stay in the list but are not
//! eligible for magnification.

pub mod layout;

use crate::error::Result;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

/// File extensions the gallery picks up, lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

#[derive(Debug, Clone)]
pub struct GalleryEntry {
    path: PathBuf,
    caption: String,
    dimensions: Option<(u32, u32)>,
    handle: Handle,
}

impl GalleryEntry {
    fn new(path: PathBuf) -> Self {
        let caption = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dimensions = image_rs::image_dimensions(&path).ok();
        let handle = Handle::from_path(&path);

        Self {
            path,
            caption,
            dimensions,
            handle,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Whether the entry has readable, non-degenerate pixel dimensions.
    /// Only visible entries can be opened in the overlay.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.dimensions, Some((w, h)) if w > 0 && h > 0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    root: PathBuf,
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// Scans a directory for supported image files, sorted by file name.
    /// Subdirectories are not descended into.
    pub fn scan(root: &Path) -> Result<Self> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_supported_extension(path))
            .collect();
        paths.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));

        Ok(Self {
            root: root.to_path_buf(),
            entries: paths.into_iter().map(GalleryEntry::new).collect(),
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The folder name shown in the top bar.
    #[must_use]
    pub fn root_name(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        let image = image_rs::RgbaImage::new(width, height);
        image.save(dir.join(name)).expect("write test image");
    }

    #[test]
    fn scan_finds_images_sorted_by_name() {
        let dir = TempDir::new().expect("tempdir");
        write_png(dir.path(), "beta.png", 2, 1);
        write_png(dir.path(), "alpha.png", 3, 2);
        fs::write(dir.path().join("notes.txt"), "not an image").expect("write txt");

        let gallery = Gallery::scan(dir.path()).expect("scan");
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.entries()[0].caption(), "alpha");
        assert_eq!(gallery.entries()[1].caption(), "beta");
        assert_eq!(gallery.entries()[0].dimensions(), Some((3, 2)));
    }

    #[test]
    fn unreadable_image_is_listed_but_not_visible() {
        let dir = TempDir::new().expect("tempdir");
        write_png(dir.path(), "good.png", 2, 2);
        fs::write(dir.path().join("broken.png"), b"\x89PNG\r\n\x1a\nnot-a-png")
            .expect("write corrupt file");

        let gallery = Gallery::scan(dir.path()).expect("scan");
        assert_eq!(gallery.len(), 2);

        let broken = gallery
            .entries()
            .iter()
            .find(|entry| entry.caption() == "broken")
            .expect("broken entry present");
        assert!(!broken.is_visible());

        let good = gallery
            .entries()
            .iter()
            .find(|entry| entry.caption() == "good")
            .expect("good entry present");
        assert!(good.is_visible());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = TempDir::new().expect("tempdir");
        write_png(dir.path(), "upper.PNG", 1, 1);

        let gallery = Gallery::scan(dir.path()).expect("scan");
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn scan_of_missing_directory_fails() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("nope");
        assert!(Gallery::scan(&missing).is_err());
    }

    #[test]
    fn root_name_is_the_folder_name() {
        let dir = TempDir::new().expect("tempdir");
        let nested = dir.path().join("holiday");
        fs::create_dir(&nested).expect("mkdir");

        let gallery = Gallery::scan(&nested).expect("scan");
        assert_eq!(gallery.root_name(), "holiday");
        assert!(gallery.is_empty());
    }
}

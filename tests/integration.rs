// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests across the configuration, gallery and viewer layers.

use approx::assert_abs_diff_eq;
use iced::{Point, Size, Vector};
use iced_peek::config::{self, Config, ThemeConfig};
use iced_peek::gallery::layout::GridLayout;
use iced_peek::gallery::Gallery;
use iced_peek::ui::OverlayTheme;
use iced_peek::viewer::ViewerSession;
use std::path::PathBuf;
use tempfile::TempDir;

const WINDOW: Size = Size::new(1296.0, 896.0);

#[test]
fn theme_survives_a_save_load_cycle_and_sanitizes() {
    let temp_dir = TempDir::new().expect("tempdir");
    let path = temp_dir.path().join("settings.toml");

    let stored = Config {
        theme: ThemeConfig {
            button_bg: Some("rgba(10, 20, 30, 0.5)".to_string()),
            button_text: Some("definitely not a color".to_string()),
            button_disabled_opacity: Some(0.4),
            ..ThemeConfig::default()
        },
    };
    config::save_to_path(&stored, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded, stored);

    let theme = OverlayTheme::sanitize(&loaded.theme);
    // The valid entries apply…
    assert_abs_diff_eq!(theme.button_bg.a, 0.5);
    assert_abs_diff_eq!(theme.button_disabled_opacity, 0.4);
    // …and the invalid one falls back to its default.
    assert_eq!(theme.button_text, OverlayTheme::default().button_text);
}

#[test]
fn scanned_folder_maps_to_grid_positions() {
    let dir = TempDir::new().expect("tempdir");
    let image = image_rs::RgbaImage::new(8, 6);
    for name in ["one.png", "two.png", "three.png"] {
        image.save(dir.path().join(name)).expect("write image");
    }

    let gallery = Gallery::scan(dir.path()).expect("scan");
    assert_eq!(gallery.len(), 3);
    assert!(gallery.entries().iter().all(|entry| entry.is_visible()));

    let layout = GridLayout::for_width(1024.0);
    // Every entry must be reachable through the cursor hit test at the
    // center of its tile.
    for index in 0..gallery.len() {
        let origin = layout.tile_origin(index);
        let cursor = Point::new(origin.x + 80.0, origin.y + 80.0 + 48.0);
        assert_eq!(layout.hit_test(cursor, 0.0, gallery.len()), Some(index));
    }
}

#[test]
fn full_viewer_interaction_flow() {
    let mut session = ViewerSession::open(PathBuf::from("large.png"), "large".to_string());
    assert!(!session.is_open());

    session.loaded(4000, 3000, WINDOW);
    assert!(session.is_open());
    assert_abs_diff_eq!(session.scale(), 0.266_666_7, epsilon = 1e-4);
    assert!(session.is_at_fit());

    // Wheel in twice around a point right of center.
    let anchor = Vector::new(200.0, 0.0);
    assert!(session.zoom_around(anchor, 1.1, WINDOW));
    assert!(session.zoom_around(anchor, 1.1, WINDOW));
    assert!(!session.is_at_fit());

    // Zoom far enough in to pan, then drag.
    for _ in 0..15 {
        session.zoom_around(Vector::new(0.0, 0.0), 1.1, WINDOW);
    }
    assert!(session.is_pannable());
    assert!(session.begin_drag(Point::new(600.0, 400.0)));
    session.drag_to(Point::new(560.0, 430.0), WINDOW);
    let translate = session.translate();
    assert!(translate.x < 0.0);
    assert!(translate.y > 0.0);

    // A real drag suppresses the backdrop click on release.
    assert!(session.end_drag());
    assert!(!session.is_dragging());

    // Fit returns to the initial view.
    session.reset();
    assert!(session.is_at_fit());
    assert_eq!(session.translate(), Vector::new(0.0, 0.0));
}

#[test]
fn small_images_never_upscale_past_native_size() {
    let mut session = ViewerSession::open(PathBuf::from("icon.png"), "icon".to_string());
    session.loaded(64, 64, WINDOW);

    assert_abs_diff_eq!(session.fit_scale(), 1.0);
    let bounds = session.rendered_bounds(WINDOW);
    assert_abs_diff_eq!(bounds.width, 64.0, epsilon = 1e-3);
    assert!(bounds.contains(Point::new(WINDOW.width / 2.0, WINDOW.height / 2.0)));
}

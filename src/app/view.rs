// SPDX-License-Identifier: MPL-2.0
//! Screen composition.

use crate::app::{App, Message, Screen};
use crate::gallery::layout::{GRID_PADDING, TILE_SIZE, TILE_SPACING, TOP_BAR_HEIGHT};
use crate::gallery::{Gallery, GalleryEntry};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::overlay;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, column, container, horizontal_space, image, mouse_area, opaque, row, scrollable, stack,
    text, Column, Row,
};
use iced::{ContentFit, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match self.screen {
            Screen::Gallery => self.view_gallery(),
            Screen::Settings => self.settings.view().map(Message::Settings),
        };

        match &self.session {
            Some(session) => {
                let magnifier =
                    overlay::view(session, &self.theme, self.window_size).map(Message::Overlay);
                stack![screen, opaque(magnifier)].into()
            }
            None => screen,
        }
    }

    fn view_gallery(&self) -> Element<'_, Message> {
        let folder_label = match &self.gallery {
            Some(gallery) => gallery.root_name(),
            None => "No folder open".to_string(),
        };

        let top_bar = container(
            row![
                text(folder_label).size(typography::BODY),
                horizontal_space(),
                button(text("Theme settings").size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::SwitchScreen(Screen::Settings)),
                button(text("Open folder\u{2026}").size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::OpenFolderDialog),
            ]
            .spacing(spacing::XS)
            .align_y(Vertical::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center);

        let body: Element<'_, Message> = match &self.gallery {
            Some(gallery) if !gallery.is_empty() => self.view_grid(gallery),
            Some(_) => centered_hint("This folder has no supported images."),
            None => centered_hint(
                "Open a folder to browse images. Double-tap Ctrl over an image to magnify it.",
            ),
        };

        let mut content = column![top_bar, body];
        if let Some(status) = &self.gallery_status {
            content = content.push(
                container(text(status.clone()).size(typography::BODY).color(palette::ERROR_300))
                    .padding(spacing::SM),
            );
        }

        content.into()
    }

    fn view_grid<'a>(&'a self, gallery: &'a Gallery) -> Element<'a, Message> {
        let columns = crate::gallery::layout::GridLayout::for_width(self.window_size.width)
            .columns();

        let rows = gallery
            .entries()
            .chunks(columns)
            .enumerate()
            .map(|(row_index, entries)| {
                Row::with_children(entries.iter().enumerate().map(|(col_index, entry)| {
                    tile(entry, row_index * columns + col_index)
                }))
                .spacing(TILE_SPACING)
                .into()
            });

        let grid = Column::with_children(rows)
            .spacing(TILE_SPACING)
            .padding(GRID_PADDING);

        scrollable(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| Message::GalleryScrolled(viewport.absolute_offset().y))
            .into()
    }
}

fn tile(entry: &GalleryEntry, index: usize) -> Element<'_, Message> {
    let content: Element<'_, Message> = if entry.is_visible() {
        image(entry.handle().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        // No readable dimensions; show the caption instead of a broken
        // thumbnail.
        container(text(entry.caption().to_string()).size(typography::CAPTION))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    };

    mouse_area(
        container(content)
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(TILE_SIZE)),
    )
    .on_enter(Message::TileHovered(index))
    .on_exit(Message::TileUnhovered(index))
    .into()
}

fn centered_hint<'a>(hint: &'a str) -> Element<'a, Message> {
    container(text(hint).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

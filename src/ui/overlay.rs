// SPDX-License-Identifier: MPL-2.0
//! The magnification overlay: dimmed backdrop, canvas stage, close button
//! and zoom toolbar, stacked over the gallery.
//!
//! The stage is a [`canvas::Program`] so pointer presses, moves, releases
//! and wheel events arrive with window-space positions; the application
//! layer turns them into drag and zoom updates on the session.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::OverlayTheme;
use crate::viewer::ViewerSession;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::{button, canvas, container, row, stack, text, Canvas};
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Interactions produced by the overlay, consumed by the application.
#[derive(Debug, Clone)]
pub enum Event {
    StagePressed(Point),
    StageMoved(Point),
    StageReleased(Point),
    Wheeled { position: Point, zoom_in: bool },
    ZoomInPressed,
    ZoomOutPressed,
    ResetPressed,
    ClosePressed,
}

pub fn view<'a>(
    session: &'a ViewerSession,
    theme: &OverlayTheme,
    window: Size,
) -> Element<'a, Event> {
    let backdrop = container(text(""))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::backdrop);

    let stage = Canvas::new(Stage { session, window })
        .width(Length::Fill)
        .height(Length::Fill);

    let close = container(
        button(text("\u{2715}").size(typography::BODY))
            .padding(spacing::XS)
            .style(styles::close_button(theme))
            .on_press(Event::ClosePressed),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Top);

    let interactive = session.is_open();
    let toolbar_button = |label: &'a str, message: Event, enabled: bool| {
        button(text(label).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::toolbar_button(theme))
            .on_press_maybe((interactive && enabled).then_some(message))
    };

    let toolbar = container(
        row![
            toolbar_button("\u{2212}", Event::ZoomOutPressed, session.can_zoom_out()),
            toolbar_button("+", Event::ZoomInPressed, session.can_zoom_in()),
            toolbar_button("Fit", Event::ResetPressed, !session.is_at_fit()),
        ]
        .spacing(spacing::XS),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom);

    stack![backdrop, stage, close, toolbar].into()
}

struct Stage<'a> {
    session: &'a ViewerSession,
    window: Size,
}

impl canvas::Program<Event> for Stage<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        _bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Event>) {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position() {
                    return (canvas::event::Status::Captured, Some(Event::StagePressed(position)));
                }
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                return (canvas::event::Status::Captured, Some(Event::StageMoved(position)));
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                // Releases outside the window still end the drag.
                let position = cursor.position().unwrap_or(Point::ORIGIN);
                return (canvas::event::Status::Captured, Some(Event::StageReleased(position)));
            }
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let vertical = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => y,
                };
                if vertical != 0.0 {
                    if let Some(position) = cursor.position() {
                        return (
                            canvas::event::Status::Captured,
                            Some(Event::Wheeled {
                                position,
                                zoom_in: vertical > 0.0,
                            }),
                        );
                    }
                }
            }
            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if self.session.is_open() {
            // rendered_bounds is in window space; the canvas fills the
            // window, so the local rect only differs by the canvas origin.
            let rendered = self.session.rendered_bounds(self.window);
            let local = Rectangle {
                x: rendered.x - bounds.x,
                y: rendered.y - bounds.y,
                ..rendered
            };
            frame.draw_image(local, canvas::Image::new(self.session.handle().clone()));
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.session.is_dragging() {
            mouse::Interaction::Grabbing
        } else if self.session.is_pannable() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

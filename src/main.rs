// SPDX-License-Identifier: MPL-2.0

use iced_peek::app::{App, Flags, DEFAULT_WINDOW_SIZE};
use std::path::PathBuf;

fn main() -> iced::Result {
    let args = pico_args::Arguments::from_env();

    let flags = Flags {
        folder: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    };

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(DEFAULT_WINDOW_SIZE)
        .run_with(move || App::new(flags))
}

// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        panel_count: args.opt_value_from_str("--panels").unwrap_or(None),
        start_index: args.opt_value_from_str("--start").unwrap_or(None),
    };

    app::run(flags)
}

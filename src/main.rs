// SPDX-License-Identifier: MPL-2.0
use locale_switcher::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        endpoint: args.opt_value_from_str("--endpoint").unwrap_or(None),
    };

    app::run(flags)
}

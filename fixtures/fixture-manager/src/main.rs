// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod command;

use clap::Parser;
use color_eyre::Result;
use command::FixtureManagerApp;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = FixtureManagerApp::parse();
    let config = ConfigBuilder::new()
        .add_filter_allow_str("lopt")
        .add_filter_allow_str("fixture_details")
        .build();
    TermLogger::init(
        app.log_level(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    app.exec()
}

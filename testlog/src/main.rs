// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use color_eyre::Result;
use testlog::{OutputContext, TestlogApp, handle_clap_error};

fn main() -> Result<()> {
    color_eyre::install()?;

    let output = OutputContext::from_env().init();

    let app = match TestlogApp::try_parse_paths(std::env::args_os()) {
        Ok(app) => app,
        Err(err) => std::process::exit(handle_clap_error(err)),
    };

    match app.exec() {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            error.display_to_stderr(&output.stderr_styles());
            std::process::exit(error.process_exit_code())
        }
    }
}

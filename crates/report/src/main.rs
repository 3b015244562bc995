#![warn(clippy::pedantic)]

use std::io;

use anyhow::Context;
use stride_report::{PACKAGES, settings::Settings, write_report};

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("failed to read settings")?;
    stride_report::log::init(&settings).context("failed to initialize logger")?;

    write_report(&mut io::stdout().lock(), &PACKAGES)
}

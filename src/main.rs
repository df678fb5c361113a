use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::warn;
use simple_logger::SimpleLogger;

use life_cli::{
    application::iterate_with,
    input::{self, Args},
    rendering::render_sequence,
};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    SimpleLogger::new()
        .with_level(args.log_level())
        .init()
        .context("failed to install logger")?;

    let mut stdout = io::stdout().lock();

    if args.list {
        stdout.write_all(input::pattern_listing().as_bytes())?;
        return Ok(());
    }

    let request = match args.request() {
        Ok(request) => request,
        Err(err) => {
            warn!("{err}");
            writeln!(stdout, "{}", input::USAGE)?;
            return Ok(());
        }
    };

    let sequence = iterate_with(&request.pattern.seed(), request.iterations, request.algorithm);
    writeln!(stdout, "{}", render_sequence(&sequence, &request.glyphs))?;
    stdout.flush().context("failed to write generations")?;

    Ok(())
}

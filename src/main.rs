//! # Pedometer Signal Command-Line Entry Point
//!
//! Reads an accelerometer blob from a file or stdin, runs it through the
//! pipeline and prints either a JSON report (default) or an ASCII chart of the
//! filtered signal (`--ascii`).
//!
//! ```text
//! pedometer-signal [--ascii] [--config PATH] [FILE]
//! ```
//!
//! Logs go to stderr so stdout stays machine-readable.

// Test modules
#[cfg(test)]
mod tests;

use anyhow::{bail, Context};
use pedometer_lib::{config::PipelineConfig, logger, renderer::draw_ascii, report::Report, Parser};
use std::io::Read;
use std::path::PathBuf;
use std::{env, fs, io};

/// Parsed command-line options
#[derive(Debug, Default, PartialEq)]
struct Options {
    ascii: bool,
    config: Option<PathBuf>,
    input: Option<PathBuf>,
}

/// Parse command-line arguments (excluding the program name).
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ascii" => options.ascii = true,
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => {
                if options.input.is_some() {
                    bail!("only one input file may be given");
                }
                options.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

/// Read the blob from `path`, or from stdin when no path is given.
fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let options = parse_args(env::args().skip(1))?;
    let config = match &options.config {
        Some(path) => PipelineConfig::load_from_path(path),
        None => PipelineConfig::load(),
    };

    let raw = read_input(options.input.as_ref())?;
    let parser = Parser::with_config(raw, &config).context("parsing accelerometer data")?;
    log::info!(
        "parsed {} {} samples",
        parser.len(),
        parser.format()
    );

    if options.ascii {
        draw_ascii(parser.filtered_series(), config.output.ascii_rows);
        return Ok(());
    }

    let json = Report::from(&parser)
        .to_json(config.output.pretty_json)
        .context("serializing report")?;
    println!("{json}");
    Ok(())
}

//! Command-line interface for treerender
//! Reads the first line of the input file and writes its indented rendering to the output file.
//!
//! Usage:
//!   treerender `<input>` `<output>` [--config `<file>`] [--mode `<mode>`] [--line-ending `<le>`] [--format `<format>`]
//!
//! Set `RUST_LOG=debug` to trace the pipeline on stderr.

use clap::{Arg, ArgMatches, Command};
use std::path::Path;
use treerender::pipeline::{render_file, OutputFormat};
use treerender::settings::Loader;
use treerender::{RenderOptions, Result};

/// Optional per-directory configuration picked up automatically.
const LOCAL_CONFIG: &str = "treerender.toml";

fn main() {
    env_logger::init();

    let matches = Command::new("treerender")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders a parenthesized number tree as indented text")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("File whose first line holds the tree, e.g. (1 (2 3) 4)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("File the rendering is written to")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("When output is written: as validated, or only after the whole tree is accepted")
                .value_parser(["streaming", "validated"]),
        )
        .arg(
            Arg::new("line-ending")
                .long("line-ending")
                .help("Line terminator of rendered lines")
                .value_parser(["native", "lf", "crlf"]),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["tree", "token-json"])
                .default_value("tree"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let options = load_options(matches)?;
    log::debug!("render options: {:?}", options);

    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("token-json") => OutputFormat::TokenJson,
        _ => OutputFormat::Tree,
    };

    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let output = matches
        .get_one::<String>("output")
        .expect("output is a required argument");
    render_file(Path::new(input), Path::new(output), &options, format)
}

fn load_options(matches: &ArgMatches) -> Result<RenderOptions> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(mode) = matches.get_one::<String>("mode") {
        loader = loader.set_override("render.mode", mode.as_str())?;
    }
    if let Some(line_ending) = matches.get_one::<String>("line-ending") {
        loader = loader.set_override("render.line_ending", line_ending.as_str())?;
    }
    let config = loader.build()?;
    Ok(RenderOptions::from(&config))
}
